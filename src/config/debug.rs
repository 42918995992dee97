//! Debugging feature flags.

pub struct LogFlags {
    /// Log every settings change that triggers a recompute.
    pub log_recompute: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Log settings loaded from / saved to eframe storage
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_recompute: true,
    log_performance: false,
    log_persistence: false,
};
