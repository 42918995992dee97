use crate::config::Metric;

/// Gas per second from gas limit per block.
#[inline]
pub fn to_rate_per_second(gas_limit: f64, block_time_seconds: f64) -> f64 {
    gas_limit / block_time_seconds
}

/// Approximate transactions per second.
/// A non-positive `gas_per_tx` yields 0 rather than an infinite or negative rate,
/// so a half-edited input field never breaks the chart.
#[inline]
pub fn to_transaction_rate(gas_limit: f64, gas_per_tx: f64, block_time_seconds: f64) -> f64 {
    if gas_per_tx <= 0.0 {
        return 0.0;
    }
    to_rate_per_second(gas_limit, block_time_seconds) / gas_per_tx
}

/// Value of the flat reference line, expressed in the selected metric.
pub fn reference_value(
    gas_per_tx: f64,
    metric: Metric,
    block_time_seconds: f64,
    reference_tps: f64,
) -> f64 {
    if metric == Metric::TransactionsPerSecond {
        return reference_tps;
    }
    let gps = reference_tps * gas_per_tx;
    if metric == Metric::RatePerSecond {
        return gps;
    }
    gps * block_time_seconds
}

impl Metric {
    /// Converts a projected gas limit per block into this metric.
    pub fn convert(&self, gas_limit: f64, gas_per_tx: f64, block_time_seconds: f64) -> f64 {
        match self {
            Metric::RatePerSecond => to_rate_per_second(gas_limit, block_time_seconds),
            Metric::TransactionsPerSecond => {
                to_transaction_rate(gas_limit, gas_per_tx, block_time_seconds)
            }
            Metric::CapacityPerUnit => gas_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BLOCK_TIME_SECONDS;
    use crate::config::constants::reference::SOLANA_TPS_HIGH;

    #[test]
    fn rate_per_second_is_plain_division() {
        assert_eq!(to_rate_per_second(60_000_000.0, 12.0), 5_000_000.0);
        for (c, t) in [(1.0, 3.0), (45_000_000.0, 7.5), (123_456.789, 0.25)] {
            assert_eq!(to_rate_per_second(c, t), c / t);
        }
    }

    #[test]
    fn transaction_rate_for_plain_transfers() {
        let tps = to_transaction_rate(60_000_000.0, 21_000.0, 12.0);
        assert!((tps - 238.095_238_095).abs() < 1e-6, "tps={tps}");
    }

    #[test]
    fn transaction_rate_saturates_on_non_positive_gas() {
        for c in [0.0, 1.0, 60_000_000.0, 1e15] {
            assert_eq!(to_transaction_rate(c, 0.0, 12.0), 0.0);
            assert_eq!(to_transaction_rate(c, -5.0, 12.0), 0.0);
        }
    }

    #[test]
    fn reference_value_per_metric() {
        let tps = reference_value(21_000.0, Metric::TransactionsPerSecond, 12.0, SOLANA_TPS_HIGH);
        assert_eq!(tps, 100_000.0);

        let gps = reference_value(21_000.0, Metric::RatePerSecond, 12.0, SOLANA_TPS_HIGH);
        assert_eq!(gps, 2_100_000_000.0);

        let glpb = reference_value(21_000.0, Metric::CapacityPerUnit, 12.0, SOLANA_TPS_HIGH);
        assert_eq!(glpb, 25_200_000_000.0);
    }

    #[test]
    fn reference_glpb_is_gps_times_block_time() {
        for block_time in [1.0, 2.0, 12.0, 0.4] {
            let gps = reference_value(50_000.0, Metric::RatePerSecond, block_time, 3_000.0);
            let glpb = reference_value(50_000.0, Metric::CapacityPerUnit, block_time, 3_000.0);
            assert_eq!(glpb, gps * block_time);
        }
    }

    #[test]
    fn convert_dispatches_on_metric() {
        let gl = 60_000_000.0;
        assert_eq!(Metric::CapacityPerUnit.convert(gl, 21_000.0, BLOCK_TIME_SECONDS), gl);
        assert_eq!(Metric::RatePerSecond.convert(gl, 21_000.0, BLOCK_TIME_SECONDS), 5_000_000.0);
        assert_eq!(Metric::TransactionsPerSecond.convert(gl, 0.0, BLOCK_TIME_SECONDS), 0.0);
    }
}
