use anyhow::{Context, Result, ensure};
use clap::Parser;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use gas_projection::config::{GasPerTx, GrowthPct, Metric, ReferenceChain};
use gas_projection::engine::{project_series, reference_label, reference_value};
use gas_projection::utils::{format_compact, format_date};
use gas_projection::{ProjectionHorizon, ProjectionSettings, recompute};

/// Print the gas-limit projection as a table (or the full chart as JSON).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YoY gas limit increase in percent (clamped to 0..=500)
    #[arg(long, default_value_t = 200.0)]
    yoy: f64,

    /// Gas per transaction used for TPS (at least 1)
    #[arg(long, default_value_t = 21_000.0)]
    gas_per_tx: f64,

    /// Metric for --json output: gps, tps or glpb
    #[arg(long, default_value = "gps")]
    metric: Metric,

    /// Include the reference overlay
    #[arg(long, default_value_t = false)]
    reference: bool,

    /// Override the reference throughput (transactions per second)
    #[arg(long)]
    reference_tps: Option<f64>,

    /// Print every Nth month (the final month is always printed)
    #[arg(long, default_value_t = 12)]
    every: u32,

    /// Emit the full chart as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "GLPB")]
    glpb: String,
    #[tabled(rename = "GPS")]
    gps: String,
    #[tabled(rename = "TPS")]
    tps: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    ensure!(args.every > 0, "--every must be at least 1");
    if let Some(tps) = args.reference_tps {
        ensure!(tps.is_finite() && tps >= 0.0, "--reference-tps must be a non-negative number");
    }

    let horizon = ProjectionHorizon::default();
    let settings = ProjectionSettings {
        metric: args.metric,
        yoy: GrowthPct::new(args.yoy),
        gas_per_tx: GasPerTx::new(args.gas_per_tx),
        show_reference: args.reference,
        reference: ReferenceChain::default(),
        log_scale: false,
    };
    log::info!("Settings: {:?}", settings);

    let mut request = settings.to_request(&horizon);
    if let Some(tps) = args.reference_tps {
        request.reference_tps = tps;
    }

    if args.json {
        let chart = recompute(&request);
        let out = serde_json::to_string_pretty(&chart).context("Failed to serialise chart")?;
        println!("{}", out);
        return Ok(());
    }

    let projection = project_series(
        horizon.start_date,
        horizon.months,
        horizon.initial_gas_limit,
        settings.yoy.value(),
    );
    let last = projection.len().saturating_sub(1);

    let rows: Vec<Row> = projection
        .iter()
        .enumerate()
        .filter(|(m, _)| *m as u32 % args.every == 0 || *m == last)
        .map(|(m, p)| {
            let convert = |metric: Metric| {
                format_compact(metric.convert(
                    p.gas_limit,
                    request.gas_per_tx,
                    request.block_time_seconds,
                ))
            };
            Row {
                month: m as u32,
                date: format_date(p.date, "%Y-%m-%d"),
                glpb: convert(Metric::CapacityPerUnit),
                gps: convert(Metric::RatePerSecond),
                tps: convert(Metric::TransactionsPerSecond),
            }
        })
        .collect();

    println!(
        "YoY {} ({}x per year), gas/tx {}",
        settings.yoy,
        settings.yoy.multiplier(),
        settings.gas_per_tx
    );
    println!("{}", Table::new(rows).with(Style::rounded()));

    if args.reference {
        let in_metric = |metric: Metric| {
            format_compact(reference_value(
                request.gas_per_tx,
                metric,
                request.block_time_seconds,
                request.reference_tps,
            ))
        };
        println!(
            "{}: GLPB {}, GPS {}, TPS {}",
            reference_label(request.reference_name, request.reference_tps),
            in_metric(Metric::CapacityPerUnit),
            in_metric(Metric::RatePerSecond),
            in_metric(Metric::TransactionsPerSecond),
        );
    }

    Ok(())
}
