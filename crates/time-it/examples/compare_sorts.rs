//! Time stable vs unstable sorting and print both reports plus a comparison
//!
//! Usage: cargo run -p time-it --example compare_sorts -- [config.toml]

use anyhow::Result;
use std::env;
use time_it::{Config, FormatOptions, ReportOptions, Reporter};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading config from: {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let runs = config.report.runs.unwrap_or(1_000);

    let data: Vec<u64> = (0..2_000u64).map(|i| (i * 7_919) % 2_003).collect();

    let stable = time_it::time_it_report_with(ReportOptions::new().name("sort").runs(runs), || {
        let mut v = data.clone();
        v.sort();
        std::hint::black_box(v);
    })?;

    let unstable = time_it::time_it_report_with(
        ReportOptions::new().name("sort_unstable").runs(runs),
        || {
            let mut v = data.clone();
            v.sort_unstable();
            std::hint::black_box(v);
        },
    )?;

    let reporter = Reporter::new(config.output).with_options(config.format.clone());
    reporter.report(&stable)?;
    reporter.report(&unstable)?;

    let comparison = stable.compare_to(&unstable);
    reporter.report(&comparison)?;
    Reporter::new(config.output)
        .with_options(FormatOptions {
            percent: true,
            ..config.format
        })
        .report(&comparison)?;

    Ok(())
}
