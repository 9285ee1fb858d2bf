//! Strategy survey.
//!
//! Deals random spots in parallel, checks every recommended distribution and
//! prints mean action frequencies per street and position.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};

use gto_trainer::survey::{self, SurveyConfig};

#[derive(Parser, Debug)]
#[command(name = "survey", about = "Survey the strategy functions over random deals")]
struct Args {
    /// Number of random deals
    #[arg(long, default_value_t = 100_000)]
    deals: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker threads (default: all cores)
    #[arg(long)]
    threads: Option<usize>,
    /// Write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    gto_trainer::init_logging(args.log_level);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every distribution passed its checks.
fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    let config = SurveyConfig {
        deals: args.deals,
        seed: args.seed,
        threads: args.threads,
    };

    let bar = ProgressBar::new(config.deals as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )?
        .progress_chars("#>-"),
    );

    let start = Instant::now();
    let report = survey::run(&config, Some(&bar))?;
    bar.finish_and_clear();
    info!(
        "surveyed {} deals in {:.2}s",
        report.deals,
        start.elapsed().as_secs_f64()
    );

    report.print_summary();

    if let Some(path) = &args.json {
        report.save_json(path)?;
        info!("saved JSON: {}", path.display());
    }

    if report.violations > 0 {
        error!("{} distributions failed validation", report.violations);
    }
    Ok(report.violations == 0)
}
