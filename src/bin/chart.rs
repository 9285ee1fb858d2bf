//! Preflop chart export.
//!
//! Prints every preflop table as a 13x13 grid and optionally writes JSON and
//! HTML versions.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{error, info, LevelFilter};

use gto_trainer::strategy::{ChartBook, Position, TableFormat};

#[derive(Parser, Debug)]
#[command(name = "chart", about = "Print and export the preflop tables")]
struct Args {
    /// Write all charts as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Write all charts as an HTML page
    #[arg(long)]
    html: Option<PathBuf>,
    /// Skip the terminal grids
    #[arg(short, long)]
    quiet: bool,
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    gto_trainer::init_logging(args.log_level);

    let start = Instant::now();
    let book = ChartBook::all("GTO Trainer preflop tables");
    info!(
        "built {} charts in {:.2}ms",
        book.charts.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if !args.quiet {
        book.print_summary();

        println!("=== Opening frequencies ===");
        for format in TableFormat::ALL {
            for position in Position::ALL {
                if let Some(chart) = book.get(format, position) {
                    println!(
                        "{:<10} raise {:>5.1}% | call {:>5.1}%",
                        chart.display_name,
                        chart.total_raise_freq() * 100.0,
                        chart.total_call_freq() * 100.0
                    );
                }
            }
        }
    }

    let mut failed = false;
    if let Some(path) = &args.json {
        match book.save_json(path) {
            Ok(()) => info!("saved JSON: {}", path.display()),
            Err(e) => {
                error!("error saving JSON to {}: {}", path.display(), e);
                failed = true;
            }
        }
    }
    if let Some(path) = &args.html {
        match book.save_html(path) {
            Ok(()) => info!("saved HTML: {}", path.display()),
            Err(e) => {
                error!("error saving HTML to {}: {}", path.display(), e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
