//! CLI for assembling a scanner report into a global beacon map.
//!
//! Reads a scanner report file, places every scanner into one frame, and
//! prints the unique beacon count and the largest Manhattan separation
//! between scanners.
//!
//! # Usage
//!
//! ```bash
//! tara-map report.txt
//! tara-map --threshold 12 --json report.txt
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use tara_map::{
    parse_report, AssemblerConfig, GlobalMap, Point3, Result, ScanAssembler, OVERLAP_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "tara-map")]
#[command(about = "Reconstruct a global beacon map from scanner reports")]
struct Args {
    /// Scanner report file
    report: PathBuf,

    /// Minimum coincident beacons to accept a pairwise alignment
    #[arg(long, default_value_t = OVERLAP_THRESHOLD)]
    threshold: usize,

    /// Emit the assembled map summary as JSON
    #[arg(long)]
    json: bool,
}

/// JSON rendering of the assembled map.
#[derive(Serialize)]
struct MapSummary {
    unique_beacons: usize,
    max_scanner_distance: i64,
    scanners: Vec<ScannerSummary>,
}

#[derive(Serialize)]
struct ScannerSummary {
    id: usize,
    position: Point3,
}

impl MapSummary {
    fn from_map(map: &GlobalMap) -> Self {
        Self {
            unique_beacons: map.beacon_count(),
            max_scanner_distance: map.max_scanner_distance(),
            scanners: map
                .scanners()
                .iter()
                .map(|pose| ScannerSummary {
                    id: pose.id,
                    position: pose.position(),
                })
                .collect(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let text = std::fs::read_to_string(&args.report)?;
    let reports = parse_report(&text)?;
    log::info!(
        "parsed {} scanner reports from {}",
        reports.len(),
        args.report.display()
    );

    let assembler = ScanAssembler::new(AssemblerConfig {
        overlap_threshold: args.threshold,
    });
    let map = assembler.assemble(reports)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&MapSummary::from_map(&map))?);
    } else {
        println!("Unique beacons: {}", map.beacon_count());
        println!("Max scanner distance: {}", map.max_scanner_distance());
    }

    Ok(())
}
