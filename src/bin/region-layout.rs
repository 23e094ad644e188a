//! A binary to lay out a region list and interrogate the resulting
//! coordinate mapping.
//!
//! ```shell
//! cargo run --bin=region-layout --features=binaries regions.tsv
//! ```
//!
//! The input is tab-delimited text with one region per line (feature type,
//! start, stop, strand); gzipped input is detected by a `.gz` extension. The
//! laid-out regions are printed as a table, and any genomic positions or
//! pixel coordinates passed on the command line are mapped through the
//! viewer.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use regionviewer::pipeline;
use regionviewer::region::FeatureType;
use regionviewer::style::Style;
use regionviewer::style::StyleTable;
use regionviewer::viewer;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Lay out a region list and map positions to pixels (and back).
#[derive(Parser)]
struct Args {
    /// The region list to lay out.
    src: PathBuf,

    /// The number of bases of padding to display around each region.
    #[arg(short, long, default_value_t = 75)]
    padding: usize,

    /// The display width, in pixels.
    #[arg(short, long, default_value_t = 1000.0)]
    width: f64,

    /// Whether to keep only coding regions.
    #[arg(short, long, default_value_t = false)]
    coding_only: bool,

    /// Genomic positions to map to pixel coordinates.
    #[arg(long = "position")]
    positions: Vec<usize>,

    /// Pixel coordinates to map back to genomic positions.
    #[arg(long = "pixel")]
    pixels: Vec<f64>,

    #[command(flatten)]
    verbose: Verbosity,
}

/// The default display attributes for each feature type.
fn styles() -> StyleTable {
    StyleTable::new(Style::new("#bdbdbd", "1px"))
        .insert(FeatureType::Cds, Style::new("#424242", "30px"))
        .insert(FeatureType::Utr, Style::new("#424242", "15px"))
        .insert(FeatureType::Exon, Style::new("#424242", "15px"))
}

fn throw(args: &Args) -> Result<()> {
    let file = File::open(&args.src)
        .with_context(|| format!("opening {}", args.src.display()))?;

    let inner: Box<dyn BufRead> = if args.src.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut reader = regionviewer::Reader::new(inner);
    let regions = reader
        .regions()
        .collect::<std::io::Result<Vec<_>>>()
        .context("reading regions")?;

    info!("read {} regions", regions.len());

    let mut builder = pipeline::Builder::new(styles()).padding(args.padding);
    if args.coding_only {
        builder = builder.feature_types([FeatureType::Cds]);
    }

    let annotated = builder.try_build_from(regions).context("laying out regions")?;
    info!("laid out {} regions", annotated.len());

    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>10}",
        "Type", "Start", "Stop", "Offset", "Color"
    );

    for region in &annotated {
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>10}",
            region.region().feature_type().to_string(),
            region.region().start(),
            region.region().stop(),
            region.offset(),
            region.style().color(),
        );
    }

    if args.positions.is_empty() && args.pixels.is_empty() {
        return Ok(());
    }

    let viewer = viewer::Builder::default()
        .try_build_from(annotated, args.width)
        .context("building the viewer")?;

    for position in &args.positions {
        match viewer.pixel_at(*position) {
            Some(x) => println!("position {} -> pixel {:.2}", position, x),
            None => println!("position {} -> not displayed", position),
        }
    }

    for pixel in &args.pixels {
        match viewer.position_at(*pixel) {
            Some(position) => println!("pixel {:.2} -> position {}", pixel, position),
            None => println!("pixel {:.2} -> outside the drawing area", pixel),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    throw(&args)
}
