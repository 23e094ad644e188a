use std::env;

use regionviewer as rv;
use regionviewer::pipeline;
use regionviewer::region::FeatureType;
use regionviewer::viewer;

/// A two-exon transcript with a large intervening gap.
const SAMPLE: &[u8] = b"CDS\t100\t150\t+\nCDS\t5200\t5250\t+";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = env::args()
        .nth(1)
        .map(|s| s.parse::<f64>())
        .transpose()?
        .unwrap_or(1000.0);

    let regions = rv::Reader::new(SAMPLE)
        .regions()
        .collect::<std::io::Result<Vec<_>>>()?;

    let styles = rv::style::StyleTable::new(rv::style::Style::new("#bdbdbd", "1px"))
        .insert(FeatureType::Cds, rv::style::Style::new("#424242", "30px"));

    let annotated = pipeline::Builder::new(styles)
        .padding(50)
        .try_build_from(regions)?;
    let viewer = viewer::Builder::default().try_build_from(annotated, width)?;

    let (domain_start, domain_end) = viewer.scale().domain();
    println!(
        "domain: [{}, {}], range: [0, {}]",
        domain_start, domain_end, width
    );

    for position in [100, 150, 151, 3000, 5200, 5250] {
        match viewer.pixel_at(position) {
            Some(x) => println!("position {:>5} -> pixel {:>8.2}", position, x),
            None => println!("position {:>5} -> not displayed", position),
        }
    }

    // Walk the drawing area in ten even steps, reading back the genomic
    // position under each coordinate.
    for step in 0..=10 {
        let x = width * f64::from(step) / 10.0;
        match viewer.position_at(x) {
            Some(position) => println!("pixel {:>8.2} -> position {}", x, position),
            None => println!("pixel {:>8.2} -> outside the drawing area", x),
        }
    }

    Ok(())
}
