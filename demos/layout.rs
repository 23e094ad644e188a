use std::env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use flate2::read::GzDecoder;
use regionviewer as rv;
use regionviewer::pipeline;
use regionviewer::region::FeatureType;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

/// A two-exon transcript with a large intervening gap, used when no input
/// file is provided.
const SAMPLE: &[u8] = b"CDS\t100\t150\t+\nCDS\t5200\t5250\t+";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let padding = env::args()
        .nth(2)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(50);

    let regions = match env::args().nth(1) {
        Some(src) => {
            let file = File::open(&src)?;
            let inner: Box<dyn BufRead> = if Path::new(&src)
                .extension()
                .is_some_and(|ext| ext == "gz")
            {
                Box::new(BufReader::new(GzDecoder::new(file)))
            } else {
                Box::new(BufReader::new(file))
            };

            rv::Reader::new(inner)
                .regions()
                .collect::<std::io::Result<Vec<_>>>()?
        }
        None => rv::Reader::new(SAMPLE)
            .regions()
            .collect::<std::io::Result<Vec<_>>>()?,
    };

    let styles = rv::style::StyleTable::new(rv::style::Style::new("#bdbdbd", "1px"))
        .insert(FeatureType::Cds, rv::style::Style::new("#424242", "30px"));

    let annotated = pipeline::Builder::new(styles)
        .padding(padding)
        .try_build_from(regions)?;

    let mut builder = Builder::default();
    builder.push_record(["Type", "Start", "Stop", "Distance", "Offset", "Color"]);

    for region in &annotated {
        builder.push_record([
            &region.region().feature_type().to_string(),
            &region.region().start().to_string(),
            &region.region().stop().to_string(),
            &region.previous_region_distance().to_string(),
            &region.offset().to_string(),
            region.style().color(),
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    Ok(())
}
