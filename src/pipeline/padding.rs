//! Inserting bounded padding and intron regions between real regions.

use crate::pipeline::spacing::SpacedRegion;
use crate::region::FeatureType;
use crate::region::Region;
use crate::strand::Strand;

/// Interleaves the real regions with synthetic `start_pad` / `end_pad` /
/// `intron` regions, in position order.
///
/// The padding parameter bounds how many genomic bases of gap are displayed
/// around each real region. Because intervals are closed, a gap at distance
/// `d` holds `d - 1` bases: when those can host two full pads
/// (`d > 2 * padding`), the gap is compressed to exactly `2 * padding`
/// displayed bases; otherwise the gap is displayed at true scale as a single
/// `intron`. The first region is the left edge of the display and gets no
/// leading pad.
///
/// The trailing `end_pad` for each region is deferred until the gap to the
/// next region is known, so nothing ever has to be retracted from the output.
pub(crate) fn insert(regions: Vec<SpacedRegion>, padding: usize) -> Vec<SpacedRegion> {
    if padding == 0 || regions.is_empty() {
        return regions;
    }

    let mut out: Vec<SpacedRegion> = Vec::with_capacity(regions.len() * 3);

    for (i, spaced) in regions.into_iter().enumerate() {
        if i == 0 {
            out.push(spaced);
            continue;
        }

        let distance = spaced.previous_region_distance;

        // SAFETY: `out` is non-empty past the first iteration.
        let previous = out.last().unwrap();
        let previous_stop = previous.region.stop();
        let strand = previous.region.strand().clone();

        if distance > 2 * padding {
            out.push(pad(
                FeatureType::EndPad,
                previous_stop + 1,
                previous_stop + padding,
                strand.clone(),
                1,
            ));
            out.push(pad(
                FeatureType::StartPad,
                spaced.region.start() - padding,
                spaced.region.start() - 1,
                strand,
                distance - 2 * padding,
            ));
            out.push(SpacedRegion {
                previous_region_distance: 1,
                region: spaced.region,
            });
        } else if distance > 1 {
            out.push(pad(
                FeatureType::Intron,
                previous_stop + 1,
                spaced.region.start() - 1,
                strand,
                1,
            ));
            out.push(SpacedRegion {
                previous_region_distance: 1,
                region: spaced.region,
            });
        } else {
            // The regions touch; there is no gap to represent.
            out.push(spaced);
        }
    }

    // The final region's trailing pad was deferred past the end of the list.
    // SAFETY: the list was checked to be non-empty above.
    let last = out.last().unwrap();
    let last_stop = last.region.stop();
    let strand = last.region.strand().clone();
    out.push(pad(
        FeatureType::EndPad,
        last_stop + 1,
        last_stop + padding,
        strand,
        1,
    ));

    out
}

/// Builds a synthetic region.
fn pad(
    feature_type: FeatureType,
    start: usize,
    stop: usize,
    strand: Strand,
    previous_region_distance: usize,
) -> SpacedRegion {
    // SAFETY: callers only construct pads with `start <= stop`.
    let region = Region::try_new(feature_type, start, stop, strand).unwrap();

    SpacedRegion {
        region,
        previous_region_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::spacing;

    /// Runs the spacing stage over positive-stranded CDS regions and then
    /// inserts padding.
    fn padded(bounds: &[(usize, usize)], padding: usize) -> Vec<SpacedRegion> {
        let regions = bounds
            .iter()
            .map(|(start, stop)| {
                Region::try_new(FeatureType::Cds, *start, *stop, Strand::Positive).unwrap()
            })
            .collect::<Vec<_>>();

        insert(spacing::annotate(regions).unwrap(), padding)
    }

    /// Summarizes a region as `(feature type, start, stop)` for assertions.
    fn summarize(regions: &[SpacedRegion]) -> Vec<(FeatureType, usize, usize)> {
        regions
            .iter()
            .map(|spaced| {
                (
                    spaced.region.feature_type().clone(),
                    spaced.region.start(),
                    spaced.region.stop(),
                )
            })
            .collect()
    }

    #[test]
    fn test_a_large_gap_is_bounded_by_two_pads() -> Result<(), Box<dyn std::error::Error>> {
        let result = padded(&[(100, 150), (5200, 5250)], 50);

        assert_eq!(
            summarize(&result),
            vec![
                (FeatureType::Cds, 100, 150),
                (FeatureType::EndPad, 151, 200),
                (FeatureType::StartPad, 5150, 5199),
                (FeatureType::Cds, 5200, 5250),
                (FeatureType::EndPad, 5251, 5300),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_a_small_gap_becomes_a_true_scale_intron() -> Result<(), Box<dyn std::error::Error>> {
        let result = padded(&[(100, 150), (180, 200)], 50);

        assert_eq!(
            summarize(&result),
            vec![
                (FeatureType::Cds, 100, 150),
                (FeatureType::Intron, 151, 179),
                (FeatureType::Cds, 180, 200),
                (FeatureType::EndPad, 201, 250),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_a_gap_of_exactly_twice_the_padding_stays_true_scale()
    -> Result<(), Box<dyn std::error::Error>> {
        // Distance 100 leaves 99 gap bases, which cannot host two 50-base
        // pads without overlapping; the gap is shown at true scale instead.
        let result = padded(&[(100, 150), (250, 300)], 50);

        assert_eq!(
            summarize(&result),
            vec![
                (FeatureType::Cds, 100, 150),
                (FeatureType::Intron, 151, 249),
                (FeatureType::Cds, 250, 300),
                (FeatureType::EndPad, 301, 350),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_touching_regions_get_no_synthetic_region()
    -> Result<(), Box<dyn std::error::Error>> {
        let result = padded(&[(100, 150), (151, 200)], 50);

        assert_eq!(
            summarize(&result),
            vec![
                (FeatureType::Cds, 100, 150),
                (FeatureType::Cds, 151, 200),
                (FeatureType::EndPad, 201, 250),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_zero_padding_is_the_identity() -> Result<(), Box<dyn std::error::Error>> {
        let result = padded(&[(100, 150), (5200, 5250)], 0);

        assert_eq!(
            summarize(&result),
            vec![(FeatureType::Cds, 100, 150), (FeatureType::Cds, 5200, 5250)]
        );

        Ok(())
    }

    #[test]
    fn test_emitted_regions_are_disjoint_and_ordered() -> Result<(), Box<dyn std::error::Error>> {
        let result = padded(&[(100, 200), (215, 300), (1000, 1100)], 10);

        for window in result.windows(2) {
            assert!(window[0].region.stop() < window[1].region.start());
            assert_eq!(
                window[1].previous_region_distance,
                window[1].region.start() - window[0].region.stop()
            );
        }

        Ok(())
    }
}
