//! The region layout pipeline.
//!
//! The pipeline turns a raw region list into an ordered list of
//! [`AnnotatedRegion`]s by running a fixed sequence of pure stages:
//!
//! 1. **filter** — keep only the regions relevant to the current display
//!    (by feature type and, optionally, an index subset).
//! 2. **orientation** — verify the list sits on a single strand and reverse
//!    minus-strand lists into ascending genomic order.
//! 3. **spacing** — compute the genomic distance from each region to its
//!    predecessor.
//! 4. **padding** — interleave bounded `start_pad` / `end_pad` regions
//!    around large gaps and true-scale `intron` regions across small ones.
//! 5. **offset** — assign each region the cumulative genomic distance
//!    removed by compression before it.
//! 6. **style** — attach display attributes from the caller's
//!    [`StyleTable`].
//!
//! The output list is immutable; it is recomputed from scratch whenever the
//! input regions, the padding size, or any filter changes.
//!
//! # Examples
//!
//! ```
//! use regionviewer::Region;
//! use regionviewer::Strand;
//! use regionviewer::pipeline;
//! use regionviewer::region::FeatureType;
//! use regionviewer::style::Style;
//! use regionviewer::style::StyleTable;
//!
//! let regions = vec![
//!     Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
//!     Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Positive)?,
//! ];
//!
//! let styles = StyleTable::new(Style::new("#grey", "1px"));
//! let annotated = pipeline::Builder::new(styles)
//!     .padding(50)
//!     .try_build_from(regions)?;
//!
//! // The 5050-base gap is compressed down to two 50-base pads.
//! assert_eq!(annotated.len(), 5);
//! assert_eq!(annotated[2].region().feature_type(), &FeatureType::StartPad);
//! assert_eq!(annotated[3].offset(), 4949);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod filter;
mod offset;
mod orientation;
mod padding;
mod spacing;

use std::collections::HashSet;
use std::ops::Range;

use crate::region::AnnotatedRegion;
use crate::region::FeatureType;
use crate::region::Region;
use crate::style::StyleTable;

/// An error related to running the layout pipeline.
///
/// Every variant is an input-contract violation: malformed upstream data
/// rather than a user-recoverable condition.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The region list contains regions on both strands.
    MixedStrand,

    /// A region starts at or before its predecessor's stop, contradicting
    /// the disjointness contract.
    RegionsOutOfOrder {
        /// The stop position of the preceding region.
        previous_stop: usize,
        /// The start position of the offending region.
        start: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MixedStrand => write!(f, "regions are located on both strands"),
            Error::RegionsOutOfOrder {
                previous_stop,
                start,
            } => write!(
                f,
                "region starting at {} does not follow the previous region ending at {}",
                start, previous_stop
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for running the layout pipeline.
#[derive(Clone, Debug)]
pub struct Builder {
    /// The number of bases of padding to display around each real region.
    padding: usize,
    /// The feature types to keep, or [`None`] to keep every region.
    feature_types: Option<HashSet<FeatureType>>,
    /// An optional index subset applied after filtering.
    subset: Option<Range<usize>>,
    /// The style table consulted for display attributes.
    styles: StyleTable,
}

impl Builder {
    /// Creates a builder with the provided style table.
    ///
    /// Padding defaults to zero (gaps are compressed away entirely and no
    /// synthetic regions are inserted), and no feature type filter or index
    /// subset is applied.
    pub fn new(styles: StyleTable) -> Self {
        Self {
            padding: 0,
            feature_types: None,
            subset: None,
            styles,
        }
    }

    /// Consumes self to set the number of bases of padding displayed around
    /// each real region.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Consumes self to restrict the pipeline to regions with the provided
    /// feature types.
    pub fn feature_types(mut self, feature_types: impl IntoIterator<Item = FeatureType>) -> Self {
        self.feature_types = Some(feature_types.into_iter().collect());
        self
    }

    /// Consumes self to restrict the pipeline to an index subset of the
    /// filtered region list.
    pub fn subset(mut self, subset: Range<usize>) -> Self {
        self.subset = Some(subset);
        self
    }

    /// Runs the pipeline over a region list.
    ///
    /// An empty result (for example, a feature type filter that excludes
    /// every region) is valid and produces `Ok` with an empty list; only
    /// contract violations fail.
    pub fn try_build_from(&self, regions: Vec<Region>) -> Result<Vec<AnnotatedRegion>> {
        let regions = filter::apply(regions, self.feature_types.as_ref(), self.subset.clone());
        let regions = orientation::normalize(regions)?;
        let spaced = spacing::annotate(regions)?;
        let padded = padding::insert(spaced, self.padding);

        Ok(offset::assign(padded)
            .into_iter()
            .map(|region| {
                let style = self.styles.get(region.region.feature_type()).clone();
                AnnotatedRegion::new(
                    region.region,
                    region.previous_region_distance,
                    region.offset,
                    style,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strand::Strand;
    use crate::style::Style;

    /// A style table distinguishing coding regions from everything else.
    fn styles() -> StyleTable {
        StyleTable::new(Style::new("#grey", "1px"))
            .insert(FeatureType::Cds, Style::new("#424242", "30px"))
    }

    #[test]
    fn test_a_large_gap_is_compressed_to_two_pads()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Positive)?,
        ];

        let annotated = Builder::new(styles()).padding(50).try_build_from(regions)?;

        let summary = annotated
            .iter()
            .map(|region| {
                (
                    region.region().feature_type().clone(),
                    region.region().start(),
                    region.region().stop(),
                    region.offset(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(
            summary,
            vec![
                (FeatureType::Cds, 100, 150, 0),
                (FeatureType::EndPad, 151, 200, 0),
                (FeatureType::StartPad, 5150, 5199, 4949),
                (FeatureType::Cds, 5200, 5250, 4949),
                (FeatureType::EndPad, 5251, 5300, 4949),
            ]
        );

        // Offset-space distance between the two real regions is exactly
        // twice the padding.
        let first = &annotated[0];
        let second = &annotated[3];
        assert_eq!(
            second.offset_start() - first.offset_stop() - 1,
            2 * 50
        );

        // Styles come from the table, with the default for synthetic
        // regions.
        assert_eq!(annotated[0].style().color(), "#424242");
        assert_eq!(annotated[1].style().color(), "#grey");

        Ok(())
    }

    #[test]
    fn test_a_small_gap_is_preserved_at_true_scale()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 180, 200, Strand::Positive)?,
        ];

        let annotated = Builder::new(styles()).padding(50).try_build_from(regions)?;

        assert_eq!(annotated.len(), 4);
        assert_eq!(annotated[1].region().feature_type(), &FeatureType::Intron);
        assert_eq!(annotated[1].region().start(), 151);
        assert_eq!(annotated[1].region().stop(), 179);

        // Nothing was removed, so every offset is zero and the gap renders
        // at its true 29-base width.
        assert!(annotated.iter().all(|region| region.offset() == 0));
        assert_eq!(annotated[2].offset_start() - annotated[0].offset_stop() - 1, 29);

        Ok(())
    }

    #[test]
    fn test_a_minus_strand_gene_lays_out_left_to_right()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        // Transcript order for a minus-strand gene: descending genomic
        // position.
        let regions = vec![
            Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Negative)?,
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Negative)?,
        ];

        let annotated = Builder::new(styles()).padding(50).try_build_from(regions)?;

        // Same layout as the positive-strand case: ascending genomic order,
        // non-decreasing offsets.
        assert_eq!(annotated[0].region().start(), 100);
        assert_eq!(annotated[3].region().start(), 5200);
        for window in annotated.windows(2) {
            assert!(window[1].offset() >= window[0].offset());
        }

        Ok(())
    }

    #[test]
    fn test_mixed_strands_are_always_rejected()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Negative)?,
        ];

        let err = Builder::new(styles())
            .padding(50)
            .try_build_from(regions)
            .unwrap_err();
        assert_eq!(err, Error::MixedStrand);

        Ok(())
    }

    #[test]
    fn test_filtering_out_every_region_is_not_an_error()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        // A non-coding gene under a coding-only filter.
        let regions = vec![
            Region::try_new(FeatureType::Exon, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Exon, 5200, 5250, Strand::Positive)?,
        ];

        let annotated = Builder::new(styles())
            .padding(50)
            .feature_types([FeatureType::Cds])
            .try_build_from(regions)?;

        assert!(annotated.is_empty());

        Ok(())
    }

    #[test]
    fn test_a_subset_selects_a_window_of_exons()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let regions = vec![
            Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 300, 350, Strand::Positive)?,
            Region::try_new(FeatureType::Cds, 500, 550, Strand::Positive)?,
        ];

        let annotated = Builder::new(styles())
            .padding(10)
            .subset(1..3)
            .try_build_from(regions)?;

        assert_eq!(annotated[0].region().start(), 300);

        Ok(())
    }
}
