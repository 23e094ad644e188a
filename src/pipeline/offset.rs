//! Assigning cumulative compression offsets.

use crate::pipeline::spacing::SpacedRegion;
use crate::region::Region;

/// A region annotated with its cumulative compression offset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct OffsetRegion {
    /// The underlying region.
    pub(crate) region: Region,
    /// The genomic distance to the previous region.
    pub(crate) previous_region_distance: usize,
    /// The cumulative genomic distance removed before this region.
    pub(crate) offset: usize,
}

/// Walks the padded region list in order, assigning each region the
/// cumulative genomic distance removed by compression before it.
///
/// A distance of one means the regions touch and no bases were removed
/// between them; every base beyond that was dropped from the display, so the
/// offset grows by `distance - 1`. Offsets are therefore monotonically
/// non-decreasing, and offset-space is gapless: each region starts exactly
/// one offset-space position after its predecessor ends.
pub(crate) fn assign(regions: Vec<SpacedRegion>) -> Vec<OffsetRegion> {
    let mut out = Vec::with_capacity(regions.len());
    let mut offset = 0;

    for (i, spaced) in regions.into_iter().enumerate() {
        if i > 0 {
            offset += spaced.previous_region_distance - 1;
        }

        out.push(OffsetRegion {
            region: spaced.region,
            previous_region_distance: spaced.previous_region_distance,
            offset,
        });
    }

    out
}
