//! Selecting the subset of regions relevant to the current display.

use std::collections::HashSet;
use std::ops::Range;

use crate::region::FeatureType;
use crate::region::Region;

/// Keeps the regions whose feature type is in the allowed set (when one is
/// configured), then optionally slices the result to an index subrange.
///
/// Order is preserved. A subrange extending past the end of the list is
/// clamped rather than rejected, and an empty result is valid.
pub(crate) fn apply(
    regions: Vec<Region>,
    feature_types: Option<&HashSet<FeatureType>>,
    subset: Option<Range<usize>>,
) -> Vec<Region> {
    let mut regions = match feature_types {
        Some(set) => regions
            .into_iter()
            .filter(|region| set.contains(region.feature_type()))
            .collect(),
        None => regions,
    };

    if let Some(range) = subset {
        let end = range.end.min(regions.len());
        let start = range.start.min(end);

        let mut subset = regions.split_off(start);
        subset.truncate(end - start);
        regions = subset;
    }

    regions
}
