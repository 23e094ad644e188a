//! Annotating regions with the genomic distance to their predecessor.

use crate::pipeline::Error;
use crate::region::Region;

/// A region annotated with the genomic distance to its predecessor in the
/// list.
///
/// The distance is `start - previous.stop`: adjacent touching regions have a
/// distance of one, and the first region's distance is zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SpacedRegion {
    /// The underlying region.
    pub(crate) region: Region,
    /// The genomic distance to the previous region.
    pub(crate) previous_region_distance: usize,
}

/// Computes the distance from each region to its predecessor.
///
/// The list is expected to be in ascending genomic order with pairwise
/// disjoint regions (the orientation stage guarantees the former for valid
/// input); a region starting at or before its predecessor's stop contradicts
/// that contract and fails rather than silently wrapping the unsigned
/// subtraction.
pub(crate) fn annotate(regions: Vec<Region>) -> Result<Vec<SpacedRegion>, Error> {
    let mut spaced = Vec::with_capacity(regions.len());
    let mut previous_stop: Option<usize> = None;

    for region in regions {
        let previous_region_distance = match previous_stop {
            Some(stop) if region.start() <= stop => {
                return Err(Error::RegionsOutOfOrder {
                    previous_stop: stop,
                    start: region.start(),
                });
            }
            Some(stop) => region.start() - stop,
            None => 0,
        };

        previous_stop = Some(region.stop());
        spaced.push(SpacedRegion {
            region,
            previous_region_distance,
        });
    }

    Ok(spaced)
}
