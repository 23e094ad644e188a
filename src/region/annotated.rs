//! Regions annotated with spacing, offsets, and display styles.

use crate::region::Region;
use crate::style::Style;

/// A region annotated by the layout pipeline.
///
/// The `offset` of an annotated region is the cumulative genomic distance
/// removed by compression before the region: subtracting it from any genomic
/// position inside the region yields the position in offset-space, the
/// compressed coordinate system that is mapped linearly to pixels. Offsets are
/// only meaningful relative to the annotated region list they were computed
/// against.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnnotatedRegion {
    /// The underlying region.
    region: Region,
    /// The genomic distance from the previous region in the list (zero for
    /// the first region).
    previous_region_distance: usize,
    /// The cumulative genomic distance removed by compression before this
    /// region.
    offset: usize,
    /// The display style attached to the region.
    style: Style,
}

impl AnnotatedRegion {
    /// Creates a new [`AnnotatedRegion`].
    pub(crate) fn new(
        region: Region,
        previous_region_distance: usize,
        offset: usize,
        style: Style,
    ) -> Self {
        Self {
            region,
            previous_region_distance,
            offset,
            style,
        }
    }

    /// Gets the underlying region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Gets the genomic distance from the previous region in the list.
    pub fn previous_region_distance(&self) -> usize {
        self.previous_region_distance
    }

    /// Gets the cumulative genomic distance removed by compression before
    /// this region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Gets the display style attached to the region.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Gets the offset-space position of the region's first base.
    pub fn offset_start(&self) -> usize {
        self.region.start() - self.offset
    }

    /// Gets the offset-space position of the region's last base.
    pub fn offset_stop(&self) -> usize {
        self.region.stop() - self.offset
    }
}

impl std::fmt::Display for AnnotatedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ offset {}", self.region, self.offset)
    }
}
