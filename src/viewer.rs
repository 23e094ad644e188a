//! A viewer for mapping genomic positions to pixel coordinates.

use nonempty::NonEmpty;
use rust_lapper as lapper;

use crate::region::AnnotatedRegion;
use crate::scale::Scale;

pub mod builder;

pub use builder::Builder;

/// The tolerance used when converting an inverted pixel coordinate back to a
/// discrete position.
///
/// Pixel coordinates that sit a hair's breadth left of a base boundary due to
/// floating point error are attributed to the base on the right.
const POSITION_EPSILON: f64 = 1e-6;

/// A viewer mapping between genomic positions and pixel coordinates over a
/// laid-out region list.
///
/// Generally, you will want to use a [`builder::Builder`] to construct one of
/// these.
///
/// Each base in a displayed region owns a half-open band of pixels; the
/// right edge of the display belongs to the final base so that every
/// coordinate within the drawing area resolves to a position.
#[derive(Debug)]
pub struct Viewer {
    /// The laid-out regions, in ascending genomic order.
    regions: NonEmpty<AnnotatedRegion>,
    /// An interval lookup from genomic position to the displayed region
    /// containing it.
    index: lapper::Lapper<usize, AnnotatedRegion>,
    /// The scale from offset-space positions to pixel coordinates.
    scale: Scale,
}

impl Viewer {
    /// Gets the laid-out regions.
    pub fn regions(&self) -> &NonEmpty<AnnotatedRegion> {
        &self.regions
    }

    /// Gets the scale.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Gets the displayed region containing a genomic position, if any.
    ///
    /// Positions falling within a compressed gap are not displayed and return
    /// [`None`].
    pub fn region_at(&self, position: usize) -> Option<&AnnotatedRegion> {
        self.index.find(position, position + 1).next().map(|e| &e.val)
    }

    /// Returns whether a genomic position falls within a displayed region.
    pub fn is_position_defined(&self, position: usize) -> bool {
        self.region_at(position).is_some()
    }

    /// Maps a genomic position to the pixel coordinate of the left edge of
    /// the band it owns.
    ///
    /// Returns [`None`] for positions that fall within a compressed gap.
    pub fn pixel_at(&self, position: usize) -> Option<f64> {
        let region = self.region_at(position)?;
        Some(self.scale.position((position - region.offset()) as f64))
    }

    /// Maps a pixel coordinate back to the genomic position owning it.
    ///
    /// Every coordinate within the drawing area resolves to a position; the
    /// right edge resolves to the final base. Coordinates outside of the
    /// drawing area return [`None`].
    pub fn position_at(&self, x: f64) -> Option<usize> {
        let offset_position = (self.scale.invert(x) + POSITION_EPSILON).floor();
        if offset_position < 0.0 {
            return None;
        }
        let offset_position = offset_position as usize;

        let last = self.regions.last();
        if offset_position == last.offset_stop() + 1 {
            let (_, end) = self.scale.range();
            if x <= end + POSITION_EPSILON {
                return Some(last.region().stop());
            }
        }

        self.regions
            .iter()
            .find(|region| {
                region.offset_start() <= offset_position
                    && offset_position <= region.offset_stop()
            })
            .map(|region| offset_position + region.offset())
    }
}
