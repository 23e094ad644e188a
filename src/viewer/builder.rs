//! A builder for a [`Viewer`].

use nonempty::NonEmpty;
use rust_lapper as lapper;

use crate::region::AnnotatedRegion;
use crate::scale;
use crate::scale::Scale;
use crate::viewer::Viewer;

/// The inner value of the position lookup data structure.
type Iv = lapper::Interval<usize, AnnotatedRegion>;

/// An error related to building a [`Viewer`].
#[derive(Debug)]
pub enum Error {
    /// The laid-out region list was empty.
    EmptyRegions,

    /// The display width was not a positive, finite number of pixels.
    InvalidWidth(f64),

    /// An error constructing the scale.
    Scale(scale::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyRegions => write!(f, "empty region list"),
            Error::InvalidWidth(width) => write!(f, "invalid display width: {}", width),
            Error::Scale(err) => write!(f, "scale error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Viewer`].
#[allow(missing_debug_implementations)]
pub struct Builder;

impl Builder {
    /// Builds a [`Viewer`] from a laid-out region list and a display width in
    /// pixels.
    ///
    /// The regions are expected to come from the layout pipeline: in
    /// ascending genomic order with offsets assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::Region;
    /// use regionviewer::Strand;
    /// use regionviewer::pipeline;
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::style::Style;
    /// use regionviewer::style::StyleTable;
    /// use regionviewer::viewer;
    ///
    /// let regions = vec![
    ///     Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
    ///     Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Positive)?,
    /// ];
    ///
    /// let annotated = pipeline::Builder::new(StyleTable::new(Style::new("#grey", "1px")))
    ///     .padding(50)
    ///     .try_build_from(regions)?;
    ///
    /// let viewer = viewer::Builder::default().try_build_from(annotated, 1000.0)?;
    ///
    /// assert_eq!(viewer.scale().range(), (0.0, 1000.0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from(&self, regions: Vec<AnnotatedRegion>, width: f64) -> Result<Viewer> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidWidth(width));
        }

        let regions = NonEmpty::from_vec(regions).ok_or(Error::EmptyRegions)?;

        // The domain covers offset-space from the first displayed base
        // through one past the last, so the final base owns a full pixel
        // band.
        let domain = (
            regions.first().offset_start() as f64,
            (regions.last().offset_stop() + 1) as f64,
        );
        let scale = Scale::try_new(domain, (0.0, width)).map_err(Error::Scale)?;

        let intervals = regions
            .iter()
            .map(|region| Iv {
                start: region.region().start(),
                stop: region.region().stop() + 1,
                val: region.clone(),
            })
            .collect::<Vec<_>>();
        let index = lapper::Lapper::new(intervals);

        Ok(Viewer {
            regions,
            index,
            scale,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self
    }
}
