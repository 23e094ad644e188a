//! Genomic regions and the feature types they carry.
//!
//! A [`Region`] is a closed interval of genomic positions: a region with
//! `start == 100` and `stop == 150` occupies all fifty-one bases from 100
//! through 150. Regions within one transcript are expected to be pairwise
//! disjoint and located on a single strand; the layout pipeline in
//! [`crate::pipeline`] enforces both.

use crate::strand::Strand;

pub mod annotated;
pub mod feature;

pub use annotated::AnnotatedRegion;
pub use feature::FeatureType;

/// An error related to a region.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The start position is greater than the stop position.
    StartGreaterThanStop(usize, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::StartGreaterThanStop(start, stop) => write!(
                f,
                "start position ({}) is greater than stop position ({})",
                start, stop
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A closed genomic interval carrying a feature type and a strand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region {
    /// The feature type.
    feature_type: FeatureType,
    /// The first genomic position covered by the region.
    start: usize,
    /// The last genomic position covered by the region.
    stop: usize,
    /// The strand upon which the region is located.
    strand: Strand,
}

impl Region {
    /// Attempts to create a new [`Region`].
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::Region;
    /// use regionviewer::Strand;
    ///
    /// let region = Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?;
    /// assert_eq!(region.size(), 51);
    ///
    /// let err = Region::try_new(FeatureType::Cds, 150, 100, Strand::Positive).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "start position (150) is greater than stop position (100)"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(
        feature_type: FeatureType,
        start: usize,
        stop: usize,
        strand: Strand,
    ) -> Result<Region, Error> {
        if start > stop {
            return Err(Error::StartGreaterThanStop(start, stop));
        }

        Ok(Region {
            feature_type,
            start,
            stop,
            strand,
        })
    }

    /// Gets the feature type of the region.
    pub fn feature_type(&self) -> &FeatureType {
        &self.feature_type
    }

    /// Gets the first genomic position covered by the region.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the last genomic position covered by the region.
    pub fn stop(&self) -> usize {
        self.stop
    }

    /// Gets the strand upon which the region is located.
    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    /// Gets the number of genomic positions covered by the region.
    ///
    /// Because regions are closed intervals, a region whose start equals its
    /// stop still covers one base.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::Region;
    /// use regionviewer::Strand;
    ///
    /// let region = Region::try_new(FeatureType::Exon, 5, 5, Strand::Positive)?;
    /// assert_eq!(region.size(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn size(&self) -> usize {
        self.stop - self.start + 1
    }

    /// Indicates whether a genomic position falls within the region.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::Region;
    /// use regionviewer::Strand;
    ///
    /// let region = Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?;
    ///
    /// assert!(region.contains(100));
    /// assert!(region.contains(150));
    ///
    /// assert!(!region.contains(99));
    /// assert!(!region.contains(151));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.stop
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.feature_type, self.start, self.stop, self.strand
        )
    }
}
