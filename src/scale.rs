//! Linear scales between offset-space positions and pixel coordinates.

/// The minimum width, in units, of a scale's domain or range.
///
/// A degenerate (zero-width) domain or range would make the mapping
/// non-invertible.
const MIN_EXTENT: f64 = f64::EPSILON;

/// An error related to a [`Scale`].
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The domain was empty or inverted.
    EmptyDomain(f64, f64),

    /// The range was empty or inverted.
    EmptyRange(f64, f64),

    /// A bound was not a finite number.
    NonFiniteBound(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyDomain(start, end) => {
                write!(f, "empty domain: [{}, {}]", start, end)
            }
            Error::EmptyRange(start, end) => write!(f, "empty range: [{}, {}]", start, end),
            Error::NonFiniteBound(value) => write!(f, "non-finite bound: {}", value),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A linear mapping from a domain of offset-space positions onto a range of
/// pixel coordinates.
///
/// # Examples
///
/// ```
/// use regionviewer::scale::Scale;
///
/// let scale = Scale::try_new((100.0, 302.0), (0.0, 404.0))?;
///
/// assert_eq!(scale.position(100.0), 0.0);
/// assert_eq!(scale.position(201.0), 202.0);
/// assert_eq!(scale.invert(404.0), 302.0);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    /// The domain, in offset-space positions.
    domain: (f64, f64),
    /// The range, in pixels.
    range: (f64, f64),
}

impl Scale {
    /// Attempts to create a new [`Scale`].
    ///
    /// Both bounds of both intervals must be finite, and each interval must
    /// be non-empty and ascending.
    pub fn try_new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        for value in [domain.0, domain.1, range.0, range.1] {
            if !value.is_finite() {
                return Err(Error::NonFiniteBound(value));
            }
        }

        if domain.1 - domain.0 < MIN_EXTENT {
            return Err(Error::EmptyDomain(domain.0, domain.1));
        }

        if range.1 - range.0 < MIN_EXTENT {
            return Err(Error::EmptyRange(range.0, range.1));
        }

        Ok(Self { domain, range })
    }

    /// Gets the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Gets the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps an offset-space position onto the range.
    ///
    /// Positions outside of the domain extrapolate linearly; the scale does
    /// not clamp.
    pub fn position(&self, value: f64) -> f64 {
        let fraction = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + fraction * (self.range.1 - self.range.0)
    }

    /// Maps a coordinate in the range back onto the domain.
    ///
    /// This is the exact inverse of [`Self::position`] up to floating point
    /// error.
    pub fn invert(&self, value: f64) -> f64 {
        let fraction = (value - self.range.0) / (self.range.1 - self.range.0);
        self.domain.0 + fraction * (self.domain.1 - self.domain.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_it_maps_endpoints_and_midpoints()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let scale = Scale::try_new((0.0, 100.0), (0.0, 1000.0))?;

        assert_eq!(scale.position(0.0), 0.0);
        assert_eq!(scale.position(50.0), 500.0);
        assert_eq!(scale.position(100.0), 1000.0);

        Ok(())
    }

    #[test]
    fn test_it_supports_nonzero_starts() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let scale = Scale::try_new((100.0, 302.0), (0.0, 404.0))?;

        // Two pixels per base.
        assert_eq!(scale.position(100.0), 0.0);
        assert_eq!(scale.position(101.0), 2.0);
        assert_eq!(scale.position(302.0), 404.0);

        Ok(())
    }

    #[test]
    fn test_invert_reverses_position() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let scale = Scale::try_new((100.0, 302.0), (0.0, 404.0))?;

        for value in [100.0, 150.5, 301.0, 302.0] {
            let roundtrip = scale.invert(scale.position(value));
            assert!((roundtrip - value).abs() < 1e-9);
        }

        Ok(())
    }

    #[test]
    fn test_positions_outside_the_domain_extrapolate()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let scale = Scale::try_new((0.0, 100.0), (0.0, 200.0))?;

        assert_eq!(scale.position(-10.0), -20.0);
        assert_eq!(scale.position(110.0), 220.0);

        Ok(())
    }

    #[test]
    fn test_degenerate_intervals_are_rejected()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Scale::try_new((100.0, 100.0), (0.0, 404.0)).unwrap_err();
        assert_eq!(err, Error::EmptyDomain(100.0, 100.0));

        let err = Scale::try_new((0.0, 100.0), (404.0, 0.0)).unwrap_err();
        assert_eq!(err, Error::EmptyRange(404.0, 0.0));

        let err = Scale::try_new((0.0, f64::NAN), (0.0, 404.0)).unwrap_err();
        assert!(matches!(err, Error::NonFiniteBound(_)));

        Ok(())
    }
}
