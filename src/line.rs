//! A line within a region list file.
//!
//! A region list file is a tab-separated file with one region per line:
//!
//! ```text
//! # any comment
//! CDS	100	150	+
//! CDS	5200	5250	+
//! ```
//!
//! The four fields are the feature type, the first and last genomic positions
//! covered by the region (a closed interval), and the strand.

use std::str::FromStr;

use crate::region;
use crate::region::FeatureType;
use crate::region::Region;
use crate::strand;
use crate::strand::Strand;

/// The prefix marking a comment line.
const COMMENT_PREFIX: char = '#';

/// The number of fields in a region line.
const FIELD_COUNT: usize = 4;

/// An error associated with parsing a region list line.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid number of fields.
    InvalidFieldCount(usize, String),
    /// An invalid position.
    InvalidPosition(String, String),
    /// An invalid strand.
    InvalidStrand(strand::ParseStrandError, String),
    /// An invalid region.
    InvalidRegion(region::Error, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFieldCount(count, line) => write!(
                f,
                "invalid number of fields: expected {} fields, found {} fields\n\nline: {}",
                FIELD_COUNT, count, line
            ),
            ParseError::InvalidPosition(value, line) => {
                write!(f, "invalid position: {}\n\nline: {}", value, line)
            }
            ParseError::InvalidStrand(err, line) => {
                write!(f, "invalid strand: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidRegion(err, line) => {
                write!(f, "invalid region: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within a region list file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,
    /// A comment line.
    Comment(String),
    /// A region line.
    Region(Region),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Comment(comment) => write!(f, "{}", comment),
            Line::Region(region) => write!(
                f,
                "{}\t{}\t{}\t{}",
                region.feature_type(),
                region.start(),
                region.stop(),
                region.strand()
            ),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Empty);
        }

        if s.starts_with(COMMENT_PREFIX) {
            return Ok(Self::Comment(s.to_string()));
        }

        let fields = s.split_whitespace().collect::<Vec<_>>();

        if fields.len() != FIELD_COUNT {
            return Err(ParseError::InvalidFieldCount(fields.len(), s.into()));
        }

        // SAFETY: the feature type parse is infallible; unknown values fall
        // through to `FeatureType::Other`.
        let feature_type = fields[0].parse::<FeatureType>().unwrap();

        let start = fields[1]
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidPosition(fields[1].into(), s.into()))?;
        let stop = fields[2]
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidPosition(fields[2].into(), s.into()))?;

        let strand = fields[3]
            .parse::<Strand>()
            .map_err(|e| ParseError::InvalidStrand(e, s.into()))?;

        Region::try_new(feature_type, start, stop, strand)
            .map(Line::Region)
            .map_err(|e| ParseError::InvalidRegion(e, s.into()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_valid_region_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "CDS\t100\t150\t+".parse::<Line>()?;

        let expected = Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?;
        assert_eq!(line, Line::Region(expected));

        Ok(())
    }

    #[test]
    pub fn test_empty_and_comment_lines() -> Result<(), Box<dyn std::error::Error>> {
        let line = "".parse::<Line>()?;
        assert_eq!(line, Line::Empty);

        let line = "# the first exon".parse::<Line>()?;
        assert_eq!(line, Line::Comment(String::from("# the first exon")));

        Ok(())
    }

    #[test]
    pub fn test_invalid_field_count() -> Result<(), Box<dyn std::error::Error>> {
        let err = "CDS\t100\t150".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields: expected 4 fields, found 3 fields\n\nline: CDS\t100\t150"
        );

        Ok(())
    }

    #[test]
    pub fn test_invalid_position() -> Result<(), Box<dyn std::error::Error>> {
        let err = "CDS\t100\t?\t+".parse::<Line>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidPosition(_, _)));

        Ok(())
    }

    #[test]
    pub fn test_invalid_strand() -> Result<(), Box<dyn std::error::Error>> {
        let err = "CDS\t100\t150\t?".parse::<Line>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidStrand(_, _)));

        Ok(())
    }

    #[test]
    pub fn test_invalid_region() -> Result<(), Box<dyn std::error::Error>> {
        let err = "CDS\t150\t100\t+".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid region: start position (150) is greater than stop position (100)\n\nline: \
             CDS\t150\t100\t+"
        );

        Ok(())
    }
}
