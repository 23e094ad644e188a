//! The feature types a region may carry.

use std::convert::Infallible;
use std::str::FromStr;

/// The feature type of a region.
///
/// Biological feature types describe what a region of a transcript _is_
/// (coding sequence, untranslated region, and so on). Synthetic feature types
/// are introduced by the layout pipeline to bound how much screen distance a
/// gap between real regions consumes; they have no biological meaning.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FeatureType {
    /// A coding sequence segment (`CDS`).
    Cds,
    /// An untranslated segment (`UTR`).
    Utr,
    /// An exon.
    Exon,
    /// A synthetic pad trailing a real region (`end_pad`).
    EndPad,
    /// A synthetic pad leading a real region (`start_pad`).
    StartPad,
    /// A synthetic region spanning a small gap at true scale (`intron`).
    Intron,
    /// Any other feature type.
    Other(String),
}

impl FeatureType {
    /// Indicates whether the feature type was introduced by the layout
    /// pipeline rather than present in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    ///
    /// assert!(FeatureType::StartPad.is_synthetic());
    /// assert!(FeatureType::EndPad.is_synthetic());
    /// assert!(FeatureType::Intron.is_synthetic());
    ///
    /// assert!(!FeatureType::Cds.is_synthetic());
    /// assert!(!FeatureType::Other(String::from("enhancer")).is_synthetic());
    /// ```
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            FeatureType::StartPad | FeatureType::EndPad | FeatureType::Intron
        )
    }
}

impl FromStr for FeatureType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CDS" => Ok(Self::Cds),
            "UTR" => Ok(Self::Utr),
            "exon" => Ok(Self::Exon),
            "end_pad" => Ok(Self::EndPad),
            "start_pad" => Ok(Self::StartPad),
            "intron" => Ok(Self::Intron),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureType::Cds => write!(f, "CDS"),
            FeatureType::Utr => write!(f, "UTR"),
            FeatureType::Exon => write!(f, "exon"),
            FeatureType::EndPad => write!(f, "end_pad"),
            FeatureType::StartPad => write!(f, "start_pad"),
            FeatureType::Intron => write!(f, "intron"),
            FeatureType::Other(other) => write!(f, "{}", other),
        }
    }
}
