//! Display styles attached to regions by feature type.

use std::collections::HashMap;

use crate::region::FeatureType;

/// A display style for a region.
///
/// The layout pipeline treats styles as opaque: it attaches them to regions
/// and carries them through to the annotated output, where drawing code
/// consumes them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Style {
    /// The fill color.
    color: String,
    /// The stroke thickness.
    thickness: String,
}

impl Style {
    /// Creates a new [`Style`].
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::style::Style;
    ///
    /// let style = Style::new("#424242", "30px");
    /// assert_eq!(style.color(), "#424242");
    /// assert_eq!(style.thickness(), "30px");
    /// ```
    pub fn new(color: impl Into<String>, thickness: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            thickness: thickness.into(),
        }
    }

    /// Gets the fill color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Gets the stroke thickness.
    pub fn thickness(&self) -> &str {
        &self.thickness
    }
}

/// A feature type to style lookup table.
///
/// A table always carries a default style, supplied at construction, so a
/// lookup for a feature type without an explicit entry falls back to the
/// default rather than failing. This makes the "unrecognized feature type
/// with no default" condition unrepresentable.
#[derive(Clone, Debug)]
pub struct StyleTable {
    /// The style used when a feature type has no explicit entry.
    default: Style,
    /// The explicit per-feature-type entries.
    entries: HashMap<FeatureType, Style>,
}

impl StyleTable {
    /// Creates a new [`StyleTable`] with the provided default style.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::style::Style;
    /// use regionviewer::style::StyleTable;
    ///
    /// let table = StyleTable::new(Style::new("#grey", "1px"));
    /// assert_eq!(table.default_style().color(), "#grey");
    /// ```
    pub fn new(default: Style) -> Self {
        Self {
            default,
            entries: HashMap::new(),
        }
    }

    /// Consumes self to add an explicit entry for a feature type.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::style::Style;
    /// use regionviewer::style::StyleTable;
    ///
    /// let table = StyleTable::new(Style::new("#grey", "1px"))
    ///     .insert(FeatureType::Cds, Style::new("#424242", "30px"));
    ///
    /// assert_eq!(table.get(&FeatureType::Cds).thickness(), "30px");
    /// ```
    pub fn insert(mut self, feature_type: FeatureType, style: Style) -> Self {
        self.entries.insert(feature_type, style);
        self
    }

    /// Gets the style for a feature type, falling back to the default style
    /// when the feature type has no explicit entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionviewer::region::FeatureType;
    /// use regionviewer::style::Style;
    /// use regionviewer::style::StyleTable;
    ///
    /// let table = StyleTable::new(Style::new("#grey", "1px"))
    ///     .insert(FeatureType::Cds, Style::new("#424242", "30px"));
    ///
    /// assert_eq!(table.get(&FeatureType::Cds).color(), "#424242");
    /// assert_eq!(table.get(&FeatureType::Utr).color(), "#grey");
    /// ```
    pub fn get(&self, feature_type: &FeatureType) -> &Style {
        self.entries.get(feature_type).unwrap_or(&self.default)
    }

    /// Gets the default style.
    pub fn default_style(&self) -> &Style {
        &self.default
    }
}
