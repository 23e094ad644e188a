//! `regionviewer` is a crate for laying out genomic regions for display.
//!
//! The crate provides two main points of entry:
//!
//! - A layout pipeline that compresses the gaps between a gene's regions
//!   down to a bounded amount of padding.
//! - A viewer that maps genomic positions onto pixel coordinates (and back)
//!   over a laid-out region list.
//!
//! The problem both address is one of proportion: the exons of a typical
//! gene account for a small fraction of its genomic span, so drawing a gene
//! at true scale yields a figure that is almost entirely intron. The layout
//! pipeline removes most of each large gap, keeping a bounded strip of
//! padding on either side so the regions still read as separated, and
//! records how much sequence was removed before each region as its
//! _offset_. Subtracting a region's offset from its genomic positions
//! yields a compact, gapless _offset-space_ that is suitable for linear
//! scaling onto a drawing surface.
//!
//! ## The layout pipeline
//!
//! A [`pipeline::Builder`] carries the layout parameters: the padding size,
//! an optional feature type filter, an optional index subset, and a
//! [`style::StyleTable`] assigning display attributes to each feature type.
//! [`pipeline::Builder::try_build_from()`] runs the pipeline over a region
//! list and produces an ordered list of
//! [`AnnotatedRegion`](crate::region::AnnotatedRegion)s, interleaving
//! synthetic `start_pad`, `end_pad`, and `intron` regions between the real
//! ones.
//!
//! ```
//! use regionviewer::Region;
//! use regionviewer::Strand;
//! use regionviewer::pipeline;
//! use regionviewer::region::FeatureType;
//! use regionviewer::style::Style;
//! use regionviewer::style::StyleTable;
//!
//! let regions = vec![
//!     Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
//!     Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Positive)?,
//! ];
//!
//! let styles = StyleTable::new(Style::new("#grey", "1px"));
//! let annotated = pipeline::Builder::new(styles)
//!     .padding(50)
//!     .try_build_from(regions)?;
//!
//! for region in &annotated {
//!     println!("{}", region);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## The viewer
//!
//! A [`viewer::Viewer`] combines a laid-out region list with a display
//! width. It answers the two questions a renderer asks: "at which pixel does
//! this genomic position sit?" ([`viewer::Viewer::pixel_at()`]) and "which
//! genomic position does this pixel show?"
//! ([`viewer::Viewer::position_at()`]). Positions that fall within a
//! compressed gap are not displayed at all, and both lookups report that
//! honestly with an [`Option`].
//!
//! A [`viewer::Viewer`] cannot be instantiated directly. Instead, you should
//! use [`viewer::Builder`] and the associated
//! [`viewer::Builder::try_build_from()`] method to construct one.
//!
//! ```
//! use regionviewer::Region;
//! use regionviewer::Strand;
//! use regionviewer::pipeline;
//! use regionviewer::region::FeatureType;
//! use regionviewer::style::Style;
//! use regionviewer::style::StyleTable;
//! use regionviewer::viewer;
//!
//! let regions = vec![
//!     Region::try_new(FeatureType::Cds, 100, 150, Strand::Positive)?,
//!     Region::try_new(FeatureType::Cds, 5200, 5250, Strand::Positive)?,
//! ];
//!
//! let annotated = pipeline::Builder::new(StyleTable::new(Style::new("#grey", "1px")))
//!     .padding(50)
//!     .try_build_from(regions)?;
//! let viewer = viewer::Builder::default().try_build_from(annotated, 504.0)?;
//!
//! assert_eq!(viewer.pixel_at(5225), Some(352.0));
//! assert_eq!(viewer.position_at(352.0), Some(5225));
//! assert_eq!(viewer.pixel_at(3000), None);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reading region lists
//!
//! Region lists are commonly stored as simple tab-delimited text. The
//! [`Reader`] facility parses that format into [`Region`]s, skipping blank
//! lines and `#` comments.
//!
//! ```
//! use regionviewer as rv;
//!
//! let data = b"# transcript regions\nCDS\t100\t150\t+\nCDS\t5200\t5250\t+";
//! let mut reader = rv::Reader::new(&data[..]);
//!
//! let regions = reader.regions().collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(regions.len(), 2);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod line;
pub mod pipeline;
pub mod reader;
pub mod region;
pub mod scale;
pub mod strand;
pub mod style;
pub mod viewer;

pub use line::Line;
pub use region::Region;
pub use strand::Strand;

pub use self::reader::Reader;
