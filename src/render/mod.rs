//! SVG rendering for the cutting sheet
//!
//! This module is organized into submodules:
//! - `defaults`: Page size, spacing and stroke settings
//! - `path_builder`: Absolute path commands and number formatting
//! - `svg`: The append-only canvas and its serialization
//! - `plate`: Rib outlines
//! - `base`: Base plate outline, groove mirroring and footprint circle

pub mod base;
pub mod defaults;
pub mod path_builder;
pub mod plate;
pub mod svg;

// Re-export commonly used items
pub use base::BaseRenderer;
pub use path_builder::PathData;
pub use plate::PlateRenderer;
pub use svg::{Canvas, StrokeStyle, SvgNode};
