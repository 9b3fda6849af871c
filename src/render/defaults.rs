//! Fixed page geometry and stroke settings (all in millimetres)

use crate::types::Color;

pub const PAGE_WIDTH: f64 = 400.0;
pub const PAGE_HEIGHT: f64 = 300.0;
/// Offset of the first rib's origin from the page corner
pub const MARGIN: f64 = 3.0;
/// Space between stacked rib copies and between columns
pub const GAP: f64 = 3.0;
pub const STROKE_WIDTH: f64 = 0.3;
pub const CUT_COLOR: Color = Color::BLACK;
pub const REFERENCE_COLOR: Color = Color::RED;
pub const CENTER_RIB_COPIES: usize = 2;
pub const RING_RIB_COPIES: usize = 4;
pub const OUTPUT_FILE: &str = "lasercut_spherebase.svg";
