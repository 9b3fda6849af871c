//! Rib (vertical plate) outlines.
//!
//! A rib is drawn from its origin down the left edge, across the top (with an
//! arc where the sphere surface cuts the corner), down the right edge with the
//! joinery notch, and back to the origin.

use super::path_builder::PathData;
use super::svg::{Canvas, StrokeStyle};
use crate::layout::Plate;

/// Draws rib outlines onto a canvas
#[derive(Debug, Clone, Copy)]
pub struct PlateRenderer {
    plate_thick: f64,
}

impl PlateRenderer {
    pub fn new(plate_thick: f64) -> Self {
        Self { plate_thick }
    }

    /// Whether the sphere cuts the rectangle's top-right corner
    pub fn has_arc(plate: &Plate) -> bool {
        let (dy2, dx2) = corner_offsets(plate);
        plate.section_radius.powi(2) - dy2 - dx2 > 0.0
    }

    /// The closed outline of one rib
    pub fn outline(&self, plate: &Plate) -> PathData {
        let o = plate.origin;
        let len = plate.rect_dim.length;
        let ht = plate.rect_dim.height;
        let t = self.plate_thick;
        let r2 = plate.section_radius.powi(2);

        let mut d = PathData::new().m(o.x, o.y).l(o.x, o.y + ht);

        if Self::has_arc(plate) {
            let (dy2, dx2) = corner_offsets(plate);
            let top_length = plate.arc_center.x - (r2 - dy2).sqrt() - o.x;
            let right_height = plate.arc_center.y - (r2 - dx2).sqrt() - o.y;
            crate::log::debug!(top_length, right_height, "rib arc");
            d = d
                .l(o.x + top_length, o.y + ht)
                .a(plate.section_radius, o.x + len, o.y + right_height);
        } else {
            d = d.l(o.x + len, o.y + ht);
        }

        // Right edge with the notch that mates with the base groove
        d.l(o.x + len, o.y + 2.0 * t)
            .l(o.x + len / 2.0, o.y + 2.0 * t)
            .l(o.x + len / 2.0, o.y + t)
            .l(o.x + len, o.y + t)
            .l(o.x + len, o.y)
            .l(o.x, o.y)
    }

    pub fn render(&self, plate: &Plate, canvas: &mut Canvas) {
        canvas.add_path(self.outline(plate), StrokeStyle::CUT);
    }
}

/// Squared distances from the arc center to the rectangle's far corner,
/// as `(vertical, horizontal)`
fn corner_offsets(plate: &Plate) -> (f64, f64) {
    let o = plate.origin;
    let c = plate.arc_center;
    let dy = c.y - plate.rect_dim.height - o.y;
    let dx = c.x - plate.rect_dim.length - o.x;
    (dy * dy, dx * dx)
}
