//! Base plate outline.
//!
//! Every groove recorded during layout is cut four times: at `+position` and
//! `-position` on both the lower and the upper edge. The lower edge is walked
//! right to left and the upper edge left to right, so slot arrays are ordered
//! to keep both walks monotonic.

use glam::dvec2;

use super::path_builder::PathData;
use super::svg::{Canvas, StrokeStyle};
use crate::layout::{Groove, Layout};
use crate::params::ParameterSet;
use crate::types::Point;

/// A groove placed on one edge, at an absolute x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrooveSlot {
    pub x: f64,
    pub depth: f64,
}

/// Groove slots for both notched edges of the base
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseEdges {
    /// Bottom edge, ordered right to left
    pub lower: Vec<GrooveSlot>,
    /// Top edge, ordered left to right
    pub upper: Vec<GrooveSlot>,
}

/// Number of slots per edge: the center rib's groove is shared by both halves.
pub fn groove_total(num_vplate: usize, has_centerplate: bool) -> usize {
    (2 * num_vplate).saturating_sub(usize::from(has_centerplate))
}

/// Spread the recorded grooves over both edges in mirrored pairs.
pub fn mirror_grooves(grooves: &[Groove], has_centerplate: bool, center_x: f64) -> BaseEdges {
    let num_vplate = grooves.len();
    let total = groove_total(num_vplate, has_centerplate);
    let mut edges = BaseEdges {
        lower: vec![GrooveSlot::default(); total],
        upper: vec![GrooveSlot::default(); total],
    };

    for (i, groove) in grooves.iter().enumerate() {
        let num_former = num_vplate - i - 1;
        let num_latter = num_vplate + i - usize::from(has_centerplate);
        let near = GrooveSlot { x: center_x - groove.position, depth: groove.depth };
        let far = GrooveSlot { x: center_x + groove.position, depth: groove.depth };

        edges.lower[num_latter] = near;
        edges.upper[num_latter] = far;
        edges.lower[num_former] = far;
        edges.upper[num_former] = near;
    }

    edges
}

/// Draws the base plate and its footprint mark
#[derive(Debug, Clone, Copy)]
pub struct BaseRenderer<'a> {
    params: &'a ParameterSet,
}

impl<'a> BaseRenderer<'a> {
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params }
    }

    /// Closed base outline with every groove notched in
    pub fn outline(&self, edges: &BaseEdges, center_base: Point) -> PathData {
        let half = self.params.base_size / 2.0;
        let (cx, cy) = (center_base.x, center_base.y);

        let mut d = PathData::new().m(cx + half, cy + half);
        for slot in &edges.lower {
            self.push_groove(&mut d, slot, center_base, -1.0);
        }
        d.push_line(dvec2(cx - half, cy + half));
        d.push_line(dvec2(cx - half, cy - half));
        for slot in &edges.upper {
            self.push_groove(&mut d, slot, center_base, 1.0);
        }
        d.push_line(dvec2(cx + half, cy - half));
        d.push_line(dvec2(cx + half, cy + half));
        d
    }

    /// Notch into the edge: `direction` is -1 on the lower edge, +1 on the upper
    fn push_groove(&self, d: &mut PathData, slot: &GrooveSlot, center_base: Point, direction: f64) {
        let edge_y = center_base.y - direction * self.params.base_size / 2.0;
        let inner_y = edge_y + direction * slot.depth;
        let half_width = direction * self.params.plate_thick / 2.0;

        d.push_line(dvec2(slot.x - half_width, edge_y));
        d.push_line(dvec2(slot.x - half_width, inner_y));
        d.push_line(dvec2(slot.x + half_width, inner_y));
        d.push_line(dvec2(slot.x + half_width, edge_y));
    }

    /// Radius of the sphere's circle where it meets the base's mid-plane, if
    /// the sphere reaches that far down.
    pub fn footprint_radius(&self) -> Option<f64> {
        let p = self.params;
        let level = p.sph_center.height - 1.5 * p.plate_thick;
        let radicand = p.sph_rad * p.sph_rad - level * level;
        (p.sph_rad > level && radicand > 0.0).then(|| radicand.sqrt())
    }

    pub fn render(&self, layout: &Layout, canvas: &mut Canvas) {
        let edges = mirror_grooves(&layout.grooves, layout.has_centerplate, layout.center_base.x);
        crate::log::debug!(slots = edges.lower.len(), "base grooves");
        canvas.add_path(self.outline(&edges, layout.center_base), StrokeStyle::CUT);

        if let Some(radius) = self.footprint_radius() {
            crate::log::debug!(radius, "footprint circle");
            canvas.add_circle(layout.center_base, radius, StrokeStyle::REFERENCE);
        }
    }
}
