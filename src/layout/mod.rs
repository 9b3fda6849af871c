//! Rib layout: how many ribs, where they sit, and how big each one is.
//!
//! The base is divided into `plate_num` rib slots. Slots are evaluated from
//! the center outward; each slot's rib is cut from the sphere's circular
//! cross-section at that offset, and its nominal rectangle is clamped so no
//! corner pokes through the sphere surface. Every rib that is drawn leaves a
//! [`Groove`] behind for the base plate.

use glam::dvec2;

use crate::params::{ParameterSet, RectDim};
use crate::render::Canvas;
use crate::render::defaults::{CENTER_RIB_COPIES, GAP, MARGIN, RING_RIB_COPIES};
use crate::render::plate::PlateRenderer;
use crate::types::Point;

/// One rib's geometry, as handed to the plate renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plate {
    /// Radius of the sphere's cross-section at this rib, >= 0
    pub section_radius: f64,
    /// Rectangle actually drawn, after clamping
    pub rect_dim: RectDim,
    pub origin: Point,
    pub arc_center: Point,
}

/// Where a rib meets the base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Groove {
    /// Signed offset from the base center along its edge
    pub position: f64,
    /// `rect_dim.length / 2` of the rib that produced it
    pub depth: f64,
}

/// A slot that was considered during layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub sect_pos: f64,
    pub section_radius: f64,
    pub drawn: bool,
}

/// Everything the base renderer needs from the rib pass
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Total rib slots across the full base width
    pub plate_num: usize,
    /// One entry per rib drawn, center rib first
    pub grooves: Vec<Groove>,
    /// First copy of every rib drawn, in drawing order
    pub plates: Vec<Plate>,
    /// Every off-center slot evaluated, drawn or skipped
    pub rings: Vec<Ring>,
    pub has_centerplate: bool,
    /// Center of the base plate in output space
    pub center_base: Point,
}

impl Layout {
    /// Number of distinct ribs drawn (each drawn in several copies)
    pub fn num_vplate(&self) -> usize {
        self.grooves.len()
    }
}

/// Computes rib positions and sizes and draws the ribs
#[derive(Debug, Clone, Copy)]
pub struct PlateLayoutEngine<'a> {
    params: &'a ParameterSet,
}

impl<'a> PlateLayoutEngine<'a> {
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params }
    }

    /// Distance between neighbouring rib slots
    fn pitch(&self) -> f64 {
        self.params.plate_span + self.params.plate_thick
    }

    /// `ceil((base_size - plate_thick) / (plate_span + plate_thick))`
    pub fn plate_num(&self) -> usize {
        let p = self.params;
        ((p.base_size - p.plate_thick) / self.pitch()).ceil() as usize
    }

    /// Radius of the sphere's cross-section at a horizontal offset from its
    /// center; zero once the offset leaves the sphere.
    pub fn section_radius(&self, sect_pos: f64) -> f64 {
        let r = self.params.sph_rad;
        (r * r - sect_pos * sect_pos).max(0.0).sqrt()
    }

    /// Whether a rib cut from a cross-section of radius `r` has any
    /// silhouette: its inner corner, inset by the material thickness, must lie
    /// strictly outside the circle.
    pub fn needs_vplate(&self, r: f64) -> bool {
        let p = self.params;
        let c = p.sph_center;
        (c.position - p.plate_thick).powi(2) + (c.height - 3.0 * p.plate_thick).powi(2) > r * r
    }

    /// The nominal rectangle clamped to a cross-section of radius `r`.
    pub fn update_rect_dimension(&self, r: f64) -> RectDim {
        self.clamp_rect(self.params.ini_rect, r)
    }

    /// Clamp each axis of `rect` independently so its far corner does not
    /// fall inside the circle `x^2 + y^2 = r^2`.
    pub fn clamp_rect(&self, rect: RectDim, r: f64) -> RectDim {
        let p = self.params;
        let c = p.sph_center;
        let r2 = r * r;
        let mut clamped = rect;

        let notch_level = c.height - 3.0 * p.plate_thick;
        if (c.position - rect.length).powi(2) + notch_level.powi(2) < r2 {
            clamped.length = c.position - (r2 - notch_level.powi(2)).sqrt();
        }

        let inner_edge = c.position - p.plate_thick;
        if inner_edge.powi(2) + (c.height - rect.height).powi(2) < r2 {
            clamped.height = c.height - (r2 - inner_edge.powi(2)).sqrt();
        }

        clamped
    }

    /// Lay out and draw every rib, returning what the base needs.
    pub fn layout(&self, canvas: &mut Canvas) -> Layout {
        let p = self.params;
        let renderer = PlateRenderer::new(p.plate_thick);
        let plate_num = self.plate_num();
        let is_even = plate_num % 2 == 0;

        crate::log::debug!(plate_num, is_even, pitch = self.pitch(), "rib layout");

        let mut layout = Layout {
            plate_num,
            grooves: Vec::new(),
            plates: Vec::new(),
            rings: Vec::new(),
            has_centerplate: false,
            center_base: Point::ZERO,
        };
        let mut cursor_x = MARGIN;

        let mut sect_pos = if is_even { self.pitch() / 2.0 } else { 0.0 };

        if !is_even {
            if self.needs_vplate(p.sph_rad) {
                let rect_dim = self.update_rect_dimension(p.sph_rad);
                let plate = self.plate_at(cursor_x, p.sph_rad, rect_dim);
                self.draw_stack(&renderer, &plate, CENTER_RIB_COPIES, canvas);
                crate::log::debug!(
                    length = rect_dim.length,
                    height = rect_dim.height,
                    "center rib"
                );
                layout.grooves.push(Groove {
                    position: 0.0,
                    depth: rect_dim.length / 2.0,
                });
                layout.plates.push(plate);
                layout.has_centerplate = true;
                cursor_x += rect_dim.length + GAP;
                sect_pos += self.pitch();
            } else {
                // The first ring re-evaluates the center slot.
                crate::log::debug!(sph_rad = p.sph_rad, "center rib skipped");
            }
        }

        for _ in 0..plate_num / 2 {
            let section_radius = self.section_radius(sect_pos);
            let drawn = self.needs_vplate(section_radius);
            crate::log::debug!(sect_pos, section_radius, drawn, "ring");
            layout.rings.push(Ring {
                sect_pos,
                section_radius,
                drawn,
            });

            if drawn {
                let rect_dim = self.update_rect_dimension(section_radius);
                let plate = self.plate_at(cursor_x, section_radius, rect_dim);
                self.draw_stack(&renderer, &plate, RING_RIB_COPIES, canvas);
                layout.grooves.push(Groove {
                    position: sect_pos,
                    depth: rect_dim.length / 2.0,
                });
                layout.plates.push(plate);
                cursor_x += rect_dim.length + GAP;
            }
            sect_pos += self.pitch();
        }

        layout.center_base = dvec2(
            cursor_x + p.base_size / 2.0,
            MARGIN + p.base_size / 2.0,
        );
        crate::log::debug!(
            ribs = layout.num_vplate(),
            has_centerplate = layout.has_centerplate,
            center_x = layout.center_base.x,
            center_y = layout.center_base.y,
            "ribs placed"
        );
        layout
    }

    /// The first copy of a rib whose column starts at `cursor_x`
    fn plate_at(&self, cursor_x: f64, section_radius: f64, rect_dim: RectDim) -> Plate {
        let c = self.params.sph_center;
        let origin = dvec2(cursor_x, MARGIN);
        Plate {
            section_radius,
            rect_dim,
            origin,
            arc_center: origin + dvec2(c.position, c.height),
        }
    }

    /// Draw `copies` of a rib stacked downward, `GAP` apart.
    fn draw_stack(&self, renderer: &PlateRenderer, plate: &Plate, copies: usize, canvas: &mut Canvas) {
        let step = dvec2(0.0, plate.rect_dim.height + GAP);
        for k in 0..copies {
            let shift = step * k as f64;
            let copy = Plate {
                origin: plate.origin + shift,
                arc_center: plate.arc_center + shift,
                ..*plate
            };
            renderer.render(&copy, canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParams;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{actual} != {expected}"
        );
    }

    fn params(raw: RawParams) -> ParameterSet {
        ParameterSet::new(raw).unwrap()
    }

    fn reference() -> RawParams {
        RawParams {
            base_size: 100.0,
            plate_thick: 3.0,
            sph_height: 40.0,
            sph_rad: 35.0,
            plate_span: 15.0,
            rect_length: 20.0,
            rect_height: 15.0,
        }
    }

    #[test]
    fn plate_num_rounds_up() {
        let p = params(reference());
        assert_eq!(PlateLayoutEngine::new(&p).plate_num(), 6);

        let p = params(RawParams { plate_span: 20.0, ..reference() });
        assert_eq!(PlateLayoutEngine::new(&p).plate_num(), 5);
    }

    #[test]
    fn section_radius_follows_sphere_equation() {
        let p = params(reference());
        let engine = PlateLayoutEngine::new(&p);
        assert_close(engine.section_radius(0.0), 35.0);
        assert_close(engine.section_radius(21.0), 28.0);
        assert_close(engine.section_radius(35.0), 0.0);
    }

    #[test]
    fn section_radius_is_zero_outside_sphere() {
        let p = params(reference());
        let engine = PlateLayoutEngine::new(&p);
        assert_eq!(engine.section_radius(45.0), 0.0);
        assert_eq!(engine.section_radius(-45.0), 0.0);
    }

    #[test]
    fn needs_vplate_compares_inner_corner_with_radius() {
        // (50 - 3)^2 + (40 - 9)^2 = 3170
        let p = params(reference());
        let engine = PlateLayoutEngine::new(&p);
        assert!(engine.needs_vplate(0.0));
        assert!(engine.needs_vplate(56.0));
        assert!(!engine.needs_vplate(3170f64.sqrt() + 1e-6));
        assert!(!engine.needs_vplate(60.0));
    }

    #[test]
    fn needs_vplate_has_a_threshold_radius() {
        let p = params(reference());
        let engine = PlateLayoutEngine::new(&p);
        let threshold = 3170f64.sqrt();
        for r in [0.0, 10.0, 30.0, threshold - 0.01] {
            assert!(engine.needs_vplate(r), "r = {r}");
        }
        for r in [threshold + 1e-6, threshold + 0.01, 80.0, 500.0] {
            assert!(!engine.needs_vplate(r), "r = {r}");
        }
    }

    #[test]
    fn small_radius_keeps_nominal_rect() {
        let p = params(reference());
        let engine = PlateLayoutEngine::new(&p);
        assert_eq!(engine.update_rect_dimension(35.0), RectDim::new(20.0, 15.0));
        assert_eq!(engine.update_rect_dimension(0.0), RectDim::new(20.0, 15.0));
    }

    #[test]
    fn large_radius_clamps_both_axes() {
        let p = params(RawParams { sph_rad: 55.0, ..reference() });
        let engine = PlateLayoutEngine::new(&p);
        let rect = engine.update_rect_dimension(55.0);
        // length: 50 - sqrt(55^2 - 31^2), height: 40 - sqrt(55^2 - 47^2)
        assert_close(rect.length, 50.0 - 2064f64.sqrt());
        assert_close(rect.height, 40.0 - 816f64.sqrt());
    }

    #[test]
    fn axes_clamp_independently() {
        // 1861 < r^2 = 2000 clamps the length; 2834 > 2000 leaves the height.
        let p = params(RawParams { sph_rad: 2000f64.sqrt(), ..reference() });
        let engine = PlateLayoutEngine::new(&p);
        let rect = engine.update_rect_dimension(2000f64.sqrt());
        assert_close(rect.length, 50.0 - (2000.0f64 - 961.0).sqrt());
        assert_eq!(rect.height, 15.0);
    }

    #[test]
    fn clamping_is_idempotent() {
        let p = params(RawParams { sph_rad: 55.0, ..reference() });
        let engine = PlateLayoutEngine::new(&p);
        for r in [0.0, 20.0, 44.0, 50.0, 55.0] {
            let once = engine.update_rect_dimension(r);
            let twice = engine.clamp_rect(once, r);
            assert_close(twice.length, once.length);
            assert_close(twice.height, once.height);
        }
    }

    #[test]
    fn even_layout_starts_half_a_pitch_out() {
        let p = params(reference());
        let mut canvas = Canvas::new();
        let layout = PlateLayoutEngine::new(&p).layout(&mut canvas);

        assert!(!layout.has_centerplate);
        let positions: Vec<f64> = layout.rings.iter().map(|r| r.sect_pos).collect();
        assert_eq!(positions, vec![9.0, 27.0, 45.0]);
        assert_eq!(layout.rings[2].section_radius, 0.0);
        assert_eq!(layout.num_vplate(), 3);
        assert_eq!(canvas.paths().count(), 12);
    }

    #[test]
    fn columns_advance_by_rect_length_plus_gap() {
        let p = params(reference());
        let mut canvas = Canvas::new();
        let layout = PlateLayoutEngine::new(&p).layout(&mut canvas);

        let xs: Vec<f64> = layout.plates.iter().map(|pl| pl.origin.x).collect();
        assert_eq!(xs, vec![3.0, 26.0, 49.0]);
        assert_eq!(layout.center_base, dvec2(122.0, 53.0));
        assert_eq!(layout.plates[0].arc_center, dvec2(53.0, 43.0));
    }

    #[test]
    fn odd_layout_draws_center_rib_twice() {
        let p = params(RawParams { plate_span: 20.0, ..reference() });
        let mut canvas = Canvas::new();
        let layout = PlateLayoutEngine::new(&p).layout(&mut canvas);

        assert_eq!(layout.plate_num, 5);
        assert!(layout.has_centerplate);
        assert_eq!(layout.grooves[0], Groove { position: 0.0, depth: 10.0 });
        let positions: Vec<f64> = layout.rings.iter().map(|r| r.sect_pos).collect();
        assert_eq!(positions, vec![23.0, 46.0]);
        // 2 center copies + 4 per drawn ring
        assert_eq!(canvas.paths().count(), 2 + 4 * (layout.num_vplate() - 1));
    }

    #[test]
    fn skipped_center_rib_leaves_first_ring_at_center() {
        // sph_rad^2 = 3249 > 3170: the center slot has no silhouette.
        let p = params(RawParams {
            plate_span: 20.0,
            sph_rad: 57.0,
            ..reference()
        });
        let mut canvas = Canvas::new();
        let layout = PlateLayoutEngine::new(&p).layout(&mut canvas);

        assert_eq!(layout.plate_num, 5);
        assert!(!layout.has_centerplate);
        let rings: Vec<(f64, bool)> = layout.rings.iter().map(|r| (r.sect_pos, r.drawn)).collect();
        assert_eq!(rings, vec![(0.0, false), (23.0, true)]);
        assert_eq!(layout.grooves, vec![Groove { position: 23.0, depth: layout.plates[0].rect_dim.length / 2.0 }]);
        assert_eq!(layout.num_vplate(), 1);
        assert_eq!(layout.plates[0].origin.x, 3.0);
        assert_eq!(canvas.paths().count(), 4);
    }

    #[test]
    fn skipped_rings_leave_no_trace() {
        // (60 - 3)^2 + (40 - 9)^2 = 4210: the inner slots are too deep inside the sphere.
        let p = params(RawParams {
            base_size: 120.0,
            sph_rad: 70.0,
            ..reference()
        });
        let mut canvas = Canvas::new();
        let engine = PlateLayoutEngine::new(&p);
        let layout = engine.layout(&mut canvas);

        let drawn = layout.rings.iter().filter(|r| r.drawn).count();
        assert!(drawn < layout.rings.len());
        assert_eq!(layout.num_vplate(), drawn);
        assert_eq!(canvas.paths().count(), 4 * drawn);
        for (groove, ring) in layout
            .grooves
            .iter()
            .zip(layout.rings.iter().filter(|r| r.drawn))
        {
            assert_eq!(groove.position, ring.sect_pos);
        }
        assert!(layout.num_vplate() <= layout.plate_num);
    }
}
