//! Laser-cut layouts for a hemisphere built from slotted rib plates.
//!
//! A validated [`ParameterSet`] drives the [`PlateLayoutEngine`], which draws
//! every rib onto a [`Canvas`] and records the grooves the base plate needs;
//! the [`BaseRenderer`](render::BaseRenderer) then draws the base. The result
//! is a fixed 400x300 mm SVG page.
//!
//! ```
//! use spherebase::{ParameterSet, RawParams};
//!
//! let params = ParameterSet::new(RawParams {
//!     base_size: 100.0,
//!     plate_thick: 3.0,
//!     sph_height: 40.0,
//!     sph_rad: 35.0,
//!     plate_span: 15.0,
//!     rect_length: 20.0,
//!     rect_height: 15.0,
//! })?;
//! let svg = spherebase::spherebase(&params)?;
//! assert!(svg.contains("viewBox=\"0 0 400 300\""));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod errors;
pub mod layout;
mod log;
pub mod params;
pub mod render;
pub mod types;

pub use errors::{InvalidParameters, ParamError, RenderError};
pub use layout::{Groove, Layout, Plate, PlateLayoutEngine};
pub use params::{ParamField, ParameterSet, RawParams, RectDim, SphereCenter};
pub use render::Canvas;

use render::BaseRenderer;

/// The outcome of one generation run: the layout facts and the filled page
#[derive(Debug, Clone)]
pub struct Generated {
    pub layout: Layout,
    pub canvas: Canvas,
}

impl Generated {
    /// Serialize the page, consuming the run.
    pub fn into_svg(self) -> Result<String, RenderError> {
        self.canvas.serialize()
    }
}

/// Lay out the ribs and the base for `params`.
pub fn generate(params: &ParameterSet) -> Generated {
    let mut canvas = Canvas::new();
    let layout = PlateLayoutEngine::new(params).layout(&mut canvas);
    BaseRenderer::new(params).render(&layout, &mut canvas);
    Generated { layout, canvas }
}

/// Render `params` to an SVG document.
pub fn spherebase(params: &ParameterSet) -> Result<String, miette::Report> {
    Ok(generate(params).into_svg()?)
}
