//! SVG generation
//!
//! [`Canvas`] is the append-only drawing every renderer writes into. Nodes
//! keep their style from the moment they are added; nothing is re-styled or
//! removed, and the whole page is turned into an `svg` document once at the
//! end.

use enum_dispatch::enum_dispatch;
use svg::Document;
use svg::Node;
use svg::node::element::{Circle as SvgCircle, Element as SvgElement, Path as SvgPath};

use super::defaults;
use super::path_builder::{PathData, fmt_num};
use crate::errors::RenderError;
use crate::types::{BBox, Color, Point};

/// Prolog written ahead of the `<svg>` root
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" ?>"#;

/// Stroke-only presentation: every primitive on the sheet has `fill="none"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    /// Lines the laser cuts through
    pub const CUT: StrokeStyle = StrokeStyle {
        color: defaults::CUT_COLOR,
        width: defaults::STROKE_WIDTH,
    };

    /// Marks that are engraved or ignored, never cut
    pub const REFERENCE: StrokeStyle = StrokeStyle {
        color: defaults::REFERENCE_COLOR,
        width: defaults::STROKE_WIDTH,
    };

    /// Set the presentation attributes on `node`
    fn apply<N: Node>(&self, mut node: N) -> N {
        node.assign("fill", "none");
        node.assign(
            "style",
            format!("stroke:{};stroke-width:{}", self.color, fmt_num(self.width)),
        );
        node
    }
}

/// Behavior shared by every drawable node
#[enum_dispatch]
pub trait Element {
    /// Build the DOM element for this node
    fn to_svg(&self) -> Result<SvgElement, RenderError>;

    /// Grow `bbox` to cover this node
    fn expand_bounds(&self, bbox: &mut BBox);

    fn style(&self) -> StrokeStyle;
}

/// SVG path element (`<path>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub d: PathData,
    pub style: StrokeStyle,
}

impl Element for Path {
    fn to_svg(&self) -> Result<SvgElement, RenderError> {
        if self.d.is_empty() {
            return Err(RenderError::EmptyPath);
        }
        if !self.d.is_finite() {
            return Err(RenderError::NonFinite { element: "path" });
        }
        let path = SvgPath::new().set("d", self.d.to_string());
        Ok(self.style.apply(path).into())
    }

    fn expand_bounds(&self, bbox: &mut BBox) {
        for p in self.d.points() {
            bbox.expand_point(p);
        }
    }

    fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// SVG circle element (`<circle>`)
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
    pub style: StrokeStyle,
}

impl Element for Circle {
    fn to_svg(&self) -> Result<SvgElement, RenderError> {
        if !(self.center.is_finite() && self.r.is_finite()) {
            return Err(RenderError::NonFinite { element: "circle" });
        }
        let circle = SvgCircle::new()
            .set("cx", fmt_num(self.center.x))
            .set("cy", fmt_num(self.center.y))
            .set("r", fmt_num(self.r));
        Ok(self.style.apply(circle).into())
    }

    fn expand_bounds(&self, bbox: &mut BBox) {
        bbox.expand_circle(self.center, self.r);
    }

    fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// Any node the canvas can hold
#[enum_dispatch(Element)]
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Path(Path),
    Circle(Circle),
}

/// Fixed-size drawing page
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    nodes: Vec<SvgNode>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// An empty 400x300 page
    pub fn new() -> Self {
        Self {
            width: defaults::PAGE_WIDTH,
            height: defaults::PAGE_HEIGHT,
            nodes: Vec::new(),
        }
    }

    pub fn add_path(&mut self, d: PathData, style: StrokeStyle) {
        self.nodes.push(Path { d, style }.into());
    }

    pub fn add_circle(&mut self, center: Point, radius: f64, style: StrokeStyle) {
        self.nodes.push(Circle { center, r: radius, style }.into());
    }

    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    /// Path nodes only, in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.nodes.iter().filter_map(|n| match n {
            SvgNode::Path(p) => Some(p),
            SvgNode::Circle(_) => None,
        })
    }

    /// Circle nodes only, in insertion order
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.nodes.iter().filter_map(|n| match n {
            SvgNode::Circle(c) => Some(c),
            SvgNode::Path(_) => None,
        })
    }

    /// Extent of everything drawn so far
    pub fn bounds(&self) -> BBox {
        let mut bbox = BBox::new();
        for node in &self.nodes {
            node.expand_bounds(&mut bbox);
        }
        bbox
    }

    /// The page as an `svg` document, children in insertion order
    pub fn to_document(&self) -> Result<Document, RenderError> {
        let w = fmt_num(self.width);
        let h = fmt_num(self.height);
        let mut document = Document::new()
            .set("version", "1.1")
            .set("width", format!("{w}mm"))
            .set("height", format!("{h}mm"))
            .set("viewBox", format!("0 0 {w} {h}"));
        for node in &self.nodes {
            document.append(node.to_svg()?);
        }
        Ok(document)
    }

    /// Render the page and consume the canvas.
    pub fn serialize(self) -> Result<String, RenderError> {
        let bounds = self.bounds();
        if !bounds.fits_within(self.width, self.height) {
            crate::log::warn!(
                min_x = bounds.min.x,
                min_y = bounds.min.y,
                max_x = bounds.max.x,
                max_y = bounds.max.y,
                "drawing extends past the page"
            );
        }

        let document = self.to_document()?;
        let out = format!("{XML_DECLARATION}\n{document}\n");

        crate::log::debug!(nodes = self.nodes.len(), bytes = out.len(), "serialized canvas");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn empty_canvas_has_fixed_page() {
        let svg = Canvas::new().serialize().unwrap();
        assert_eq!(
            svg,
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n\
             <svg height=\"300mm\" version=\"1.1\" viewBox=\"0 0 400 300\" width=\"400mm\" xmlns=\"http://www.w3.org/2000/svg\"/>\n"
        );
    }

    #[test]
    fn nodes_keep_insertion_order_and_style() {
        let mut canvas = Canvas::new();
        canvas.add_path(PathData::new().m(0.0, 0.0).l(1.0, 0.0), StrokeStyle::CUT);
        canvas.add_circle(dvec2(5.0, 5.0), 2.0, StrokeStyle::REFERENCE);
        canvas.add_path(PathData::new().m(2.0, 2.0).l(3.0, 2.0), StrokeStyle::CUT);

        let styles: Vec<StrokeStyle> = canvas.nodes().iter().map(|n| n.style()).collect();
        assert_eq!(
            styles,
            vec![StrokeStyle::CUT, StrokeStyle::REFERENCE, StrokeStyle::CUT]
        );
        assert_eq!(canvas.paths().count(), 2);
        assert_eq!(canvas.circles().count(), 1);
    }

    #[test]
    fn path_and_circle_markup() {
        let mut canvas = Canvas::new();
        canvas.add_path(PathData::new().m(3.0, 3.0).l(3.0, 18.0), StrokeStyle::CUT);
        canvas.add_circle(dvec2(122.0, 53.0), 12.5, StrokeStyle::REFERENCE);
        let svg = canvas.serialize().unwrap();
        assert!(svg.contains(
            r#"<path d="M 3,3 L 3,18" fill="none" style="stroke:#000000;stroke-width:0.3"/>"#
        ));
        assert!(svg.contains(
            r#"<circle cx="122" cy="53" fill="none" r="12.5" style="stroke:#FF0000;stroke-width:0.3"/>"#
        ));
    }

    #[test]
    fn document_children_follow_insertion_order() {
        let mut canvas = Canvas::new();
        canvas.add_circle(dvec2(1.0, 1.0), 1.0, StrokeStyle::REFERENCE);
        canvas.add_path(PathData::new().m(0.0, 0.0).l(1.0, 0.0), StrokeStyle::CUT);
        let document = canvas.to_document().unwrap();
        let root: &SvgElement = &document;
        let names: Vec<&str> = root
            .get_children()
            .iter()
            .map(|child| child.get_name())
            .collect();
        assert_eq!(names, vec!["circle", "path"]);
        assert_eq!(
            root.get_attributes().get("viewBox").map(|v| v.to_string()),
            Some("0 0 400 300".to_string())
        );
    }

    #[test]
    fn bounds_cover_paths_and_circles() {
        let mut canvas = Canvas::new();
        canvas.add_path(PathData::new().m(3.0, 3.0).l(20.0, 10.0), StrokeStyle::CUT);
        canvas.add_circle(dvec2(50.0, 50.0), 5.0, StrokeStyle::REFERENCE);
        let b = canvas.bounds();
        assert_eq!(b.min, dvec2(3.0, 3.0));
        assert_eq!(b.max, dvec2(55.0, 55.0));
    }

    #[test]
    fn empty_path_fails_serialization() {
        let mut canvas = Canvas::new();
        canvas.add_path(PathData::new(), StrokeStyle::CUT);
        assert!(matches!(canvas.serialize(), Err(RenderError::EmptyPath)));
    }

    #[test]
    fn non_finite_geometry_fails_serialization() {
        let mut canvas = Canvas::new();
        canvas.add_circle(dvec2(0.0, 0.0), f64::NAN, StrokeStyle::REFERENCE);
        assert!(matches!(
            canvas.serialize(),
            Err(RenderError::NonFinite { element: "circle" })
        ));
    }
}
