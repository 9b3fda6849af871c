//! Path data builder for cut outlines.
//!
//! Outlines are built as a list of absolute commands and rendered to an SVG
//! `d` attribute only at serialization time, so tests can inspect the exact
//! vertices a renderer produced.
//!
//! # Command set
//!
//! - `M x,y`: absolute move (always the first command)
//! - `L x,y`: absolute line
//! - `A r,r 0 0,1 x,y`: circular arc, fixed "not large, clockwise" flags

use std::fmt;

use glam::dvec2;

use crate::types::Point;

/// A single absolute path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc of `radius` from the previous point to `to`
    Arc { radius: f64, to: Point },
}

impl PathCommand {
    /// The point this command ends on
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::Arc { to, .. } => to,
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::Arc { radius, to } => radius.is_finite() && to.is_finite(),
        }
    }
}

/// Builder for an outline made of absolute commands.
///
/// # Example
///
/// ```
/// use spherebase::render::path_builder::PathData;
///
/// let d = PathData::new().m(0.0, 0.0).l(0.0, 10.0).a(10.0, 10.0, 0.0).l(0.0, 0.0);
/// assert_eq!(d.to_string(), "M 0,0 L 0,10 A 10,10 0 0,1 10,0 L 0,0");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute move
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    /// Absolute line
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    /// Circular arc with the fixed sweep flag
    pub fn a(mut self, radius: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Arc { radius, to: dvec2(x, y) });
        self
    }

    /// Append a line in place (for loops that cannot use the fluent form)
    pub fn push_line(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every vertex the path visits, in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCommand::end)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the path ends where it started
    pub fn is_closed(&self) -> bool {
        match (self.commands.first(), self.commands.last()) {
            (Some(first), Some(last)) => self.len() > 1 && first.end() == last.end(),
            _ => false,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(PathCommand::is_finite)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {},{}", Mm(p.x), Mm(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {},{}", Mm(p.x), Mm(p.y))?,
                PathCommand::Arc { radius, to } => {
                    let r = Mm(radius);
                    write!(f, "A {r},{r} 0 0,1 {},{}", Mm(to.x), Mm(to.y))?
                }
            }
        }
        Ok(())
    }
}

/// Significant digits kept when printing coordinates
pub const SIG_DIGITS: usize = 6;

/// A millimetre value as it appears in the document: at most
/// [`SIG_DIGITS`] significant digits, no exponent, no trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mm(pub f64);

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        // Scientific notation rounds to the digit budget; the shortest
        // round-trip form of the result then drops the zeros.
        let rounded: f64 = format!("{:.*e}", SIG_DIGITS - 1, value)
            .parse()
            .map_err(|_| fmt::Error)?;
        write!(f, "{rounded}")
    }
}

/// Owned form of [`Mm`], for attribute values
pub fn fmt_num(value: f64) -> String {
    Mm(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(3.0), "3");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn fmt_num_rounds_to_six_significant_figures() {
        assert_eq!(fmt_num(33.823069), "33.8231");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
        assert_eq!(fmt_num(-45.4313), "-45.4313");
    }

    #[test]
    fn fmt_num_keeps_large_integers() {
        assert_eq!(fmt_num(100000.0), "100000");
        assert_eq!(fmt_num(2500000.0), "2500000");
        assert_eq!(fmt_num(1234567.0), "1234570");
    }

    #[test]
    fn fmt_num_never_uses_exponents() {
        assert_eq!(fmt_num(0.000123456789), "0.000123457");
        assert_eq!(fmt_num(54.258639865002145), "54.2586");
        assert_eq!(Mm(42.00892762258994).to_string(), "42.0089");
    }

    #[test]
    fn rectangle_path_is_closed() {
        let d = PathData::new()
            .m(3.0, 3.0)
            .l(3.0, 18.0)
            .l(23.0, 18.0)
            .l(23.0, 3.0)
            .l(3.0, 3.0);
        assert!(d.is_closed());
        assert_eq!(d.len(), 5);
        assert_eq!(d.to_string(), "M 3,3 L 3,18 L 23,18 L 23,3 L 3,3");
    }

    #[test]
    fn arc_uses_fixed_flags() {
        let d = PathData::new().m(0.0, 0.0).a(33.823069, 12.5, 7.25);
        assert_eq!(d.to_string(), "M 0,0 A 33.8231,33.8231 0 0,1 12.5,7.25");
        assert!(!d.is_closed());
    }

    #[test]
    fn push_line_appends_in_place() {
        let mut d = PathData::new().m(1.0, 1.0);
        d.push_line(dvec2(2.0, 1.0));
        let pts: Vec<Point> = d.points().collect();
        assert_eq!(pts, vec![dvec2(1.0, 1.0), dvec2(2.0, 1.0)]);
    }

    #[test]
    fn non_finite_points_are_detected() {
        let d = PathData::new().m(0.0, 0.0).l(f64::NAN, 1.0);
        assert!(!d.is_finite());
        assert!(PathData::new().m(0.0, 0.0).is_finite());
    }
}
