//! Error types with rich diagnostics using miette
//!
//! Parameter errors name the offending input and carry help text, so a
//! caller collecting parameters can show every violated rule at once.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Parameter Errors
// ============================================================================

/// A single violated parameter rule
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{field} is not a finite number")]
    #[diagnostic(code(spherebase::params::not_finite))]
    NotFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    #[diagnostic(code(spherebase::params::not_positive))]
    NotPositive {
        field: &'static str,
        value: f64,
        #[source]
        cause: NumericError,
    },

    #[error("rect_length must be lower than base_size / 2.")]
    #[diagnostic(
        code(spherebase::params::rect_too_long),
        help("rect_length is {rect_length}, base_size / 2 is {half_base}")
    )]
    RectTooLong { rect_length: f64, half_base: f64 },

    #[error("rect_height must be lower than sph_height + sph_rad.")]
    #[diagnostic(
        code(spherebase::params::rect_too_tall),
        help("rect_height is {rect_height}, sph_height + sph_rad is {limit}")
    )]
    RectTooTall { rect_height: f64, limit: f64 },

    #[error("plate_span must be lower than base_size - 2 * plate_thick.")]
    #[diagnostic(
        code(spherebase::params::span_too_wide),
        help("plate_span is {plate_span}, base_size - 2 * plate_thick is {limit}")
    )]
    SpanTooWide { plate_span: f64, limit: f64 },

    #[error("plate_thick must be lower than base_size / 2.")]
    #[diagnostic(
        code(spherebase::params::plate_too_thick),
        help("plate_thick is {plate_thick}, base_size / 2 is {half_base}")
    )]
    PlateTooThick { plate_thick: f64, half_base: f64 },
}

/// Every rule a parameter set violates, reported together
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("invalid parameters: {} rule(s) violated", .problems.len())]
#[diagnostic(
    code(spherebase::params::invalid),
    help("please correct the values and try again")
)]
pub struct InvalidParameters {
    #[related]
    pub problems: Vec<ParamError>,
}

impl InvalidParameters {
    /// The combined message, one rule per line
    pub fn message(&self) -> String {
        self.problems
            .iter()
            .map(|p| format!("{p}\n"))
            .collect()
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while serializing the drawing
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("path has no commands")]
    #[diagnostic(code(spherebase::render::empty_path))]
    EmptyPath,

    #[error("non-finite coordinate in {element}")]
    #[diagnostic(
        code(spherebase::render::non_finite),
        help("the layout produced NaN or infinity; check the parameter set")
    )]
    NonFinite { element: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_joins_problems_by_line() {
        let err = InvalidParameters {
            problems: vec![
                ParamError::RectTooLong { rect_length: 60.0, half_base: 50.0 },
                ParamError::PlateTooThick { plate_thick: 60.0, half_base: 50.0 },
            ],
        };
        assert_eq!(
            err.message(),
            "rect_length must be lower than base_size / 2.\nplate_thick must be lower than base_size / 2.\n"
        );
        assert_eq!(err.to_string(), "invalid parameters: 2 rule(s) violated");
    }

    #[test]
    fn not_positive_names_field() {
        let err = ParamError::NotPositive {
            field: "sph_rad",
            value: -2.0,
            cause: NumericError::Negative,
        };
        assert_eq!(err.to_string(), "sph_rad must be positive, got -2");
    }
}
