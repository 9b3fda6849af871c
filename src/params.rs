//! The seven input parameters and their validation.
//!
//! A [`ParameterSet`] can only be built through [`ParameterSet::new`], which
//! checks every value and every cross-parameter rule. The layout engine
//! therefore never sees an illegal combination.

use crate::errors::{InvalidParameters, ParamError};
use crate::types::Length;

/// Position of the sphere center relative to the base
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCenter {
    /// Horizontal offset from the base edge (always `base_size / 2`)
    pub position: f64,
    /// Height above the base
    pub height: f64,
}

/// A rib rectangle, nominal or clamped to the sphere
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectDim {
    pub length: f64,
    pub height: f64,
}

impl RectDim {
    pub fn new(length: f64, height: f64) -> Self {
        Self { length, height }
    }
}

/// The named inputs, in the order a parameter form presents them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    BaseSize,
    PlateThick,
    SphHeight,
    SphRad,
    PlateSpan,
    RectLength,
    RectHeight,
}

impl ParamField {
    pub const ALL: [ParamField; 7] = [
        ParamField::BaseSize,
        ParamField::PlateThick,
        ParamField::SphHeight,
        ParamField::SphRad,
        ParamField::PlateSpan,
        ParamField::RectLength,
        ParamField::RectHeight,
    ];

    /// The snake_case key used in parameter files and messages
    pub fn name(self) -> &'static str {
        match self {
            ParamField::BaseSize => "base_size",
            ParamField::PlateThick => "plate_thick",
            ParamField::SphHeight => "sph_height",
            ParamField::SphRad => "sph_rad",
            ParamField::PlateSpan => "plate_span",
            ParamField::RectLength => "rect_length",
            ParamField::RectHeight => "rect_height",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            ParamField::BaseSize => "side length of the square base plate",
            ParamField::PlateThick => "material thickness of every plate",
            ParamField::SphHeight => "height of the sphere center above the base",
            ParamField::SphRad => "radius of the sphere",
            ParamField::PlateSpan => "gap between neighbouring ribs",
            ParamField::RectLength => "nominal rib length before clamping",
            ParamField::RectHeight => "nominal rib height before clamping",
        }
    }

    /// Read this field back out of a parameter set
    pub fn value(self, params: &ParameterSet) -> f64 {
        match self {
            ParamField::BaseSize => params.base_size,
            ParamField::PlateThick => params.plate_thick,
            ParamField::SphHeight => params.sph_center.height,
            ParamField::SphRad => params.sph_rad,
            ParamField::PlateSpan => params.plate_span,
            ParamField::RectLength => params.ini_rect.length,
            ParamField::RectHeight => params.ini_rect.height,
        }
    }
}

/// Raw, unvalidated inputs as collected from a user or a file
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawParams {
    pub base_size: f64,
    pub plate_thick: f64,
    pub sph_height: f64,
    pub sph_rad: f64,
    pub plate_span: f64,
    pub rect_length: f64,
    pub rect_height: f64,
}

impl RawParams {
    fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::BaseSize => self.base_size,
            ParamField::PlateThick => self.plate_thick,
            ParamField::SphHeight => self.sph_height,
            ParamField::SphRad => self.sph_rad,
            ParamField::PlateSpan => self.plate_span,
            ParamField::RectLength => self.rect_length,
            ParamField::RectHeight => self.rect_height,
        }
    }

    /// Check every rule and collect all violations.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        let mut problems = Vec::new();

        for field in ParamField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                problems.push(ParamError::NotFinite { field: field.name() });
            } else if let Err(cause) = Length::try_positive(value) {
                problems.push(ParamError::NotPositive {
                    field: field.name(),
                    value,
                    cause,
                });
            }
        }
        if !problems.is_empty() {
            return Err(InvalidParameters { problems });
        }

        let half_base = self.base_size / 2.0;
        if self.rect_length >= half_base {
            problems.push(ParamError::RectTooLong {
                rect_length: self.rect_length,
                half_base,
            });
        }
        let limit = self.sph_height + self.sph_rad;
        if self.rect_height >= limit {
            problems.push(ParamError::RectTooTall {
                rect_height: self.rect_height,
                limit,
            });
        }
        let limit = self.base_size - 2.0 * self.plate_thick;
        if self.plate_span >= limit {
            problems.push(ParamError::SpanTooWide {
                plate_span: self.plate_span,
                limit,
            });
        }
        if self.plate_thick >= half_base {
            problems.push(ParamError::PlateTooThick {
                plate_thick: self.plate_thick,
                half_base,
            });
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(InvalidParameters { problems })
        }
    }
}

/// Validated, immutable layout inputs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSet {
    pub(crate) base_size: f64,
    pub(crate) plate_thick: f64,
    pub(crate) plate_span: f64,
    pub(crate) sph_rad: f64,
    pub(crate) sph_center: SphereCenter,
    pub(crate) ini_rect: RectDim,
}

impl ParameterSet {
    /// Validate raw inputs and freeze them.
    pub fn new(raw: RawParams) -> Result<Self, InvalidParameters> {
        raw.validate()?;
        Ok(Self {
            base_size: raw.base_size,
            plate_thick: raw.plate_thick,
            plate_span: raw.plate_span,
            sph_rad: raw.sph_rad,
            sph_center: SphereCenter {
                position: raw.base_size / 2.0,
                height: raw.sph_height,
            },
            ini_rect: RectDim::new(raw.rect_length, raw.rect_height),
        })
    }

    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    pub fn plate_thick(&self) -> f64 {
        self.plate_thick
    }

    pub fn plate_span(&self) -> f64 {
        self.plate_span
    }

    pub fn sph_rad(&self) -> f64 {
        self.sph_rad
    }

    pub fn sph_center(&self) -> SphereCenter {
        self.sph_center
    }

    pub fn ini_rect(&self) -> RectDim {
        self.ini_rect
    }

    /// Back to the raw form, e.g. to tweak one field and re-validate
    pub fn to_raw(&self) -> RawParams {
        RawParams {
            base_size: self.base_size,
            plate_thick: self.plate_thick,
            sph_height: self.sph_center.height,
            sph_rad: self.sph_rad,
            plate_span: self.plate_span,
            rect_length: self.ini_rect.length,
            rect_height: self.ini_rect.height,
        }
    }
}

impl TryFrom<RawParams> for ParameterSet {
    type Error = InvalidParameters;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        ParameterSet::new(raw)
    }
}
