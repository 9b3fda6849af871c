//! Parameter files and merging with command-line values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spherebase::{ParamField, RawParams};
use thiserror::Error;

/// A possibly incomplete set of the seven inputs.
///
/// Parameter files use the same snake_case keys as [`ParamField::name`]; any
/// key may be left out and supplied on the command line instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamValues {
    pub base_size: Option<f64>,
    pub plate_thick: Option<f64>,
    pub sph_height: Option<f64>,
    pub sph_rad: Option<f64>,
    pub plate_span: Option<f64>,
    pub rect_length: Option<f64>,
    pub rect_height: Option<f64>,
}

impl ParamValues {
    /// Load values from a TOML parameter file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Values from `other` win wherever they are set.
    pub fn overridden_by(self, other: ParamValues) -> Self {
        Self {
            base_size: other.base_size.or(self.base_size),
            plate_thick: other.plate_thick.or(self.plate_thick),
            sph_height: other.sph_height.or(self.sph_height),
            sph_rad: other.sph_rad.or(self.sph_rad),
            plate_span: other.plate_span.or(self.plate_span),
            rect_length: other.rect_length.or(self.rect_length),
            rect_height: other.rect_height.or(self.rect_height),
        }
    }

    pub fn get(&self, field: ParamField) -> Option<f64> {
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

    /// Names of the fields still unset, in form order
    pub fn missing(&self) -> Vec<&'static str> {
        ParamField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .map(ParamField::name)
            .collect()
    }

    /// All seven values, or the names of the ones missing.
    pub fn into_raw(self) -> Result<RawParams, ConfigError> {
        match (
            self.base_size,
            self.plate_thick,
            self.sph_height,
            self.sph_rad,
            self.plate_span,
            self.rect_length,
            self.rect_height,
        ) {
            (
                Some(base_size),
                Some(plate_thick),
                Some(sph_height),
                Some(sph_rad),
                Some(plate_span),
                Some(rect_length),
                Some(rect_height),
            ) => Ok(RawParams {
                base_size,
                plate_thick,
                sph_height,
                sph_rad,
                plate_span,
                rect_length,
                rect_height,
            }),
            _ => Err(ConfigError::Missing {
                fields: self.missing(),
            }),
        }
    }
}

#[derive(Debug, Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("failed to read parameter file {path:?}")]
    #[diagnostic(code(spherebase::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parameter file {path:?}")]
    #[diagnostic(
        code(spherebase::config::parse),
        help("keys are base_size, plate_thick, sph_height, sph_rad, plate_span, rect_length, rect_height")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing parameters: {}", .fields.join(", "))]
    #[diagnostic(
        code(spherebase::config::missing),
        help("pass them as --flags or set them in a --params file")
    )]
    Missing { fields: Vec<&'static str> },
}
