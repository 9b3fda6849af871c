use clap::{ArgAction, Parser};
use spherebase::render::defaults::OUTPUT_FILE;
use std::path::PathBuf;

use crate::config::ParamValues;

#[derive(Parser, Debug)]
#[command(name = "spherebase")]
#[command(version, about = "Lay out a laser-cut hemisphere base as an SVG cutting sheet")]
pub struct Cli {
    /// Side length of the square base plate (mm)
    #[arg(long)]
    pub base_size: Option<f64>,

    /// Material thickness of every plate (mm)
    #[arg(long)]
    pub plate_thick: Option<f64>,

    /// Height of the sphere center above the base (mm)
    #[arg(long)]
    pub sph_height: Option<f64>,

    /// Radius of the sphere (mm)
    #[arg(long)]
    pub sph_rad: Option<f64>,

    /// Gap between neighbouring ribs (mm)
    #[arg(long)]
    pub plate_span: Option<f64>,

    /// Nominal rib length before clamping (mm)
    #[arg(long)]
    pub rect_length: Option<f64>,

    /// Nominal rib height before clamping (mm)
    #[arg(long)]
    pub rect_height: Option<f64>,

    /// TOML file with any of the parameters; flags take precedence
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Where to write the SVG ("-" for stdout)
    #[arg(short, long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// List the parameters and their current values, then exit
    #[arg(long)]
    pub list_params: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The parameters given as flags
    pub fn values(&self) -> ParamValues {
        ParamValues {
            base_size: self.base_size,
            plate_thick: self.plate_thick,
            sph_height: self.sph_height,
            sph_rad: self.sph_rad,
            plate_span: self.plate_span,
            rect_length: self.rect_length,
            rect_height: self.rect_height,
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
