use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use spherebase::{ParameterSet, RawParams};
use std::fs;

/// Named parameter sets rendered by `cargo xtask samples`
const PRESETS: &[(&str, RawParams)] = &[
    (
        "reference",
        RawParams {
            base_size: 100.0,
            plate_thick: 3.0,
            sph_height: 40.0,
            sph_rad: 35.0,
            plate_span: 15.0,
            rect_length: 20.0,
            rect_height: 15.0,
        },
    ),
    (
        "center-rib",
        RawParams {
            base_size: 100.0,
            plate_thick: 3.0,
            sph_height: 40.0,
            sph_rad: 35.0,
            plate_span: 20.0,
            rect_length: 20.0,
            rect_height: 15.0,
        },
    ),
    (
        "arched",
        RawParams {
            base_size: 100.0,
            plate_thick: 3.0,
            sph_height: 40.0,
            sph_rad: 55.0,
            plate_span: 15.0,
            rect_length: 20.0,
            rect_height: 15.0,
        },
    ),
    (
        "wide",
        RawParams {
            base_size: 160.0,
            plate_thick: 4.0,
            sph_height: 60.0,
            sph_rad: 75.0,
            plate_span: 12.0,
            rect_length: 30.0,
            rect_height: 25.0,
        },
    ),
    (
        "bare",
        RawParams {
            base_size: 20.0,
            plate_thick: 1.0,
            sph_height: 1000.0,
            sph_rad: 997.5,
            plate_span: 8.0,
            rect_length: 5.0,
            rect_height: 10.0,
        },
    ),
];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  samples [DIR]   Render every preset to DIR (default target/samples)");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "samples" => {
            let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
            let out_dir = args
                .get(2)
                .map(Utf8PathBuf::from)
                .unwrap_or_else(|| manifest_dir.join("../target/samples"));
            if let Err(e) = samples(&out_dir) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn samples(out_dir: &Utf8Path) -> Result<(), String> {
    fs::create_dir_all(out_dir).map_err(|e| format!("Failed to create {out_dir}: {e}"))?;

    let results: Vec<(&str, Result<Utf8PathBuf, String>)> = PRESETS
        .par_iter()
        .map(|(name, raw)| (*name, render_preset(out_dir, name, *raw)))
        .collect();

    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(path) => eprintln!("{name:<12} {path}"),
            Err(e) => {
                failed += 1;
                eprintln!("{name:<12} FAILED: {e}");
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} presets failed", results.len()));
    }
    Ok(())
}

fn render_preset(out_dir: &Utf8Path, name: &str, raw: RawParams) -> Result<Utf8PathBuf, String> {
    let params = ParameterSet::new(raw).map_err(|e| e.message())?;
    let svg = spherebase::spherebase(&params).map_err(|e| e.to_string())?;
    let path = out_dir.join(format!("{name}.svg"));
    fs::write(&path, svg).map_err(|e| format!("Failed to write {path}: {e}"))?;
    Ok(path)
}
