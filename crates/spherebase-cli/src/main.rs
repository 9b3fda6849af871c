use std::fs;
use std::io::Write;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use spherebase::{ParamField, ParameterSet};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod config;

use cli::Cli;
use config::ParamValues;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let values = match &cli.params {
        Some(path) => ParamValues::from_file(path)?,
        None => ParamValues::default(),
    }
    .overridden_by(cli.values());

    if cli.list_params {
        list_params(&values);
        return Ok(());
    }

    let params = ParameterSet::new(values.into_raw()?)?;
    for field in ParamField::ALL {
        tracing::debug!(param = field.name(), value = field.value(&params), "parameter");
    }
    let svg = spherebase::spherebase(&params)?;

    if cli.writes_to_stdout() {
        std::io::stdout()
            .write_all(svg.as_bytes())
            .into_diagnostic()
            .wrap_err("failed to write to stdout")?;
    } else {
        fs::write(&cli.output, &svg)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", cli.output.display()))?;
        tracing::info!(bytes = svg.len(), "cutting sheet written");
        println!("{}", cli.output.display());
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn list_params(values: &ParamValues) {
    for field in ParamField::ALL {
        let value = values
            .get(field)
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        println!("{:<12} {:>8}  {}", field.name(), value, field.help());
    }
}
