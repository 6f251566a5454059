//! Output formatting and logging utilities

use color_eyre::eyre::{Result, WrapErr};
use huckel::{Spectrum, Topology};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Layer, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // HH:MM:SS
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Route log records to stderr so stdout carries only prompts and the report.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let stderr_layer = layer()
        .with_writer(io::stderr)
        .with_timer(SecondPrecisionTimer)
        .with_ansi(false)
        .with_filter(level);
    if Registry::default().with(stderr_layer).try_init().is_err() {
        eprintln!("Logging was already initialized");
    }
}

/// Report destination: a freshly created file or stdout.
pub fn open_report(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Report will be written to: {}", path);
            let file = File::create(path)
                .wrap_err_with(|| format!("Could not create output file: {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Round to the printed precision and fold −0 into +0, so a zero level whose
/// representative came out as −1e-16 does not print as `-0.000000`.
fn display_energy(energy: f64) -> f64 {
    (energy * 1e6).round() / 1e6 + 0.0
}

/// Plain-text level table followed by the one-line summary.
pub fn write_report<W: Write>(writer: &mut W, topology: &Topology, spectrum: &Spectrum) -> Result<()> {
    writeln!(writer, "Hückel levels for {} ({} orbitals)", topology, spectrum.dimension)?;
    writeln!(writer, "  {:>5}  {:>12}  {:>10}", "Level", "Energy/β", "Degeneracy")?;
    for (i, level) in spectrum.levels.iter().enumerate() {
        writeln!(
            writer,
            "  {:>5}  {:>12.6}  {:>10}",
            i + 1,
            display_energy(level.energy),
            level.degeneracy
        )?;
    }

    let energies = spectrum
        .energies()
        .iter()
        .map(|&e| format!("{:.6}", display_energy(e)))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        writer,
        "The energies of the orbitals are: [{}] with degeneracies: {:?}",
        energies,
        spectrum.degeneracies()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    topology: &'a Topology,
    #[serde(flatten)]
    spectrum: &'a Spectrum,
}

pub fn write_json<W: Write>(writer: &mut W, topology: &Topology, spectrum: &Spectrum) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonReport { topology, spectrum })
        .wrap_err("Failed to serialize spectrum")?;
    writeln!(writer)?;
    Ok(())
}
