use crate::config::Args;
use crate::io::{open_report, write_json, write_report};
use color_eyre::eyre::Result;
use huckel::{Spectrum, Topology};
use std::io::Write;
use tracing::info;

pub fn report_summary(spectrum: &Spectrum) {
    info!("\nHückel calculation finished.");
    info!("\nEnergy Levels (units of β):");
    for (i, level) in spectrum.levels.iter().enumerate() {
        info!(
            "  Level {}: {:+.8}  degeneracy {}",
            i + 1,
            level.energy,
            level.degeneracy
        );
    }
}

pub fn emit_report(args: &Args, topology: &Topology, spectrum: &Spectrum) -> Result<()> {
    let mut writer = open_report(args.output.as_deref())?;
    if args.json {
        write_json(&mut writer, topology, spectrum)?;
    } else {
        write_report(&mut writer, topology, spectrum)?;
    }
    writer.flush()?;
    Ok(())
}
