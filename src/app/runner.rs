use crate::config::{Args, Config};
use crate::io::prompt_topology;
use color_eyre::eyre::{Result, WrapErr};
use huckel::{solve, Category, HuckelError, SpectralParams, Spectrum, Topology};
use std::io::{BufRead, Write};
use tracing::info;

/// Topology from the command line, then the config file, then the prompt.
pub fn select_topology<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    input: &mut R,
    prompt: &mut W,
) -> Result<Topology> {
    if let Some(topology) = topology_from_args(args)? {
        info!("Topology from command line: {}", topology);
        return Ok(topology);
    }
    if let Some(topology) = config.topology {
        info!("Topology from configuration: {}", topology);
        return Ok(topology);
    }
    prompt_topology(input, prompt)
}

pub fn topology_from_args(args: &Args) -> Result<Option<Topology>, HuckelError> {
    let Some(index) = args.category else {
        return Ok(None);
    };
    let category = Category::from_index(index)?;
    Topology::from_category(category, args.atoms, args.solid.as_deref()).map(Some)
}

pub fn run_calculation(topology: &Topology, params: &SpectralParams) -> Result<Spectrum> {
    solve(topology, params).wrap_err_with(|| format!("Hückel calculation for {} failed", topology))
}
