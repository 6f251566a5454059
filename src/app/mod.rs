mod report;
mod runner;

use self::runner::{run_calculation, select_topology};

use self::report::{emit_report, report_summary};
use crate::config::{Args, Config};
use crate::io::setup_logging;
use clap::Parser;
use color_eyre::eyre::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

pub struct HuckelApplication {
    args: Args,
    config: Config,
}

impl HuckelApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_logging(self.args.verbose);
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompt = io::stdout();
        self.run_with(&mut input, &mut prompt)
    }

    /// Full calculation with an injectable prompt channel.
    pub fn run_with<R: BufRead, W: Write>(self, input: &mut R, prompt: &mut W) -> Result<()> {
        let topology = select_topology(&self.args, &self.config, input, prompt)?;
        let params = self.config.spectral_params(&self.args);
        info!(
            "Analysis parameters: tolerance = {:.3e}, max iterations = {}",
            params.tolerance, params.max_iterations
        );

        let spectrum = run_calculation(&topology, &params)?;
        report_summary(&spectrum);
        emit_report(&self.args, &topology, &spectrum)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config_file {
        Some(path) => {
            info!("Reading configuration from: {}", path);
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}
