//! Configuration management for Hückel calculations
//!
//! A YAML file may name the topology and tune the spectral analysis;
//! command-line arguments take precedence over it.

mod args;

pub use args::Args;

use color_eyre::eyre::{Result, WrapErr};
use huckel::spectrum::{SpectralParams, DEFAULT_MAX_ITERATIONS, DEGENERACY_TOLERANCE};
use huckel::Topology;
use serde::{Deserialize, Serialize};
use std::fs;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub topology: Option<Topology>,
    #[serde(default)]
    pub analysis: AnalysisParams,
}

/// Spectral analysis parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisParams {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            tolerance: Some(DEGENERACY_TOLERANCE),
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

impl AnalysisParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.tolerance.is_none() {
            self.tolerance = defaults.tolerance;
        }
        if self.max_iterations.is_none() {
            self.max_iterations = defaults.max_iterations;
        }
        self
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = serde_yml::from_str::<Config>(content)
            .wrap_err("Failed to parse configuration file")?
            .with_defaults();
        Ok(config)
    }

    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.analysis = self.analysis.with_defaults();
        self
    }

    /// Resolve analysis parameters, command line first.
    pub fn spectral_params(&self, args: &Args) -> SpectralParams {
        let defaults = SpectralParams::default();
        SpectralParams {
            tolerance: args
                .tolerance
                .or(self.analysis.tolerance)
                .unwrap_or(defaults.tolerance),
            max_iterations: args
                .max_iterations
                .or(self.analysis.max_iterations)
                .unwrap_or(defaults.max_iterations),
        }
    }
}
