//! Command-line argument parsing for Hückel calculations

use clap::Parser;

/// Hückel molecular-orbital energy levels of conjugated carbon frameworks
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// System to solve: 1 linear polyene, 2 cyclic polyene, 3 platonic solids, 4 Buckminsterfullerene
    #[arg(long, allow_negative_numbers = true)]
    pub category: Option<i64>,

    /// Number of carbon atoms (categories 1 and 2)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub atoms: Option<i64>,

    /// Platonic solid (category 3): tetrahedron, cube, octahedron, dodecahedron, icosahedron
    #[arg(long)]
    pub solid: Option<String>,

    /// Override degeneracy tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Override eigensolver iteration cap (0 for unbounded)
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit the levels as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
