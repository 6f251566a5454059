//! Hückel Calculator Command-Line Interface
//!
//! Builds the coupling matrix for the chosen topology and prints its
//! degeneracy-grouped orbital energies.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::HuckelApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    HuckelApplication::from_cli()?.run()
}
