//! Input/Output for the Hückel front end
//!
//! Logging setup, report rendering and the interactive prompt.

mod output;
mod prompt;

pub use output::{open_report, setup_logging, write_json, write_report};
pub use prompt::prompt_topology;
