//! CLI command implementations

mod config;
mod context;
mod generate;
mod progress;
pub mod style;

pub use config::run_print_config;
pub use generate::{GenerateOptions, run_generate};
