//! Command-line interface.

pub mod args;
pub mod insult;

pub use args::Cli;
