// src/cli/mod.rs
//! Command-line surface.

pub mod args;
pub mod handler;

pub use args::Cli;
pub use handler::handle_generate;
