// src/bin/tsdocgen.rs
use clap::Parser;
use colored::Colorize;

use tsdocgen_core::cli::{self, Cli};
use tsdocgen_core::exit::DocgenExit;

fn main() -> DocgenExit {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                DocgenExit::Error
            } else {
                DocgenExit::Success
            };
            let _ = e.print();
            return code;
        }
    };

    match cli::handle_generate(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            DocgenExit::Error
        }
    }
}
