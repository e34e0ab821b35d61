//! `srflp` - solve a single row facility layout instance file.

mod app;

use std::process::ExitCode;

use clap::Parser;

use app::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        srflp_console::init();
    }

    match app::run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
