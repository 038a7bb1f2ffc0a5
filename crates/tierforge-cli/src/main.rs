use std::process::ExitCode;

use clap::Parser;
use tierforge_cli::args::split_leading_negatives;
use tierforge_cli::logging::init_tracing;
use tierforge_cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse_from(split_leading_negatives(std::env::args_os()));
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
