#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use is_terminal::IsTerminal as _;
use onlyargs::CliError;
use onlyargs_derive::OnlyArgs;
use std::{env, process::ExitCode};
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use txgen::model::constants;
use txgen::{export, generate::Generator};

/// Generate the synthetic hourly transaction table for January 2024 and write
/// it to `data/data.csv`. Repeated runs produce byte-identical output.
#[derive(Debug, OnlyArgs)]
#[footer = "Additional environment variables:"]
#[footer = "  - TERM_COLOR accepts \"always\" to override automatic terminal sensing"]
struct Args {
    /// Enable verbose output.
    /// Prints the generated CSV table to stdout in addition to writing it.
    verbose: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Argument parsing error")]
    Args(#[from] CliError),

    #[error("Generation error")]
    Generate(#[from] txgen::generate::GenerateError),

    #[error("Unable to write output table")]
    Export(#[from] txgen::export::ExportError),
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber for instrumentation.
    // Uses the `RUST_LOG` environment var for configuration. E.g. `RUST_LOG=debug cargo run`
    //
    // See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/struct.EnvFilter.html#directives
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let term_color = env::var("TERM_COLOR")
        .map(|color| color == "always")
        .unwrap_or_else(|_| std::io::stdout().is_terminal());
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(term_color))
        .with(env_filter)
        .init();

    match run(onlyargs::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            for source in err.sources().skip(1) {
                eprintln!("  Caused by: {source}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: Result<Args, CliError>) -> Result<(), Error> {
    let args = args?;

    let generator = Generator::new();
    let records = generator.generate_month(constants::DEFAULT_YEAR, constants::DEFAULT_MONTH)?;

    if args.verbose {
        println!("{}", export::to_csv_string(&records)?);
    }

    export::write_csv(constants::DEFAULT_PATH_OUTPUT, &records)?;

    println!(
        "Wrote hourly data for {year:04}-{month:02} to {path}",
        year = constants::DEFAULT_YEAR,
        month = constants::DEFAULT_MONTH,
        path = constants::DEFAULT_PATH_OUTPUT,
    );

    Ok(())
}
