// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell conformance harness binary entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use shellconform::cli::Cli;
use shellconform::diagnostic::print_error;
use shellconform::logging::init_logging;
use shellconform::report::Reporter;
use shellconform::runner::run_harness;
use shellconform::style::Palette;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(e, cli.color.unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let palette = Palette::detect(config.color);
    let mut reporter =
        Reporter::new(io::stdout().lock(), io::stderr().lock(), palette).with_diff(config.diff);

    match run_harness(&config, &mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Release the stream locks before writing the error
            drop(reporter);
            print_error(e, config.color);
            ExitCode::FAILURE
        }
    }
}
