// samples-tsv: Autogenerate the samples.tsv manifest for bismark workflows.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::process::ExitCode;

use clap::Parser;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
///
/// Timestamps are only printed when `timestamps` is set.
fn init_log(log_max_level: usize, timestamps: bool) {
    let timestamp = if timestamps { stderrlog::Timestamp::Second } else { stderrlog::Timestamp::Off };
    let res = stderrlog::new()
    .module(module_path!())
    .module("samples_tsv")
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(timestamp)
    .init();
    if let Err(err) = res {
        eprintln!("warning: could not initialize logging: {}", err);
    }
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    init_log(if cli.verbose { 2 } else { 1 }, cli.verbose);

    let res = samples_tsv::resolve_options(&cli.library_type, cli.verbose)
        .and_then(|options| samples_tsv::generate_samples_tsv(&options, &samples_tsv::Layout::default()));

    match res {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
