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
use clap::Parser;

const LONG_ABOUT: &str = r#"Creating the "samples.tsv" file needed to run bismark is tedious. It's a
necessary evil though, as that file is the basis for snakemake to generate
a list of expected output files; if the output file is missing, then
snakemake knows what commands to execute to produce that output file.

This tool aims to simplify the generation of "samples.tsv". Please remember
to visually inspect the generated file and change stuff to suit your project.
The price of not checking is heaps of wasted time on workstations/clusters
when the output files do not fit your expectations.

There are no mandatory arguments (--verbose and --library_type optional),
make sure the files/directories asterisked below are present before running.

Supported library types are bsseq, emseq and swift.

Asterisks denote which files are mandatory for autogeneration to work.
Curly brackets == replaceable/optional strings.

workflow/
|-- Snakefile
|
|-- 00_raw_reads/                  (*)
|   |-- *_R1.fastq.gz              (*)
|   +-- *_R2.fastq.gz              (*)
|
+-- data/                          (*)
    |-- {genome1}/                 (*)
    |   +-- {genome1}.fa
    |-- {genome2}/
    |   +-- {genome2}.fa
    |-- {genomeN}/
        +-- {genomeN}.fa"#;

#[derive(Parser)]
#[command(version)]
#[command(about = "Autogenerate ../config/samples.tsv from 00_raw_reads/ and data/", long_about = LONG_ABOUT)]
pub struct Cli {
    // Pre-fill the library_type column, checked by samples_tsv::resolve_options
    #[arg(short = 'l', long = "library_type", default_value = "bsseq", help = "pre-fill \"library_type\" column (bsseq, emseq or swift)")]
    pub library_type: String,

    // Verbosity
    #[arg(short = 'v', long = "verbose", default_value_t = false, help = "prints diagnostic stuff to stderr")]
    pub verbose: bool,
}
