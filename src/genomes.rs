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

//! Discovery of the reference genomes reads are mapped against.
//!
//! Each subfolder of the genome data directory is one genome and must
//! contain exactly one uncompressed FASTA file (`*.fa`).

use crate::error::format_list;
use crate::error::ManifestError;
use crate::reads::glob_file_names;

use std::path::Path;
use std::path::PathBuf;

const FASTA_PATTERN: &str = "*.fa";

/// Genome name substrings that get `score_min` -0.6.
pub const RELAXED_SCORE_MIN_GENOMES: [&str; 4] = ["45s", "spis", "pdae", "aiptasia"];

pub const RELAXED_SCORE_MIN: &str = "-0.6";
pub const DEFAULT_SCORE_MIN: &str = "-0.2";

/// A genome subfolder and the FASTA file inside it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenomeTarget {
    /// Name of the subfolder.
    pub name: String,
    pub fasta_path: PathBuf,
}

/// Guess the bismark `--score_min` slope for a genome.
///
/// Returns "-0.6" if `genome_name` contains any of
/// [RELAXED_SCORE_MIN_GENOMES], otherwise the bismark default "-0.2". Matching
/// is case-sensitive.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::genomes::score_min;
///
/// assert_eq!(score_min("spis_genome_v2"), "-0.6");
/// assert_eq!(score_min("human_hg38"), "-0.2");
/// ```
///
pub fn score_min(genome_name: &str) -> &'static str {
    if RELAXED_SCORE_MIN_GENOMES.iter().any(|token| genome_name.contains(token)) {
        RELAXED_SCORE_MIN
    } else {
        DEFAULT_SCORE_MIN
    }
}

/// Lists the immediate subdirectories of `dir` sorted by name.
fn list_subdirectories(
    dir: &Path,
) -> Result<Vec<PathBuf>, ManifestError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ManifestError::Io { path: dir.to_path_buf(), source })?;

    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| ManifestError::Io { path: dir.to_path_buf(), source })?.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(subdirs)
}

/// Finds the single FASTA file in a genome subfolder.
fn find_fasta(
    genome_dir: &Path,
) -> Result<PathBuf, ManifestError> {
    let mut fasta_files = glob_file_names(genome_dir, FASTA_PATTERN)?;
    match fasta_files.len() {
        0 => Err(ManifestError::NoFastaFound { dir: genome_dir.to_path_buf() }),
        1 => Ok(genome_dir.join(&fasta_files[0])),
        _ => {
            fasta_files.sort();
            Err(ManifestError::AmbiguousFasta { dir: genome_dir.to_path_buf(), fasta_files })
        },
    }
}

/// Find the genomes in `data_dir`.
///
/// Returns one [GenomeTarget] per subfolder, sorted by subfolder name.
///
/// ## Errors
///
/// - [MissingDirectory](ManifestError::MissingDirectory) if `data_dir` does not exist.
/// - [NoGenomesFound](ManifestError::NoGenomesFound) if `data_dir` has no subfolders.
/// - [NoFastaFound](ManifestError::NoFastaFound) if a subfolder has no `*.fa` file.
/// - [AmbiguousFasta](ManifestError::AmbiguousFasta) if a subfolder has several `*.fa` files.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::genomes::discover_genomes;
/// use std::fs::{create_dir, File};
///
/// let dir = tempfile::tempdir().unwrap();
/// create_dir(dir.path().join("spis")).unwrap();
/// File::create(dir.path().join("spis").join("spis.fa")).unwrap();
///
/// let genomes = discover_genomes(dir.path()).unwrap();
///
/// assert_eq!(genomes.len(), 1);
/// assert_eq!(genomes[0].name, "spis");
/// assert!(genomes[0].fasta_path.ends_with("spis/spis.fa"));
/// ```
///
pub fn discover_genomes(
    data_dir: &Path,
) -> Result<Vec<GenomeTarget>, ManifestError> {
    if !data_dir.is_dir() {
        return Err(ManifestError::MissingDirectory { path: data_dir.to_path_buf(), contents: "genome data" });
    }

    let subdirs = list_subdirectories(data_dir)?;
    if subdirs.is_empty() {
        return Err(ManifestError::NoGenomesFound { dir: data_dir.to_path_buf() });
    }

    let names: Vec<String> = subdirs.iter().filter_map(|x| x.file_name()).map(|x| x.to_string_lossy().to_string()).collect();
    log::info!("Subfolders in \"{}/\": {}", data_dir.display(), format_list(&names));

    let mut genomes: Vec<GenomeTarget> = Vec::with_capacity(subdirs.len());
    for (subdir, name) in subdirs.iter().zip(names) {
        let fasta_path = find_fasta(subdir)?;
        log::debug!("Genome {}: {}", name, fasta_path.display());
        genomes.push(GenomeTarget { name, fasta_path });
    }

    Ok(genomes)
}
