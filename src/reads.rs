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

//! Discovery and pairing of the raw paired-end reads.
//!
//! Reads are expected directly inside the raw reads directory as
//! `{sample_id}_R1.fastq.gz` and `{sample_id}_R2.fastq.gz`. Subdirectories are
//! not searched.

use crate::error::format_list;
use crate::error::ManifestError;

use std::path::Path;
use std::path::PathBuf;

pub const R1_SUFFIX: &str = "_R1.fastq.gz";
pub const R2_SUFFIX: &str = "_R2.fastq.gz";

const R1_PATTERN: &str = "*_R1.fastq.gz";
const R2_PATTERN: &str = "*_R2.fastq.gz";

/// Forward and reverse reads of a single sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadPair {
    /// R1 file name without `_R1.fastq.gz`.
    pub sample_id: String,
    pub r1_filename: String,
    pub r2_filename: String,
}

impl ReadPair {
    /// Builds the pair belonging to an R1 file name.
    ///
    /// Returns None if `r1_filename` does not end in `_R1.fastq.gz`.
    pub fn from_r1(r1_filename: &str) -> Option<Self> {
        let sample_id = r1_filename.strip_suffix(R1_SUFFIX)?;
        Some(ReadPair {
            sample_id: sample_id.to_string(),
            r1_filename: r1_filename.to_string(),
            r2_filename: sample_id.to_string() + R2_SUFFIX,
        })
    }
}

/// Strips `suffix` from `name` if present.
fn strip_read_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Lists the names of the files matching `pattern` directly inside `dir`.
///
/// The directory part is escaped so that only `pattern` is interpreted as a
/// glob.
pub(crate) fn glob_file_names(
    dir: &Path,
    pattern: &str,
) -> Result<Vec<String>, ManifestError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full_pattern = PathBuf::from(escaped).join(pattern);

    let mut names: Vec<String> = Vec::new();
    for entry in glob::glob(&full_pattern.to_string_lossy())? {
        let path = entry.map_err(|err| ManifestError::Io {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().to_string());
        }
    }
    Ok(names)
}

/// Sorts read file names by their name without the read suffix.
fn sort_by_prefix(names: &mut [String], suffix: &str) {
    names.sort_by(|a, b| strip_read_suffix(a, suffix).cmp(strip_read_suffix(b, suffix)));
}

/// Checks that the sorted R1 and R2 files share prefixes position by position.
pub fn check_pairing(
    r1_files: &[String],
    r2_files: &[String],
) -> Result<(), ManifestError> {
    if r1_files.len() != r2_files.len() {
        return Err(ManifestError::UnbalancedPairs { r1_files: r1_files.to_vec(), r2_files: r2_files.to_vec() });
    }

    let paired = r1_files.iter().zip(r2_files.iter()).all(|(r1, r2)| {
        r2.strip_suffix(R2_SUFFIX).is_some_and(|prefix| prefix.to_string() + R1_SUFFIX == *r1)
    });

    if paired {
        Ok(())
    } else {
        Err(ManifestError::UnpairedReads { r1_files: r1_files.to_vec(), r2_files: r2_files.to_vec() })
    }
}

/// Find and pair the reads in `reads_dir`.
///
/// Returns the pairs sorted by sample id.
///
/// ## Errors
///
/// - [MissingDirectory](ManifestError::MissingDirectory) if `reads_dir` does not exist.
/// - [NoReadsFound](ManifestError::NoReadsFound) if there are no R1 or no R2 files.
/// - [UnbalancedPairs](ManifestError::UnbalancedPairs) if the number of R1 and R2 files differ.
/// - [UnpairedReads](ManifestError::UnpairedReads) if an R1 file has no R2 file with the same prefix.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::reads::discover_read_pairs;
/// use std::fs::File;
///
/// let dir = tempfile::tempdir().unwrap();
/// File::create(dir.path().join("liver_S1_R1.fastq.gz")).unwrap();
/// File::create(dir.path().join("liver_S1_R2.fastq.gz")).unwrap();
///
/// let pairs = discover_read_pairs(dir.path()).unwrap();
///
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].sample_id, "liver_S1");
/// assert_eq!(pairs[0].r2_filename, "liver_S1_R2.fastq.gz");
/// ```
///
pub fn discover_read_pairs(
    reads_dir: &Path,
) -> Result<Vec<ReadPair>, ManifestError> {
    if !reads_dir.is_dir() {
        return Err(ManifestError::MissingDirectory { path: reads_dir.to_path_buf(), contents: "raw FASTQ reads" });
    }

    let mut r1_files = glob_file_names(reads_dir, R1_PATTERN)?;
    if r1_files.is_empty() {
        return Err(ManifestError::NoReadsFound { pattern: R1_PATTERN, dir: reads_dir.to_path_buf() });
    }
    let mut r2_files = glob_file_names(reads_dir, R2_PATTERN)?;
    if r2_files.is_empty() {
        return Err(ManifestError::NoReadsFound { pattern: R2_PATTERN, dir: reads_dir.to_path_buf() });
    }

    if r1_files.len() != r2_files.len() {
        return Err(ManifestError::UnbalancedPairs { r1_files, r2_files });
    }

    sort_by_prefix(&mut r1_files, R1_SUFFIX);
    sort_by_prefix(&mut r2_files, R2_SUFFIX);

    log::info!("R1 files: {}", format_list(&r1_files));
    log::info!("R2 files: {}", format_list(&r2_files));

    check_pairing(&r1_files, &r2_files)?;

    // Every R1 name came from R1_PATTERN so from_r1 cannot fail here.
    Ok(r1_files.iter().filter_map(|r1| ReadPair::from_r1(r1)).collect())
}
