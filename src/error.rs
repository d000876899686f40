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

//! Errors raised while validating the workflow layout or writing samples.tsv.
//!
//! Every variant is a failed precondition; none of them are recoverable and
//! the manifest is never written once one has been returned.

use std::path::PathBuf;

/// Joins file or directory names for error messages as `[a, b, c]`.
pub(crate) fn format_list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

#[non_exhaustive]
#[derive(Debug)]
pub enum ManifestError {
    /// The library type is not one of [SUPPORTED_LIBRARY_TYPES](crate::SUPPORTED_LIBRARY_TYPES).
    InvalidArgument { value: String },
    /// A required input directory is absent.
    MissingDirectory { path: PathBuf, contents: &'static str },
    /// No files match `pattern` in `dir`.
    NoReadsFound { pattern: &'static str, dir: PathBuf },
    /// Different number of R1 and R2 files.
    UnbalancedPairs { r1_files: Vec<String>, r2_files: Vec<String> },
    /// The sorted R1 and R2 files do not share prefixes position by position.
    UnpairedReads { r1_files: Vec<String>, r2_files: Vec<String> },
    /// The genome data directory has no subdirectories.
    NoGenomesFound { dir: PathBuf },
    /// A genome subdirectory has no `*.fa` file.
    NoFastaFound { dir: PathBuf },
    /// A genome subdirectory has more than one `*.fa` file.
    AmbiguousFasta { dir: PathBuf, fasta_files: Vec<String> },
    /// A glob pattern could not be compiled.
    Pattern(glob::PatternError),
    /// Listing inputs or writing the manifest failed.
    Io { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ManifestError::InvalidArgument { value } => write!(
                f,
                "provided library type \"{}\" is not in {}",
                value,
                format_list(&crate::SUPPORTED_LIBRARY_TYPES.iter().map(|x| x.to_string()).collect::<Vec<String>>())
            ),
            ManifestError::MissingDirectory { path, contents } => write!(
                f,
                "the \"{}/\" folder (contains {}) is not present!",
                path.display(), contents
            ),
            ManifestError::NoReadsFound { pattern, dir } => write!(
                f,
                "there are no files with pattern {} in \"{}/\"!",
                pattern, dir.display()
            ),
            ManifestError::UnbalancedPairs { r1_files, r2_files } => write!(
                f,
                "number of R1 files ({}: {}) != R2 files ({}: {})!",
                r1_files.len(), format_list(r1_files),
                r2_files.len(), format_list(r2_files)
            ),
            ManifestError::UnpairedReads { r1_files, r2_files } => write!(
                f,
                "files are not properly paired! R1 files: {}, R2 files: {}",
                format_list(r1_files), format_list(r2_files)
            ),
            ManifestError::NoGenomesFound { dir } => write!(
                f,
                "there are no subfolders in \"{}/\" (at least one required)!",
                dir.display()
            ),
            ManifestError::NoFastaFound { dir } => write!(
                f,
                "there must be at least a single uncompressed FASTA (*.fa) file in genome subfolder \"{}/\"!",
                dir.display()
            ),
            ManifestError::AmbiguousFasta { dir, fasta_files } => write!(
                f,
                "there must be exactly a single uncompressed FASTA (*.fa) file in genome subfolder \"{}/\", found {}: {}",
                dir.display(), fasta_files.len(), format_list(fasta_files)
            ),
            ManifestError::Pattern(err) => write!(f, "invalid glob pattern: {}", err),
            ManifestError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Pattern(err) => Some(err),
            ManifestError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glob::PatternError> for ManifestError {
    fn from(err: glob::PatternError) -> Self {
        ManifestError::Pattern(err)
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn display_invalid_argument() {
        use super::ManifestError;

        let err = ManifestError::InvalidArgument { value: "wgbs".to_string() };
        let expected = "provided library type \"wgbs\" is not in [bsseq, emseq, swift]";

        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn display_unbalanced_pairs() {
        use super::ManifestError;

        let err = ManifestError::UnbalancedPairs {
            r1_files: vec!["A_R1.fastq.gz".to_string(), "B_R1.fastq.gz".to_string()],
            r2_files: vec!["A_R2.fastq.gz".to_string()],
        };
        let expected = "number of R1 files (2: [A_R1.fastq.gz, B_R1.fastq.gz]) != R2 files (1: [A_R2.fastq.gz])!";

        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn display_missing_directory() {
        use super::ManifestError;
        use std::path::PathBuf;

        let err = ManifestError::MissingDirectory { path: PathBuf::from("00_raw_reads"), contents: "raw FASTQ reads" };
        let expected = "the \"00_raw_reads/\" folder (contains raw FASTQ reads) is not present!";

        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn io_error_has_source() {
        use super::ManifestError;
        use std::error::Error;
        use std::path::PathBuf;

        let err = ManifestError::Io {
            path: PathBuf::from("../config/samples.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "../config/samples.tsv: No such file or directory");
    }
}
