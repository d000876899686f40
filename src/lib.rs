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

//! samples-tsv is a library and a command-line client for generating the
//! `samples.tsv` file that a bismark snakemake workflow expands into its list
//! of expected output files.
//!
//! Writing `samples.tsv` by hand is tedious. samples-tsv fills it in from the
//! files present in the workflow directory:
//!
//! ```text
//! workflow/
//! |-- Snakefile
//! |
//! |-- 00_raw_reads/                  (*)
//! |   |-- *_R1.fastq.gz              (*)
//! |   +-- *_R2.fastq.gz              (*)
//! |
//! +-- data/                          (*)
//!     |-- {genome1}/                 (*)
//!     |   +-- {genome1}.fa
//!     |-- {genome2}/
//!     |   +-- {genome2}.fa
//!     |-- {genomeN}/
//!         +-- {genomeN}.fa
//! ```
//!
//! Asterisks mark the mandatory files and folders. The manifest is written to
//! `../config/samples.tsv` and contains one line for every combination of a
//! read pair and a genome. Inspect the file after generating it: the
//! `short_id` and `score_min` columns are guesses.
//!
//! ## Usage
//!
//! ### Command line
//!
//! Run `samples-tsv` inside the `workflow/` directory. The optional
//! `--library_type` (`-l`) argument pre-fills the `library_type` column with
//! one of `bsseq`, `emseq` or `swift` and `--verbose` (`-v`) prints
//! timestamped progress to stderr.
//!
//! ### Rust API
//!
//! The steps of the command line client are available separately:
//!
//!   - [resolve_options] validates the command line arguments.
//!   - [discover_read_pairs](reads::discover_read_pairs) finds and pairs the reads.
//!   - [discover_genomes](genomes::discover_genomes) finds the genomes.
//!   - [derive_rows](rows::derive_rows) builds the [ManifestRow](rows::ManifestRow)s.
//!   - [write_manifest](printer::write_manifest) writes samples.tsv.
//!
//! [generate_samples_tsv] runs all of them for a [Layout].
//!

pub mod error;
pub mod genomes;
pub mod printer;
pub mod reads;
pub mod rows;

pub use error::ManifestError;

use std::path::Path;
use std::path::PathBuf;

/// Names accepted by [LibraryType]'s [FromStr](std::str::FromStr), default first.
pub const SUPPORTED_LIBRARY_TYPES: [&str; 3] = ["bsseq", "emseq", "swift"];

pub const RAW_READS_DIR: &str = "00_raw_reads";
pub const GENOME_DATA_DIR: &str = "data";
pub const SAMPLES_TSV_PATH: &str = "../config/samples.tsv";

/// Sequencing library chemistries.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LibraryType {
    #[default]
    Bsseq,
    Emseq,
    Swift,
}

impl LibraryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Bsseq => "bsseq",
            LibraryType::Emseq => "emseq",
            LibraryType::Swift => "swift",
        }
    }
}

impl std::str::FromStr for LibraryType {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bsseq" => Ok(LibraryType::Bsseq),
            "emseq" => Ok(LibraryType::Emseq),
            "swift" => Ok(LibraryType::Swift),
            _ => Err(ManifestError::InvalidArgument { value: s.to_string() }),
        }
    }
}

impl std::fmt::Display for LibraryType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated command line options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub library_type: LibraryType,
    pub verbose: bool,
}

/// Locations of the inputs and the output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    /// Folder with the `*_R1.fastq.gz` and `*_R2.fastq.gz` files.
    pub reads_dir: PathBuf,
    /// Folder with one subfolder per genome.
    pub data_dir: PathBuf,
    /// Where samples.tsv is written.
    pub out_path: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            reads_dir: PathBuf::from(RAW_READS_DIR),
            data_dir: PathBuf::from(GENOME_DATA_DIR),
            out_path: PathBuf::from(SAMPLES_TSV_PATH),
        }
    }
}

impl Layout {
    /// Resolve the default relative paths against `workflow_dir`.
    pub fn rooted_at(workflow_dir: &Path) -> Self {
        let default = Layout::default();
        Layout {
            reads_dir: workflow_dir.join(default.reads_dir),
            data_dir: workflow_dir.join(default.data_dir),
            out_path: workflow_dir.join(default.out_path),
        }
    }
}

/// Validate the command line arguments.
///
/// ## Errors
///
/// Returns [InvalidArgument](ManifestError::InvalidArgument) if
/// `library_type` is not in [SUPPORTED_LIBRARY_TYPES].
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::{resolve_options, LibraryType};
///
/// let options = resolve_options("emseq", false).unwrap();
/// assert_eq!(options.library_type, LibraryType::Emseq);
///
/// assert!(resolve_options("EMseq", false).is_err());
/// ```
///
pub fn resolve_options(
    library_type: &str,
    verbose: bool,
) -> Result<Options, ManifestError> {
    let library_type = library_type.parse::<LibraryType>()?;
    Ok(Options { library_type, verbose })
}

/// Validate the workflow layout and write samples.tsv.
///
/// Nothing is written unless all inputs pass validation. Returns the rows
/// that were written.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::{generate_samples_tsv, Layout, Options};
/// use std::fs::{create_dir_all, File};
///
/// let root = tempfile::tempdir().unwrap();
/// let workflow = root.path().join("workflow");
/// create_dir_all(workflow.join("00_raw_reads")).unwrap();
/// create_dir_all(workflow.join("data").join("hg38")).unwrap();
/// create_dir_all(root.path().join("config")).unwrap();
/// File::create(workflow.join("00_raw_reads").join("S1_L001_R1.fastq.gz")).unwrap();
/// File::create(workflow.join("00_raw_reads").join("S1_L001_R2.fastq.gz")).unwrap();
/// File::create(workflow.join("data").join("hg38").join("hg38.fa")).unwrap();
///
/// let layout = Layout::rooted_at(&workflow);
/// let rows = generate_samples_tsv(&Options::default(), &layout).unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert!(root.path().join("config").join("samples.tsv").exists());
/// ```
///
pub fn generate_samples_tsv(
    options: &Options,
    layout: &Layout,
) -> Result<Vec<rows::ManifestRow>, ManifestError> {
    let pairs = reads::discover_read_pairs(&layout.reads_dir)?;
    let genomes = genomes::discover_genomes(&layout.data_dir)?;

    let rows = rows::derive_rows(&pairs, &genomes, &options.library_type);
    printer::write_manifest(&rows, &layout.out_path)?;

    log::info!("\"samples.tsv\" file generated.");

    Ok(rows)
}

// Tests
#[cfg(test)]
mod tests {

    struct MockWorkflow {
        // Keeps the directory alive
        _root: tempfile::TempDir,
        workflow: std::path::PathBuf,
        out_path: std::path::PathBuf,
    }

    fn mock_workflow(reads: &[&str], genomes: &[(&str, Vec<&str>)]) -> MockWorkflow {
        let root = tempfile::tempdir().unwrap();
        let workflow = root.path().join("workflow");
        let reads_dir = workflow.join("00_raw_reads");
        std::fs::create_dir_all(&reads_dir).unwrap();
        std::fs::create_dir_all(root.path().join("config")).unwrap();
        reads.iter().for_each(|name| {
            std::fs::File::create(reads_dir.join(name)).unwrap();
        });
        genomes.iter().for_each(|(name, files)| {
            let genome_dir = workflow.join("data").join(name);
            std::fs::create_dir_all(&genome_dir).unwrap();
            files.iter().for_each(|file| {
                std::fs::File::create(genome_dir.join(file)).unwrap();
            });
        });
        let out_path = root.path().join("config").join("samples.tsv");
        MockWorkflow { _root: root, workflow, out_path }
    }

    #[test]
    fn library_type_from_str() {
        use super::LibraryType;
        use crate::error::ManifestError;

        assert_eq!("bsseq".parse::<LibraryType>().unwrap(), LibraryType::Bsseq);
        assert_eq!("emseq".parse::<LibraryType>().unwrap(), LibraryType::Emseq);
        assert_eq!("swift".parse::<LibraryType>().unwrap(), LibraryType::Swift);
        assert!(matches!("pbat".parse::<LibraryType>(), Err(ManifestError::InvalidArgument { .. })));
    }

    #[test]
    fn library_type_default_is_first_supported() {
        use super::{LibraryType, SUPPORTED_LIBRARY_TYPES};

        assert_eq!(LibraryType::default().to_string(), SUPPORTED_LIBRARY_TYPES[0]);
        SUPPORTED_LIBRARY_TYPES.iter().for_each(|name| {
            assert_eq!(name.parse::<LibraryType>().unwrap().as_str(), *name);
        });
    }

    #[test]
    fn resolve_options() {
        use super::{resolve_options, LibraryType, Options};

        let got = resolve_options("swift", true).unwrap();
        let expected = Options { library_type: LibraryType::Swift, verbose: true };

        assert_eq!(got, expected);
        assert!(resolve_options("", false).is_err());
    }

    #[test]
    fn layout_rooted_at() {
        use super::Layout;
        use std::path::{Path, PathBuf};

        let got = Layout::rooted_at(Path::new("/runs/workflow"));
        let expected = Layout {
            reads_dir: PathBuf::from("/runs/workflow/00_raw_reads"),
            data_dir: PathBuf::from("/runs/workflow/data"),
            out_path: PathBuf::from("/runs/workflow/../config/samples.tsv"),
        };

        assert_eq!(got, expected);
    }

    #[test]
    fn generate_samples_tsv() {
        use super::{generate_samples_tsv, Layout, Options};

        let mock = mock_workflow(
            &["ctrl_B_002_R1.fastq.gz", "ctrl_B_002_R2.fastq.gz", "ctrl_A_001_R1.fastq.gz", "ctrl_A_001_R2.fastq.gz"],
            &[("spis", vec!["spis.fa"]), ("lambda", vec!["lambda.fa"]), ("hg38", vec!["hg38.fa"])],
        );

        let rows = generate_samples_tsv(&Options::default(), &Layout::rooted_at(&mock.workflow)).unwrap();
        assert_eq!(rows.len(), 2 * 3);

        let got = std::fs::read_to_string(&mock.out_path).unwrap();
        let data: Vec<&str> = got.lines().filter(|x| !x.starts_with('#')).collect();

        let expected = vec![
            "ctrl_A_001\tctrl_A\tbsseq\tctrl_A_001_R1.fastq.gz\tctrl_A_001_R2.fastq.gz\thg38\t-0.2",
            "ctrl_A_001\tctrl_A\tbsseq\tctrl_A_001_R1.fastq.gz\tctrl_A_001_R2.fastq.gz\tlambda\t-0.2",
            "ctrl_A_001\tctrl_A\tbsseq\tctrl_A_001_R1.fastq.gz\tctrl_A_001_R2.fastq.gz\tspis\t-0.6",
            "ctrl_B_002\tctrl_B\tbsseq\tctrl_B_002_R1.fastq.gz\tctrl_B_002_R2.fastq.gz\thg38\t-0.2",
            "ctrl_B_002\tctrl_B\tbsseq\tctrl_B_002_R1.fastq.gz\tctrl_B_002_R2.fastq.gz\tlambda\t-0.2",
            "ctrl_B_002\tctrl_B\tbsseq\tctrl_B_002_R1.fastq.gz\tctrl_B_002_R2.fastq.gz\tspis\t-0.6",
        ];

        assert_eq!(data, expected);
    }

    #[test]
    fn generate_samples_tsv_is_deterministic() {
        use super::{generate_samples_tsv, Layout, Options, LibraryType};

        let mock = mock_workflow(
            &["z_R1.fastq.gz", "z_R2.fastq.gz", "a_R1.fastq.gz", "a_R2.fastq.gz", "m_1_R1.fastq.gz", "m_1_R2.fastq.gz"],
            &[("pdae", vec!["pdae.fa"]), ("45s", vec!["rdna.fa"])],
        );
        let layout = Layout::rooted_at(&mock.workflow);
        let options = Options { library_type: LibraryType::Emseq, verbose: false };

        generate_samples_tsv(&options, &layout).unwrap();
        let first = std::fs::read(&mock.out_path).unwrap();
        generate_samples_tsv(&options, &layout).unwrap();
        let second = std::fs::read(&mock.out_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generate_samples_tsv_unbalanced_writes_nothing() {
        use super::{generate_samples_tsv, Layout, Options};
        use crate::error::ManifestError;

        let mock = mock_workflow(
            &["A_R1.fastq.gz", "B_R1.fastq.gz", "A_R2.fastq.gz"],
            &[("hg38", vec!["hg38.fa"])],
        );

        let got = generate_samples_tsv(&Options::default(), &Layout::rooted_at(&mock.workflow));

        assert!(matches!(got, Err(ManifestError::UnbalancedPairs { .. })));
        assert!(!mock.out_path.exists());
    }

    #[test]
    fn generate_samples_tsv_ambiguous_fasta_writes_nothing() {
        use super::{generate_samples_tsv, Layout, Options};
        use crate::error::ManifestError;

        let mock = mock_workflow(
            &["A_R1.fastq.gz", "A_R2.fastq.gz"],
            &[("hg38", vec!["hg38.fa"]), ("spis", vec!["spis.fa", "spis_mito.fa"])],
        );

        let got = generate_samples_tsv(&Options::default(), &Layout::rooted_at(&mock.workflow));

        assert!(matches!(got, Err(ManifestError::AmbiguousFasta { .. })));
        assert!(!mock.out_path.exists());
    }

    #[test]
    fn generate_samples_tsv_missing_data_dir() {
        use super::{generate_samples_tsv, Layout, Options};
        use crate::error::ManifestError;

        let mock = mock_workflow(&["A_R1.fastq.gz", "A_R2.fastq.gz"], &[]);

        let got = generate_samples_tsv(&Options::default(), &Layout::rooted_at(&mock.workflow));

        assert!(matches!(got, Err(ManifestError::MissingDirectory { .. })));
        assert!(!mock.out_path.exists());
    }
}
