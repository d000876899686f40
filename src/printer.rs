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

//! Printer for [ManifestRow] records in the samples.tsv format.
//!
//! The output has a block of `##` comment lines documenting the columns, a
//! `#` prefixed header line and one tab separated line per row:
//!
//! ```text
//! ## sample_id: do not alter from autodetected defaults; will contain everything
//! ...
//! ##
//! #sample_id	short_id	library_type	R1_file	R2_file	mapped_genome	score_min
//! liver_S1	liver	bsseq	liver_S1_R1.fastq.gz	liver_S1_R2.fastq.gz	spis	-0.6
//! ```
//!

use crate::SUPPORTED_LIBRARY_TYPES;
use crate::error::ManifestError;
use crate::rows::ManifestRow;

use std::io::Write;
use std::path::Path;

pub const COLUMNS: [&str; 7] = ["sample_id", "short_id", "library_type", "R1_file", "R2_file", "mapped_genome", "score_min"];

/// Format the `##` comment block and the `#` column header.
pub fn format_header() -> String {
    let library_types = SUPPORTED_LIBRARY_TYPES.iter().map(|x| format!("'{}'", x)).collect::<Vec<String>>().join(", ");

    let mut header = String::new();
    header += "## sample_id: do not alter from autodetected defaults; will contain everything\n";
    header += "##            up to _R1/_R2\n";
    header += "## short_id: user-editable, default rule is sample_id.split('_')[:-1].\n";
    header += "##           used in the final rule to create symbolic links in \"05_renamed_covs/\"\n";
    header += &format!("## library_type: one of [{}]\n", library_types);
    header += "## R1_file: do not alter from autodetected defaults\n";
    header += "## R2_file: do not alter from autodetected defaults\n";
    header += "## mapped_genome: by default, prefills all folders in \"data/\"; reduce to taste\n";
    header += "## score_min: `bismark` default is \"--score_min L,0,-0.2\". autogenerator tries\n";
    header += "##            to guess best value from genome name, but change to taste.\n";
    header += "##            each genome can only have ONE score_min\n";
    header += "##\n";
    header += "#";
    header += &COLUMNS.join("\t");
    header += "\n";
    header
}

/// Format a single row as a tab separated line.
pub fn format_row(row: &ManifestRow) -> String {
    let fields: [&str; 7] = [
        row.sample_id.as_str(),
        row.short_id.as_str(),
        row.library_type.as_str(),
        row.r1_filename.as_str(),
        row.r2_filename.as_str(),
        row.genome_name.as_str(),
        row.score_min.as_str(),
    ];
    let mut formatted = fields.join("\t");
    formatted += "\n";
    formatted
}

/// Format the full manifest into `conn`.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::LibraryType;
/// use samples_tsv::printer::format_manifest;
/// use samples_tsv::rows::ManifestRow;
///
/// let rows = vec![
///     ManifestRow {
///         sample_id: "liver_S1".to_string(),
///         short_id: "liver".to_string(),
///         library_type: LibraryType::Bsseq,
///         r1_filename: "liver_S1_R1.fastq.gz".to_string(),
///         r2_filename: "liver_S1_R2.fastq.gz".to_string(),
///         genome_name: "spis".to_string(),
///         score_min: "-0.6".to_string(),
///     },
/// ];
///
/// let mut output: Vec<u8> = Vec::new();
/// format_manifest(&rows, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.ends_with("#sample_id\tshort_id\tlibrary_type\tR1_file\tR2_file\tmapped_genome\tscore_min\nliver_S1\tliver\tbsseq\tliver_S1_R1.fastq.gz\tliver_S1_R2.fastq.gz\tspis\t-0.6\n"));
/// ```
///
pub fn format_manifest<W: Write>(
    rows: &[ManifestRow],
    conn: &mut W,
) -> Result<(), std::io::Error> {
    conn.write_all(format_header().as_bytes())?;
    for row in rows {
        conn.write_all(format_row(row).as_bytes())?;
    }
    conn.flush()?;
    Ok(())
}

/// Write the manifest to `out_path`, replacing any existing file.
///
/// The contents are formatted in memory before the file is opened. The parent
/// directory of `out_path` must exist.
///
pub fn write_manifest(
    rows: &[ManifestRow],
    out_path: &Path,
) -> Result<(), ManifestError> {
    let mut bytes: Vec<u8> = Vec::new();
    format_manifest(rows, &mut bytes).map_err(|source| ManifestError::Io { path: out_path.to_path_buf(), source })?;
    std::fs::write(out_path, &bytes).map_err(|source| ManifestError::Io { path: out_path.to_path_buf(), source })?;
    Ok(())
}
