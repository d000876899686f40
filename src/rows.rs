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
use crate::LibraryType;
use crate::genomes::GenomeTarget;
use crate::genomes::score_min;
use crate::reads::ReadPair;

/// A single line in samples.tsv.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManifestRow {
    pub sample_id: String,
    pub short_id: String,
    pub library_type: LibraryType,
    pub r1_filename: String,
    pub r2_filename: String,
    pub genome_name: String,
    pub score_min: String,
}

/// Default short id: `sample_id` without its last `_` delimited field.
///
/// ## Usage
///
/// ```rust
/// use samples_tsv::rows::short_id;
///
/// assert_eq!(short_id("sample_A_B_001"), "sample_A_B");
/// assert_eq!(short_id("sampleX"), "sampleX");
/// ```
///
pub fn short_id(sample_id: &str) -> &str {
    match sample_id.rsplit_once('_') {
        Some((head, _)) => head,
        None => sample_id,
    }
}

/// Cross every read pair with every genome.
///
/// Rows for one sample are contiguous and follow the order of `genomes`;
/// samples follow the order of `pairs`.
///
pub fn derive_rows(
    pairs: &[ReadPair],
    genomes: &[GenomeTarget],
    library_type: &LibraryType,
) -> Vec<ManifestRow> {
    let mut rows: Vec<ManifestRow> = Vec::with_capacity(pairs.len() * genomes.len());
    for pair in pairs {
        for genome in genomes {
            rows.push(ManifestRow {
                sample_id: pair.sample_id.clone(),
                short_id: short_id(&pair.sample_id).to_string(),
                library_type: library_type.clone(),
                r1_filename: pair.r1_filename.clone(),
                r2_filename: pair.r2_filename.clone(),
                genome_name: genome.name.clone(),
                score_min: score_min(&genome.name).to_string(),
            });
        }
    }
    rows
}
