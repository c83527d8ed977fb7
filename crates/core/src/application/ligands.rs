// Ligand Extraction Use Case
// Single forward pass over a SIENA-produced PDB file

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{LigandRecord, HET_RECORD_PREFIX};

/// Ligand extraction errors
#[derive(Error, Debug)]
pub enum LigandError {
    #[error("Failed to read structure file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract ligand identifiers from a SIENA-produced PDB file.
///
/// Returns one `NAME_CHAIN_RESIDUE` identifier per well-formed `HET` record,
/// in file order. No deduplication is applied. Truncated `HET` records are
/// skipped with a warning. Chain fields that carry digits are repaired by
/// `LigandRecord::split_chain_digits` before the identifier is composed.
///
/// # Errors
/// - LigandError::FileAccess if the file cannot be opened or read
pub fn extract_ligands(path: impl AsRef<Path>) -> Result<Vec<String>, LigandError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LigandError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    scan_ligands(BufReader::new(file)).map_err(|source| LigandError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan any buffered reader for `HET` records.
///
/// Split out from the path-based entry point so the pass can be unit tested
/// over in-memory buffers.
pub fn scan_ligands<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut ligands = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.starts_with(HET_RECORD_PREFIX) {
            continue;
        }

        let mut record = match LigandRecord::parse(&line) {
            Some(record) => record,
            None => {
                warn!(line_number = index + 1, "Skipping truncated HET record");
                continue;
            }
        };

        if record.chain_has_digits() {
            warn!(
                chain = %record.chain_id(),
                ligand = %record.name(),
                residue = %record.residue_number(),
                "Found digits in chain identifier"
            );
            record.split_chain_digits();
            info!(
                chain = %record.chain_id(),
                residue = %record.residue_number(),
                "Split chain identifier and updated residue number"
            );
        }

        ligands.push(record.identifier());
    }

    Ok(ligands)
}
