//! FASTA-backed lookups: descriptions and sequence lengths by id.

use crate::error::Result;
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reduce an NCBI `gi|<number>|<rest>` id to `<rest>`.
///
/// Ids that do not start with `gi|`, or that have fewer than two `|`
/// delimiters, are returned whole.
///
/// ```
/// use blastgroup::sequence::canonical_id;
/// assert_eq!(canonical_id("gi|15|ref|NP_1.1|"), "ref|NP_1.1|");
/// assert_eq!(canonical_id("gi|15"), "gi|15");
/// assert_eq!(canonical_id("contig_7"), "contig_7");
/// ```
pub fn canonical_id(id: &str) -> &str {
    if !id.starts_with("gi|") {
        return id;
    }
    match id.splitn(3, '|').nth(2) {
        Some(rest) => rest,
        None => id,
    }
}

fn open_fasta(path: &Path) -> Result<fasta::Reader<std::io::BufReader<Box<dyn Read>>>> {
    let file = File::open(path)?;
    let inner: Box<dyn Read> = if path.extension().map_or(false, |ext| ext == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(fasta::Reader::new(inner))
}

/// Description lookup keyed by canonical sequence id
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: FxHashMap<String, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every record of a FASTA file (plain or `.gz`).
    pub fn from_fasta(path: &Path) -> Result<Self> {
        let mut table = NameTable::new();
        for record in open_fasta(path)?.records() {
            let record = record?;
            table.insert(record.id(), record.desc().unwrap_or(""));
        }
        debug!(path = %path.display(), names = table.len(), "loaded name table");
        Ok(table)
    }

    /// Later inserts for the same canonical id replace earlier ones.
    pub fn insert(&mut self, id: &str, description: &str) {
        self.names
            .insert(canonical_id(id).to_string(), description.to_string());
    }

    /// Description for `id`, or "" when the id is unknown.
    pub fn description(&self, id: &str) -> &str {
        self.names
            .get(canonical_id(id))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(canonical_id(id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `(id, sequence length)` for every record of a FASTA file, in file order.
///
/// Ids are kept exactly as written (no `gi|` reduction) so they compare
/// equal to the ids found in reports.
pub fn sequence_lengths(path: &Path) -> Result<Vec<(String, usize)>> {
    let mut lengths = Vec::new();
    for record in open_fasta(path)?.records() {
        let record = record?;
        lengths.push((record.id().to_string(), record.seq().len()));
    }
    debug!(path = %path.display(), sequences = lengths.len(), "read sequence lengths");
    Ok(lengths)
}
