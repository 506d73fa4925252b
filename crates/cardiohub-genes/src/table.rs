//! The in-memory gene table and its CSV loader.

use std::path::Path;

use cardiohub_common::error::{CardioHubError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Required column holding the gene symbol.
pub const GENE_NAMES_COLUMN: &str = "Gene Names";

/// Optional column with a URL backing the gene symbol.
pub const GENE_LINKS_COLUMN: &str = "Gene Links";

/// Optional column with a reference-sequence URL.
pub const SEQUENCE_COLUMN: &str = "Sequence";

/// Optional column with a publication URL.
pub const PUBMED_COLUMN: &str = "pubmed";

/// One row of the arrhythmia gene spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneRecord {
    pub name: String,
    pub link: Option<String>,
    pub sequence: Option<String>,
    pub pubmed: Option<String>,
}

/// The loaded spreadsheet, rows in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneTable {
    records: Vec<GeneRecord>,
}

impl GeneTable {
    /// Load the table from a CSV file.
    ///
    /// Fails with [`CardioHubError::DatasetNotFound`] when the path does not
    /// exist, [`CardioHubError::MissingColumn`] when the header lacks
    /// `Gene Names`, and a CSV error when the content is not tabular.
    /// Rows are kept in file order; a row with an empty gene name is kept
    /// too (the full-database view shows it) but can never match a search.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CardioHubError::DatasetNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let name_idx = column_index(&headers, GENE_NAMES_COLUMN)
            .ok_or(CardioHubError::MissingColumn(GENE_NAMES_COLUMN))?;
        let link_idx = column_index(&headers, GENE_LINKS_COLUMN);
        let sequence_idx = column_index(&headers, SEQUENCE_COLUMN);
        let pubmed_idx = column_index(&headers, PUBMED_COLUMN);

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let name = row.get(name_idx).unwrap_or("").trim().to_string();
            if name.is_empty() {
                debug!("row {} has an empty gene name", records.len() + 1);
            }
            records.push(GeneRecord {
                name,
                link: optional_cell(&row, link_idx),
                sequence: optional_cell(&row, sequence_idx),
                pubmed: optional_cell(&row, pubmed_idx),
            });
        }

        info!("Loaded {} gene records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over the gene-name column.
    ///
    /// Result order equals table order. Rows with an empty name never
    /// match. What an empty query means is the caller's decision; given
    /// one, this returns every named row.
    pub fn search(&self, query: &str) -> Vec<&GeneRecord> {
        let needle = query.to_ascii_lowercase();
        self.records
            .iter()
            .filter(|r| !r.name.is_empty())
            .filter(|r| r.name.to_ascii_lowercase().contains(&needle))
            .collect()
    }
}

impl From<Vec<GeneRecord>> for GeneTable {
    fn from(records: Vec<GeneRecord>) -> Self {
        Self { records }
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// An absent or blank cell loads as `None`, never as an empty string.
fn optional_cell(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let value = row.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
