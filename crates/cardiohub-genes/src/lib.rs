//! Arrhythmia gene table: loading, search, and presentation decoration.
//!
//! The dataset is a curated spreadsheet (CSV export) with one row per gene.
//! Column names are a contract with the existing dataset and are matched
//! exactly:
//!
//! | Column | Required | Content |
//! |--------|----------|---------|
//! | `Gene Names` | yes | gene symbol, e.g. `KCNQ1` |
//! | `Gene Links` | no  | URL backing the gene symbol |
//! | `Sequence`   | no  | URL of the reference sequence |
//! | `pubmed`     | no  | URL of the primary publication |
//!
//! # Example
//!
//! ```rust,no_run
//! use cardiohub_genes::GeneTable;
//!
//! fn main() -> cardiohub_common::Result<()> {
//!     let table = GeneTable::load("data/arrhythmia_genes.csv")?;
//!     for record in table.search("KCNQ") {
//!         println!("{}", record.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod render;
pub mod store;
pub mod table;

pub use store::GeneStore;
pub use table::{GeneRecord, GeneTable, GENE_NAMES_COLUMN};
