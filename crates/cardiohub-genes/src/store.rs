//! Read-through gene table store keyed on file modification time.
//!
//! The dashboard re-reads the spreadsheet on every interaction, so edits to
//! the file show up on the next request. The store keeps that behaviour
//! observable without re-parsing an unchanged file: a snapshot is cached
//! together with the mtime it was parsed at and swapped atomically when the
//! file changes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use cardiohub_common::error::Result;
use tracing::debug;

use crate::table::GeneTable;

#[derive(Debug)]
pub struct GeneStore {
    path: PathBuf,
    cached: RwLock<Option<CachedTable>>,
}

#[derive(Debug, Clone)]
struct CachedTable {
    modified: SystemTime,
    table: Arc<GeneTable>,
}

impl GeneStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current table snapshot, reloading when the file changed on disk.
    pub fn load(&self) -> Result<Arc<GeneTable>> {
        let modified = std::fs::metadata(&self.path).and_then(|m| m.modified()).ok();

        if let Some(modified) = modified {
            let cached = self.cached.read().expect("gene store lock");
            if let Some(entry) = cached.as_ref() {
                if entry.modified == modified {
                    return Ok(entry.table.clone());
                }
            }
        }

        let table = Arc::new(GeneTable::load(&self.path)?);
        debug!("Refreshed gene table snapshot ({} records)", table.len());
        if let Some(modified) = modified {
            let mut cached = self.cached.write().expect("gene store lock");
            *cached = Some(CachedTable {
                modified,
                table: table.clone(),
            });
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_dataset(path: &Path, rows: &[&str]) {
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(file, "Gene Names,Gene Links,Sequence,pubmed").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
    }

    #[test]
    fn unchanged_file_returns_cached_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.csv");
        write_dataset(&path, &["KCNQ1,,,"]);

        let store = GeneStore::new(&path);
        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn touched_file_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.csv");
        write_dataset(&path, &["KCNQ1,,,"]);

        let store = GeneStore::new(&path);
        let first = store.load().unwrap();
        assert_eq!(first.len(), 1);

        write_dataset(&path, &["KCNQ1,,,", "SCN5A,,,"]);
        // Force a distinct mtime; same-second rewrites are otherwise
        // invisible on coarse-grained filesystems.
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(5)).unwrap();

        let second = store.load().unwrap();
        assert_eq!(second.len(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_file_propagates_not_found() {
        let store = GeneStore::new("/definitely/not/here.csv");
        assert!(store.load().is_err());
    }
}
