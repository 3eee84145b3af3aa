use std::path::{Path, PathBuf};

use blogstat::application::ensure_schema;
use blogstat::infrastructure::bootstrap::{open_stores, Stores};
use tempfile::TempDir;

/// Temporary directory holding both store files and the report outputs.
pub struct TempStores {
    dir: TempDir,
}

impl TempStores {
    pub fn create() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn authors_db(&self) -> PathBuf {
        self.dir.path().join("authors.db")
    }

    pub fn logs_db(&self) -> PathBuf {
        self.dir.path().join("logs.db")
    }

    pub fn comments_csv(&self) -> PathBuf {
        self.dir.path().join("comments.csv")
    }

    pub fn general_csv(&self) -> PathBuf {
        self.dir.path().join("general.csv")
    }

    /// Open both stores, without touching their tables.
    pub fn open(&self) -> Stores {
        open_stores(&self.authors_db(), &self.logs_db()).expect("open stores")
    }

    /// Open both stores and create their tables.
    pub fn open_with_schema(&self) -> Stores {
        let mut stores = self.open();
        ensure_schema(&mut stores.authors).expect("authors schema");
        ensure_schema(&mut stores.logs).expect("logs schema");
        stores
    }

    /// Report lines without the header.
    pub fn data_lines(path: &Path) -> Vec<String> {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        content.lines().skip(1).map(str::to_string).collect()
    }
}
