use std::fs;
use std::path::{Path, PathBuf};

/// One line of production source, located by crate-relative path.
#[derive(Debug)]
pub struct SourceLine {
    pub file: String,
    pub number: usize,
    pub text: String,
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rust_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut pending = vec![dir.to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));
        for entry in entries {
            let path = entry
                .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

/// Production lines of every `.rs` file under `relative_dir`.
///
/// Each file is read up to its `#[cfg(test)]` module.
pub fn source_lines(relative_dir: &str) -> Vec<SourceLine> {
    let root = crate_root();
    let mut lines = Vec::new();

    for path in rust_files_under(&root.join(relative_dir)) {
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let file = path
            .strip_prefix(&root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        lines.extend(
            content
                .lines()
                .take_while(|line| line.trim() != "#[cfg(test)]")
                .enumerate()
                .map(|(idx, text)| SourceLine {
                    file: file.clone(),
                    number: idx + 1,
                    text: text.to_string(),
                }),
        );
    }

    lines
}

/// Production lines under `relative_dir` mentioning any of `patterns`.
pub fn lines_mentioning(relative_dir: &str, patterns: &[&str]) -> Vec<SourceLine> {
    source_lines(relative_dir)
        .into_iter()
        .filter(|line| patterns.iter().any(|pattern| line.text.contains(pattern)))
        .collect()
}

/// Lines of `mod.rs` files that declare or re-export nothing.
pub fn non_export_lines_in_mod_files(relative_dir: &str) -> Vec<SourceLine> {
    let mut in_reexport = false;
    source_lines(relative_dir)
        .into_iter()
        .filter(|line| line.file.ends_with("/mod.rs"))
        .filter(|line| {
            let text = line.text.trim();
            if in_reexport || text.starts_with("pub use ") {
                in_reexport = !text.ends_with(';');
                return false;
            }
            !(text.is_empty()
                || text.starts_with("//")
                || text.starts_with("pub mod ")
                || text.starts_with("mod "))
        })
        .collect()
}

pub fn crate_path_exists(relative_path: &str) -> bool {
    crate_root().join(relative_path).exists()
}
