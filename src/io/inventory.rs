//! File-count and size statistics over the walked file list.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::{FileInfo, Inventory};

const LARGEST_FILES_SAMPLE: usize = 20;

/// Lowercased `.ext` of a path, or a placeholder for extensionless files.
fn ext_of(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(idx) if idx > 0 => file[idx..].to_lowercase(),
        _ => "(no-ext)".to_string(),
    }
}

pub fn build_inventory(root: &Path, files: &[String]) -> Inventory {
    let mut by_ext: BTreeMap<String, usize> = BTreeMap::new();
    let mut sized: Vec<FileInfo> = Vec::with_capacity(files.len());

    for file in files {
        let ext = ext_of(file);
        *by_ext.entry(ext.clone()).or_insert(0) += 1;

        let bytes = fs::metadata(root.join(file)).map(|m| m.len()).unwrap_or(0);
        sized.push(FileInfo {
            path: file.clone(),
            ext,
            bytes,
        });
    }

    sized.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.path.cmp(&b.path)));
    sized.truncate(LARGEST_FILES_SAMPLE);

    Inventory {
        total_files: files.len(),
        by_ext,
        largest_files: sized,
    }
}
