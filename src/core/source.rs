//! Read-once cache of script-file contents.
//!
//! Contents are loaded up front with a rayon pool; an unreadable file is
//! stored as empty text so rules simply see no matches for it. Rules never
//! touch the filesystem themselves, which keeps them pure over the cache.

use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// True for files whose content the rules scan.
pub fn is_script_file(path: &str) -> bool {
    path.rsplit('.')
        .next()
        .map(|ext| SCRIPT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub struct SourceCache {
    contents: HashMap<String, String>,
}

impl SourceCache {
    /// Pre-read all script files under `root`. Read failures become empty strings.
    pub fn load(root: &Path, files: &[String]) -> Self {
        let contents = files
            .par_iter()
            .filter(|f| is_script_file(f))
            .map(|f| {
                let text = std::fs::read_to_string(root.join(f)).unwrap_or_default();
                (f.clone(), text)
            })
            .collect();
        Self { contents }
    }

    /// Build a cache from in-memory contents (used by tests).
    pub fn from_map(contents: HashMap<String, String>) -> Self {
        Self { contents }
    }

    /// Content of `path`, or empty text when unknown or unreadable.
    pub fn get(&self, path: &str) -> &str {
        self.contents.get(path).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_extension_check() {
        assert!(is_script_file("a/b.ts"));
        assert!(is_script_file("a/b.tsx"));
        assert!(is_script_file("a/b.mjs"));
        assert!(!is_script_file("a/b.css"));
        assert!(!is_script_file("Makefile"));
    }

    #[test]
    fn missing_files_read_as_empty() {
        let cache = SourceCache::from_map(HashMap::new());
        assert_eq!(cache.get("nope.ts"), "");
    }
}
