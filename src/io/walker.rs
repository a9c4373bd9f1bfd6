//! Repository traversal honoring `.gitignore` plus built-in excludes.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::Path;

/// Directories skipped regardless of ignore files.
const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".next", "dist", "build", ".turbo", ".git"];

/// Lists files under `root` as sorted, `/`-separated repo-relative paths.
pub fn list_repo_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .follow_links(false)
        .build()
    {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };

        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if components
            .iter()
            .any(|c| DEFAULT_EXCLUDES.contains(&c.as_str()))
        {
            continue;
        }

        files.push(components.join("/"));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn excludes_build_artifacts_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app/services")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("app/services/cart.service.ts"), "").unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "").unwrap();

        let files = list_repo_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                "app/services/cart.service.ts".to_string(),
                "package.json".to_string()
            ]
        );
    }
}
