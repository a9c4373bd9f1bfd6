//! Project descriptor derived from `package.json` and well-known root configs.
//!
//! A missing manifest is the single fatal precondition of a run; a manifest
//! that exists but fails to parse degrades to an empty descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::AuditError;

pub const ESLINT_FLAT_CONFIGS: &[&str] =
    &["eslint.config.js", "eslint.config.mjs", "eslint.config.cjs"];

pub const ESLINT_RC_CONFIGS: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yaml",
    ".eslintrc.yml",
];

pub const PRETTIER_CONFIGS: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.js",
    ".prettierrc.cjs",
    "prettier.config.js",
    "prettier.config.cjs",
];

pub const NEXT_CONFIGS: &[&str] = &["next.config.js", "next.config.mjs", "next.config.ts"];

pub const LOCKFILES: &[&str] = &["package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub uses_route_framework: bool,
    pub uses_type_system: bool,
    pub has_lint_tool: bool,
    pub has_formatter: bool,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    name: Option<String>,
    #[serde(default)]
    scripts: BTreeMap<String, String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Names present at the repository root, taken from the walked file list.
pub fn root_file_names(files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|f| !f.contains('/'))
        .cloned()
        .collect()
}

fn any_at_root(root_files: &[String], names: &[&str]) -> bool {
    root_files.iter().any(|f| names.contains(&f.as_str()))
}

pub fn detect_project(root: &Path, files: &[String]) -> Result<ProjectInfo, AuditError> {
    let manifest_path = root.join("package.json");
    if !manifest_path.exists() {
        return Err(AuditError::MissingManifest(root.to_path_buf()));
    }

    let manifest: PackageManifest = std::fs::read_to_string(&manifest_path)
        .ok()
        .and_then(|text| match serde_json::from_str(&text) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("failed to parse {}: {e}", manifest_path.display());
                None
            }
        })
        .unwrap_or_default();

    let dependencies: Vec<String> = manifest.dependencies.keys().cloned().collect();
    let dev_dependencies: Vec<String> = manifest.dev_dependencies.keys().cloned().collect();
    let root_files = root_file_names(files);

    let has_dep = |name: &str| {
        dependencies.iter().any(|d| d == name) || dev_dependencies.iter().any(|d| d == name)
    };

    let uses_route_framework = has_dep("next") || any_at_root(&root_files, NEXT_CONFIGS);
    let uses_type_system =
        has_dep("typescript") || root_files.iter().any(|f| f == "tsconfig.json");
    let has_lint_tool = has_dep("eslint")
        || any_at_root(&root_files, ESLINT_FLAT_CONFIGS)
        || any_at_root(&root_files, ESLINT_RC_CONFIGS);
    let has_formatter = has_dep("prettier") || any_at_root(&root_files, PRETTIER_CONFIGS);

    Ok(ProjectInfo {
        name: manifest.name,
        uses_route_framework,
        uses_type_system,
        has_lint_tool,
        has_formatter,
        scripts: manifest.scripts,
        dependencies,
        dev_dependencies,
    })
}
