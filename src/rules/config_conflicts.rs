//! Conflicting or redundant root-level configuration files.

use crate::core::{Evidence, Issue, Severity};
use crate::discovery::{
    root_file_names, ProjectInfo, ESLINT_FLAT_CONFIGS, ESLINT_RC_CONFIGS, LOCKFILES,
    NEXT_CONFIGS, PRETTIER_CONFIGS,
};

pub const ESLINT_MIXED: &str = "CFG-CONFLICT-ESLINT-001";
pub const ESLINT_MULTIPLE_RC: &str = "CFG-CONFLICT-ESLINT-002";
pub const PRETTIER_MULTIPLE: &str = "CFG-CONFLICT-PRETTIER-001";
pub const NEXT_MULTIPLE: &str = "CFG-CONFLICT-NEXT-001";
pub const LOCKFILE_MULTIPLE: &str = "CFG-CONFLICT-LOCK-001";
pub const MISSING_TSCONFIG: &str = "CFG-TS-001";

fn present(root_files: &[String], names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|n| root_files.iter().any(|f| f == *n))
        .map(|n| n.to_string())
        .collect()
}

pub fn detect(project: &ProjectInfo, files: &[String]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let root_files = root_file_names(files);

    let eslint_flat = present(&root_files, ESLINT_FLAT_CONFIGS);
    let eslint_rc = present(&root_files, ESLINT_RC_CONFIGS);

    if !eslint_flat.is_empty() && !eslint_rc.is_empty() {
        issues.push(Issue::new(
            ESLINT_MIXED,
            Severity::High,
            "ESLint: flat config and .eslintrc* coexist",
            "Pick a single configuration format; mixing flat config with legacy .eslintrc files leads to surprising resolution behavior.",
            Some(Evidence::LintConfigs {
                flat: eslint_flat,
                legacy: eslint_rc,
            }),
        ));
    } else if eslint_rc.len() > 1 {
        issues.push(Issue::new(
            ESLINT_MULTIPLE_RC,
            Severity::Medium,
            "ESLint: multiple .eslintrc* files at the root",
            "Consolidating into a single file removes inconsistencies between environments.",
            Some(Evidence::ConflictingFiles { files: eslint_rc }),
        ));
    }

    let prettier = present(&root_files, PRETTIER_CONFIGS);
    if prettier.len() > 1 {
        issues.push(Issue::new(
            PRETTIER_MULTIPLE,
            Severity::High,
            "Prettier: multiple configs detected",
            "Consolidate to a single config file so every environment formats the same way.",
            Some(Evidence::ConflictingFiles { files: prettier }),
        ));
    }

    let next = present(&root_files, NEXT_CONFIGS);
    if next.len() > 1 {
        issues.push(Issue::new(
            NEXT_MULTIPLE,
            Severity::High,
            "Next: multiple next.config.* files detected",
            "Only one next.config should be active; extra copies are a source of confusion.",
            Some(Evidence::ConflictingFiles { files: next }),
        ));
    }

    let locks = present(&root_files, LOCKFILES);
    if locks.len() > 1 {
        issues.push(Issue::new(
            LOCKFILE_MULTIPLE,
            Severity::High,
            "Multiple dependency lockfiles detected",
            "Pick a single package manager; competing lockfiles break reproducible installs.",
            Some(Evidence::ConflictingFiles { files: locks }),
        ));
    }

    let has_tsconfig = root_files.iter().any(|f| f == "tsconfig.json");
    if project.uses_route_framework && project.uses_type_system && !has_tsconfig {
        issues.push(Issue::new(
            MISSING_TSCONFIG,
            Severity::High,
            "TypeScript: no tsconfig.json at the root",
            "A route framework with TypeScript expects a root tsconfig.json for consistent tooling.",
            None,
        ));
    }

    issues
}
