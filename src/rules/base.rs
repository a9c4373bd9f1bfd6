//! Baseline issues derived directly from the project descriptor.

use crate::core::{Evidence, Issue, Severity};
use crate::discovery::ProjectInfo;

pub const MISSING_LINT: &str = "CFG-ESLINT-001";
pub const MISSING_FORMATTER: &str = "CFG-PRETTIER-001";
pub const MISSING_LINT_SCRIPT: &str = "SCRIPTS-001";

pub fn detect(project: &ProjectInfo) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !project.has_lint_tool {
        issues.push(Issue::new(
            MISSING_LINT,
            Severity::High,
            "No lint tooling detected",
            "The repository does not appear to have ESLint configured. Without a linter, style and correctness drift go unnoticed.",
            None,
        ));
    }

    if !project.has_formatter {
        issues.push(Issue::new(
            MISSING_FORMATTER,
            Severity::Medium,
            "No formatter detected",
            "Without Prettier (or an equivalent formatter), formatting tends to become inconsistent across the codebase.",
            None,
        ));
    }

    if project.uses_route_framework && !project.scripts.contains_key("lint") {
        issues.push(Issue::new(
            MISSING_LINT_SCRIPT,
            Severity::Low,
            "No `lint` script in package.json",
            "A `lint` script standardizes checks between local runs and CI.",
            Some(Evidence::Scripts {
                scripts: project.scripts.clone(),
            }),
        ));
    }

    issues
}
