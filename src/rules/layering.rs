//! Layering violations between UI, service, and API modules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::classify::{classify, FileRole};
use crate::core::source::{is_script_file, SourceCache};
use crate::core::{Evidence, Issue, Severity};

pub const UI_DIRECT_HTTP: &str = "ARCH-LAYER-001";
pub const UI_MIXED_ACCESS: &str = "ARCH-LAYER-002";
pub const SERVICE_IMPORTS_UI: &str = "ARCH-LAYER-003";
pub const SERVICE_IMPORTS_APP: &str = "ARCH-LAYER-004";
pub const UI_IMPORTS_API: &str = "ARCH-LAYER-005";

pub(crate) static FETCH_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfetch\s*\(|\baxios\.").unwrap());
pub(crate) static IMPORTS_SERVICES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from\s+["'][^"']*(/services/|\.service)["']"#).unwrap());
static IMPORTS_API: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from\s+["'][^"']*(/api/|\.api)["']"#).unwrap());
static IMPORTS_COMPONENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from\s+["'][^"']*/components/"#).unwrap());
static IMPORTS_APP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"from\s+["'][^"']*/app/"#).unwrap());

fn is_ui(role: FileRole) -> bool {
    matches!(role, FileRole::Component | FileRole::Page)
}

fn is_data_layer(role: FileRole) -> bool {
    matches!(role, FileRole::Service | FileRole::Api)
}

pub fn detect(files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let mut issues = Vec::new();

    for f in files {
        if !is_script_file(f) {
            continue;
        }
        let role = classify(f);
        let src = sources.get(f);
        if src.is_empty() {
            continue;
        }

        let direct_http = FETCH_LIKE.is_match(src);
        let imports_services = IMPORTS_SERVICES.is_match(src);
        let imports_api = IMPORTS_API.is_match(src);

        if is_ui(role) && direct_http {
            issues.push(Issue::new(
                UI_DIRECT_HTTP,
                Severity::High,
                "UI calling the API directly (fetch/axios)",
                "When components or pages fetch on their own, the same call ends up reimplemented with small variations. Centralize requests in services (or hooks) and let the UI consume typed functions.",
                Some(Evidence::File { file: f.clone() }),
            ));
        }

        if is_ui(role) && imports_services && direct_http {
            issues.push(Issue::new(
                UI_MIXED_ACCESS,
                Severity::Medium,
                "UI mixes service imports with direct fetch/axios",
                "Part of the flow goes through a service and part fires requests directly; consolidate to avoid divergence.",
                Some(Evidence::File { file: f.clone() }),
            ));
        }

        if is_data_layer(role) && IMPORTS_COMPONENTS.is_match(src) {
            issues.push(Issue::new(
                SERVICE_IMPORTS_UI,
                Severity::High,
                "Service/API importing UI (inverted dependency)",
                "Logic and persistence layers must not depend on UI; it breaks reuse and testability.",
                Some(Evidence::File { file: f.clone() }),
            ));
        }

        if is_data_layer(role) && IMPORTS_APP.is_match(src) {
            issues.push(Issue::new(
                SERVICE_IMPORTS_APP,
                Severity::High,
                "Service/API importing app/pages",
                "The service layer should be consumed by the UI, not the other way around; this is inverted architecture.",
                Some(Evidence::File { file: f.clone() }),
            ));
        }

        if is_ui(role) && imports_api {
            issues.push(Issue::new(
                UI_IMPORTS_API,
                Severity::Medium,
                "UI importing an API module directly",
                "Prefer UI -> hooks -> services -> api/client; it stabilizes contracts and makes testing easier.",
                Some(Evidence::File { file: f.clone() }),
            ));
        }
    }

    issues
}
