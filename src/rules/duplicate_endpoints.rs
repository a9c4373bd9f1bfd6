//! The same logical endpoint referenced from more than one service file.

use crate::core::classify::{classify, FileRole};
use crate::core::endpoints::group_endpoints;
use crate::core::source::SourceCache;
use crate::core::{Evidence, Issue, Severity};

pub const DUPLICATE_ENDPOINTS: &str = "API-DUP-ENDPOINT-001";

const MAX_GROUPS: usize = 30;

fn service_ext(path: &str) -> bool {
    path.ends_with(".ts") || path.ends_with(".tsx") || path.ends_with(".js") || path.ends_with(".jsx")
}

pub fn detect(files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let service_files: Vec<String> = files
        .iter()
        .filter(|f| classify(f) == FileRole::Service && service_ext(f))
        .cloned()
        .collect();

    let mut duplicates: Vec<_> = group_endpoints(&service_files, sources)
        .into_iter()
        .filter(|g| g.count >= 2)
        .collect();
    duplicates.truncate(MAX_GROUPS);

    if duplicates.is_empty() {
        return Vec::new();
    }

    vec![Issue::new(
        DUPLICATE_ENDPOINTS,
        Severity::High,
        "Duplicated endpoints across services",
        "The same endpoint (or the same resource) shows up in several services. That usually means duplicated functions with small variations in headers, parsing, or params; consolidating per resource prevents future bugs.",
        Some(Evidence::DuplicateEndpoints { duplicates }),
    )]
}
