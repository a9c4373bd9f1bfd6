//! Heuristic rules turning the file list and raw contents into issues.
//!
//! Every rule is independent: it reads the file list, the source cache, and
//! the project descriptor, and returns its own issue sequence. The order
//! below is plain insertion order for reproducible output, nothing more.

pub mod api_surface;
pub mod base;
pub mod config_conflicts;
pub mod duplicate_endpoints;
pub mod layering;
pub mod naming;
pub mod service_http;
pub mod smart_components;

use crate::core::source::SourceCache;
use crate::core::Issue;
use crate::discovery::ProjectInfo;

pub fn run_all(project: &ProjectInfo, files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(base::detect(project));
    issues.extend(config_conflicts::detect(project, files));
    issues.extend(naming::detect(files));
    issues.extend(layering::detect(files, sources));
    issues.extend(smart_components::detect(files, sources));
    issues.extend(api_surface::detect(files, sources));
    issues.extend(service_http::detect(files, sources));
    issues.extend(duplicate_endpoints::detect(files, sources));
    issues
}
