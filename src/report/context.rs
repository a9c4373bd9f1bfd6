//! Contextual summary of the application: routes, endpoints, key domains.
//!
//! Everything here is derived from the same path/content heuristics the rules
//! use; it is descriptive output, never an issue source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::classify::{classify, FileRole};
use crate::core::endpoints::group_endpoints;
use crate::core::source::SourceCache;
use crate::core::EndpointGroup;
use crate::discovery::ProjectInfo;

const MAX_PAGES: usize = 50;
const MAX_FILES_PER_ROLE: usize = 30;
const MAX_ENDPOINTS: usize = 40;
const MAX_DOMAINS: usize = 15;
const MANY_SERVICES: usize = 5;

/// Shared-client file names that are infrastructure, not a domain.
const CLIENT_BASENAMES: &[&str] = &["fetchers", "api-client", "http-client", "client"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppContext {
    pub summary: ContextSummary,
    pub stack: StackInfo,
    pub structure: StructureInfo,
    pub ui: UiInventory,
    pub data_access: DataAccess,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSummary {
    pub key_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    pub tooling: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureInfo {
    pub app_router: bool,
    pub pages_router: bool,
    pub key_folders: Vec<KeyFolder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFolder {
    pub path: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiInventory {
    pub pages: Vec<RouteHint>,
    pub key_components: Vec<String>,
    pub contexts: Vec<String>,
    pub hooks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteHint {
    pub route: String,
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataAccess {
    pub services: Vec<String>,
    pub endpoints: Vec<EndpointGroup>,
    pub risks: Vec<String>,
}

/// Approximate route for an app-router entry file; route groups are elided.
pub fn route_hint(path: &str) -> Option<String> {
    let p = path.replace('\\', "/");
    if !p.starts_with("app/") || !p.ends_with("/page.tsx") {
        return None;
    }

    let parts: Vec<&str> = p.split('/').collect();
    let segments: Vec<&str> = parts[1..parts.len() - 1]
        .iter()
        .filter(|seg| !(seg.starts_with('(') && seg.ends_with(')')))
        .copied()
        .collect();

    Some(format!("/{}", segments.join("/")))
}

fn domain_of(service_path: &str) -> Option<String> {
    let file = service_path.rsplit('/').next().unwrap_or(service_path);
    let base = file
        .trim_end_matches(".tsx")
        .trim_end_matches(".jsx")
        .trim_end_matches(".ts")
        .trim_end_matches(".js");
    let domain = base
        .trim_end_matches(".service")
        .trim_end_matches("-service")
        .trim_end_matches(".api")
        .trim_end_matches(".utils")
        .trim_end_matches(".util");

    if domain.is_empty() || CLIENT_BASENAMES.contains(&domain) {
        None
    } else {
        Some(domain.to_string())
    }
}

pub fn build_app_context(
    project: &ProjectInfo,
    files: &[String],
    sources: &SourceCache,
) -> AppContext {
    let app_router = files
        .iter()
        .any(|f| f.starts_with("app/") && f.ends_with("/page.tsx"));
    let pages_router = files.iter().any(|f| f.starts_with("pages/"));

    let by_role = |role: FileRole| -> Vec<String> {
        files.iter().filter(|f| classify(f) == role).cloned().collect()
    };
    let mut services = by_role(FileRole::Service);
    services.sort();
    let contexts = by_role(FileRole::Context);
    let hooks = by_role(FileRole::Hook);
    let components = by_role(FileRole::Component);

    let mut pages: Vec<RouteHint> = files
        .iter()
        .filter_map(|f| {
            route_hint(f).map(|route| RouteHint {
                route,
                file: f.clone(),
            })
        })
        .collect();
    pages.truncate(MAX_PAGES);

    let mut endpoints = group_endpoints(&services, sources);
    endpoints.truncate(MAX_ENDPOINTS);

    let mut key_domains: Vec<String> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for s in &services {
        if let Some(d) = domain_of(s) {
            if seen.insert(d.clone()) {
                key_domains.push(d);
            }
        }
        if key_domains.len() == MAX_DOMAINS {
            break;
        }
    }

    let mut key_folders = Vec::new();
    if app_router {
        key_folders.push(KeyFolder {
            path: "app/".to_string(),
            purpose: "App router: pages, layouts, routes".to_string(),
        });
    }
    if files.iter().any(|f| f.starts_with("components/")) {
        key_folders.push(KeyFolder {
            path: "components/".to_string(),
            purpose: "Reusable UI components".to_string(),
        });
    }
    if files.iter().any(|f| f.starts_with("app/services/")) {
        key_folders.push(KeyFolder {
            path: "app/services/".to_string(),
            purpose: "Data access / API layer (services)".to_string(),
        });
    }
    if files.iter().any(|f| f.contains("/contexts/")) {
        key_folders.push(KeyFolder {
            path: "contexts/".to_string(),
            purpose: "Global state / providers".to_string(),
        });
    }
    if files.iter().any(|f| f.contains("/hooks/")) {
        key_folders.push(KeyFolder {
            path: "hooks/".to_string(),
            purpose: "Reusable hooks".to_string(),
        });
    }
    if files.iter().any(|f| f.contains("/utils/")) {
        key_folders.push(KeyFolder {
            path: "utils/".to_string(),
            purpose: "Pure helpers / utilities".to_string(),
        });
    }

    let mut risks = Vec::new();
    if services.len() >= MANY_SERVICES {
        risks.push(
            "Many services: unify HTTP behind a single apiClient and add contract tests."
                .to_string(),
        );
    }
    if endpoints.iter().any(|e| e.count >= 2) {
        risks.push(
            "Endpoints used by multiple services: risk of duplicated logic and diverging contracts."
                .to_string(),
        );
    }

    let mut tooling = Vec::new();
    if project.uses_type_system {
        tooling.push("TypeScript".to_string());
    }
    if project.has_lint_tool {
        tooling.push("ESLint".to_string());
    }
    if project.has_formatter {
        tooling.push("Prettier".to_string());
    }

    AppContext {
        summary: ContextSummary { key_domains },
        stack: StackInfo {
            framework: project
                .uses_route_framework
                .then(|| "Next.js".to_string()),
            tooling,
        },
        structure: StructureInfo {
            app_router,
            pages_router,
            key_folders,
        },
        ui: UiInventory {
            pages,
            key_components: components.into_iter().take(MAX_FILES_PER_ROLE).collect(),
            contexts: contexts.into_iter().take(MAX_FILES_PER_ROLE).collect(),
            hooks: hooks.into_iter().take(MAX_FILES_PER_ROLE).collect(),
        },
        data_access: DataAccess {
            services,
            endpoints,
            risks,
        },
    }
}
