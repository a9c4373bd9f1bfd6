//! HTTP consistency across the service layer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::classify::{classify, FileRole};
use crate::core::endpoints::extract_endpoints;
use crate::core::source::SourceCache;
use crate::core::{EnvVarUsage, Evidence, Issue, ServiceHttpUse, Severity};

pub const DIRECT_HTTP_SERVICES: &str = "SERVICE-HTTP-001";
pub const DUPLICATE_SERVICE_CLIENTS: &str = "SERVICE-HTTP-002";
pub const SCATTERED_ENV_URLS: &str = "SERVICE-HTTP-003";

const DIRECT_HTTP_THRESHOLD: usize = 3;
const MAX_URL_HINTS: usize = 10;
const MAX_EXAMPLES: usize = 8;
const MAX_ENV_ENTRIES: usize = 10;
const MAX_ENV_FILES: usize = 6;

static HTTP_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfetch\s*\(|\baxios\.|\bnew\s+GraphQLClient\b|\bky\s*\(").unwrap()
});
static HTTP_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s"'`]+"#).unwrap());
static ENV_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"process\.env\.[A-Z0-9_]+").unwrap());
static CLIENT_CONSTRUCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"axios\.create\s*\(").unwrap());
static FETCH_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)const\s+\w+\s*=\s*async\s*\(.*?\)\s*=>\s*fetch\s*\(").unwrap()
});
static HEADER_HANDLING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"headers|Authorization|Content-Type").unwrap());
static BASE_URL_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"baseUrl|BASE_URL|process\.env\.").unwrap());
static FETCH_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfetch\s*\(").unwrap());
static SERVICE_CLIENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(fetchers|api-client|http-client|client)\.service\.ts$").unwrap());

fn service_ext(path: &str) -> bool {
    path.ends_with(".ts") || path.ends_with(".tsx") || path.ends_with(".js") || path.ends_with(".jsx")
}

/// URL-ish literals in a service: absolute URLs, `/api/` paths, env references.
/// First-occurrence order, deduplicated, capped.
fn extract_url_hints(src: &str) -> Vec<String> {
    let mut hints: Vec<String> = Vec::new();
    let mut push = |hint: String| {
        if !hints.contains(&hint) {
            hints.push(hint);
        }
    };

    for m in HTTP_URL.find_iter(src) {
        push(m.as_str().to_string());
    }
    for ep in extract_endpoints(src) {
        push(ep);
    }
    for m in ENV_REF.find_iter(src) {
        push(m.as_str().to_string());
    }

    hints.truncate(MAX_URL_HINTS);
    hints
}

pub fn detect(files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let mut issues = Vec::new();

    let service_files: Vec<&String> = files
        .iter()
        .filter(|f| classify(f) == FileRole::Service && service_ext(f))
        .collect();

    let mut direct_http: Vec<ServiceHttpUse> = Vec::new();
    let mut client_candidates: Vec<String> = Vec::new();

    for f in &service_files {
        let src = sources.get(f);
        if src.is_empty() {
            continue;
        }

        if HTTP_CALL.is_match(src) {
            direct_http.push(ServiceHttpUse {
                file: (*f).clone(),
                url_hints: extract_url_hints(src),
            });
        }

        let looks_like_client = CLIENT_CONSTRUCTION.is_match(src)
            || (FETCH_WRAPPER.is_match(src) && HEADER_HANDLING.is_match(src))
            || (BASE_URL_REF.is_match(src) && FETCH_CALL.is_match(src));
        let name_hint = SERVICE_CLIENT_NAME.is_match(f);

        if looks_like_client || name_hint {
            client_candidates.push((*f).clone());
        }
    }

    if direct_http.len() >= DIRECT_HTTP_THRESHOLD {
        issues.push(Issue::new(
            DIRECT_HTTP_SERVICES,
            Severity::High,
            "Many services perform HTTP directly (likely client/header/error drift)",
            "When every service hand-rolls its requests, headers, error handling, and parsing diverge. Create a single API client (a shared fetcher) and have the services use it.",
            Some(Evidence::HttpServices {
                count: direct_http.len(),
                examples: direct_http.iter().take(MAX_EXAMPLES).cloned().collect(),
            }),
        ));
    }

    if client_candidates.len() >= 2 {
        issues.push(Issue::new(
            DUPLICATE_SERVICE_CLIENTS,
            Severity::High,
            "Multiple 'API client' candidates inside services",
            "More than one HTTP helper duplicates auth, base URL, retry, and error handling. Consolidate into one.",
            Some(Evidence::ClientCandidates {
                candidates: client_candidates,
            }),
        ));
    }

    let mut env_usage: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for use_ in &direct_http {
        for hint in &use_.url_hints {
            if hint.starts_with("process.env.") {
                env_usage
                    .entry(hint.clone())
                    .or_default()
                    .insert(use_.file.clone());
            }
        }
    }

    if env_usage.len() >= 2 {
        let mut table: Vec<EnvVarUsage> = env_usage
            .into_iter()
            .map(|(env, files)| EnvVarUsage {
                env,
                count: files.len(),
                used_in: files.into_iter().take(MAX_ENV_FILES).collect(),
            })
            .collect();
        table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.env.cmp(&b.env)));
        table.truncate(MAX_ENV_ENTRIES);

        issues.push(Issue::new(
            SCATTERED_ENV_URLS,
            Severity::Medium,
            "Base URL / env vars scattered across services",
            "Different services reading different env vars for URLs drift out of sync easily. Centralize the configuration in one place and consume it from the API client.",
            Some(Evidence::EnvUsage { env_vars: table }),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cache(entries: &[(&str, &str)]) -> (Vec<String>, SourceCache) {
        let files = entries.iter().map(|(k, _)| k.to_string()).collect();
        let map = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        (files, SourceCache::from_map(map))
    }

    #[test]
    fn three_direct_http_services_trigger_the_high_issue() {
        let (files, sources) = cache(&[
            ("app/services/a.service.ts", r#"fetch("/api/a");"#),
            ("app/services/b.service.ts", r#"axios.get("/api/b");"#),
            ("app/services/c.service.ts", r#"fetch("/api/c/1");"#),
        ]);
        let issues = detect(&files, &sources);
        assert_eq!(issues[0].id, DIRECT_HTTP_SERVICES);
        assert_eq!(issues[0].severity, Severity::High);
        match issues[0].evidence.as_ref() {
            Some(Evidence::HttpServices { count, examples }) => {
                assert_eq!(*count, 3);
                assert_eq!(examples.len(), 3);
                assert_eq!(examples[0].url_hints, vec!["/api/a"]);
            }
            other => panic!("unexpected evidence: {other:?}"),
        }
    }

    #[test]
    fn two_direct_http_services_stay_quiet() {
        let (files, sources) = cache(&[
            ("app/services/a.service.ts", r#"fetch("/api/a");"#),
            ("app/services/b.service.ts", r#"fetch("/api/b");"#),
        ]);
        assert!(detect(&files, &sources).is_empty());
    }

    #[test]
    fn competing_clients_inside_services() {
        let (files, sources) = cache(&[
            ("app/services/fetchers.service.ts", "export const x = 1;"),
            (
                "app/services/legacy.service.ts",
                "const client = axios.create({ baseURL: url });",
            ),
        ]);
        let issues = detect(&files, &sources);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, DUPLICATE_SERVICE_CLIENTS);
    }

    #[test]
    fn scattered_env_vars_build_a_usage_table() {
        let (files, sources) = cache(&[
            (
                "app/services/a.service.ts",
                r#"fetch(process.env.API_URL + "/api/a");"#,
            ),
            (
                "app/services/b.service.ts",
                r#"fetch(process.env.LEGACY_URL + "/api/b");"#,
            ),
            (
                "app/services/c.service.ts",
                r#"fetch(process.env.API_URL + "/api/c");"#,
            ),
        ]);
        let issues = detect(&files, &sources);
        let env_issue = issues
            .iter()
            .find(|i| i.id == SCATTERED_ENV_URLS)
            .expect("env issue");
        match env_issue.evidence.as_ref() {
            Some(Evidence::EnvUsage { env_vars }) => {
                assert_eq!(env_vars.len(), 2);
                assert_eq!(env_vars[0].env, "process.env.API_URL");
                assert_eq!(env_vars[0].count, 2);
            }
            other => panic!("unexpected evidence: {other:?}"),
        }
    }

    #[test]
    fn url_hints_are_deduplicated_and_capped() {
        let src = r#"
            fetch("https://x.test/one");
            fetch("https://x.test/one");
            fetch("/api/a"); fetch("/api/a");
            const k = process.env.API_URL;
        "#;
        let hints = extract_url_hints(src);
        assert_eq!(
            hints,
            vec!["https://x.test/one", "/api/a", "process.env.API_URL"]
        );
    }
}
