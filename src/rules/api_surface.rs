//! Fragmented API surface: competing HTTP clients and scattered service roots.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::core::source::{is_script_file, SourceCache};
use crate::core::{Evidence, Issue, Severity};

pub const DUPLICATE_CLIENTS: &str = "API-DUP-CLIENT-001";
pub const SCATTERED_SERVICES: &str = "API-DUP-SERVICES-001";

static CLIENT_CONSTRUCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"axios\.create\s*\(|new\s+GraphQLClient\s*\(").unwrap());
static FETCH_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfetch\s*\(").unwrap());
static BASE_URL_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"baseUrl|BASE_URL|process\.env").unwrap());
static CLIENT_NAME_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)api-client|client\.api|http-client|http\.ts|api\.ts").unwrap());
static SERVICE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.service\.(ts|tsx)$").unwrap());

pub fn detect(files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut client_candidates = Vec::new();
    for f in files {
        if !is_script_file(f) {
            continue;
        }
        let src = sources.get(f);
        if src.is_empty() {
            continue;
        }

        let looks_like_client = CLIENT_CONSTRUCTION.is_match(src)
            || (FETCH_CALL.is_match(src) && BASE_URL_REF.is_match(src));
        let name_hint = CLIENT_NAME_HINT.is_match(f);

        if looks_like_client || name_hint {
            client_candidates.push(f.clone());
        }
    }

    if client_candidates.len() >= 2 {
        issues.push(Issue::new(
            DUPLICATE_CLIENTS,
            Severity::High,
            "Multiple 'API client' candidates detected",
            "More than one HTTP client means divergent headers, error handling, and parsing. Pick a single API client and make services/hooks depend on it.",
            Some(Evidence::ClientCandidates {
                candidates: client_candidates,
            }),
        ));
    }

    let service_paths: Vec<&String> = files
        .iter()
        .filter(|f| f.contains("/services/") || SERVICE_SUFFIX.is_match(f))
        .collect();
    let roots: BTreeSet<String> = service_paths
        .iter()
        .map(|p| {
            p.split('/')
                .take(2)
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();

    if roots.len() >= 2 {
        issues.push(Issue::new(
            SCATTERED_SERVICES,
            Severity::Medium,
            "Service files scattered across multiple roots",
            "Services living in several places usually mean there is no clear domain layer. Consolidating (by feature or by domain) reduces duplication and simplifies testing.",
            Some(Evidence::ServiceRoots {
                roots: roots.into_iter().collect(),
                count: service_paths.len(),
            }),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cache(entries: &[(&str, &str)]) -> SourceCache {
        SourceCache::from_map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn two_client_candidates_are_flagged() {
        let files = vec![
            "lib/http-client.ts".to_string(),
            "app/services/fetcher.ts".to_string(),
        ];
        let sources = cache(&[
            ("lib/http-client.ts", "export const api = axios.create({});"),
            (
                "app/services/fetcher.ts",
                "export const get = (p) => fetch(process.env.API_URL + p);",
            ),
        ]);
        let issues = detect(&files, &sources);
        assert_eq!(issues[0].id, DUPLICATE_CLIENTS);
        match issues[0].evidence.as_ref() {
            Some(Evidence::ClientCandidates { candidates }) => {
                assert_eq!(candidates.len(), 2)
            }
            other => panic!("unexpected evidence: {other:?}"),
        }
    }

    #[test]
    fn single_client_is_fine() {
        let files = vec!["lib/http-client.ts".to_string()];
        let sources = cache(&[("lib/http-client.ts", "axios.create({})")]);
        // one candidate, one service root: nothing to report
        assert!(detect(&files, &sources).is_empty());
    }

    #[test]
    fn services_in_two_roots_are_scattered() {
        let files = vec![
            "app/services/cart.service.ts".to_string(),
            "modules/billing/services/invoice.ts".to_string(),
        ];
        let issues = detect(&files, &cache(&[]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, SCATTERED_SERVICES);
        match issues[0].evidence.as_ref() {
            Some(Evidence::ServiceRoots { roots, count }) => {
                assert_eq!(roots.len(), 2);
                assert_eq!(*count, 2);
            }
            other => panic!("unexpected evidence: {other:?}"),
        }
    }
}
