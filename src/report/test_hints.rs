//! Test-authoring hints derived from the issue set.
//!
//! A fixed mapping from issue ids (or id families) to hint templates.
//! Hints deduplicate on the structural key (kind, target, rationale); a hint
//! already seen under that key is dropped, not merged.

use std::collections::HashSet;

use crate::core::{HintKind, Issue, TestHint};
use crate::rules::{layering, service_http, smart_components};

const MAX_HINTS: usize = 30;

const SHARED_CLIENT_TARGET: &str = "app/services (api-client)";

fn hint(target: &str, kind: HintKind, rationale: &str, suggestion: &str) -> TestHint {
    TestHint {
        target: target.to_string(),
        kind,
        rationale: rationale.to_string(),
        suggestion: suggestion.to_string(),
    }
}

fn hints_for(issue: &Issue) -> Vec<TestHint> {
    let mut hints = Vec::new();

    if issue.id == service_http::DIRECT_HTTP_SERVICES {
        hints.push(hint(
            SHARED_CLIENT_TARGET,
            HintKind::Contract,
            "Many services perform HTTP directly: high risk of divergence.",
            "Create a single apiClient and test it against mocked responses (200/400/401/500), JSON parsing, and headers (Authorization, Content-Type). Then unit test the services against the mocked client.",
        ));
    }

    if issue.id == service_http::DIRECT_HTTP_SERVICES
        || issue.id == service_http::DUPLICATE_SERVICE_CLIENTS
    {
        if let Some(target) = issue.evidence.as_ref().and_then(|e| e.first_example()) {
            hints.push(hint(
                target,
                HintKind::Contract,
                "Requests are made inconsistently across services.",
                "Create a single apiClient and test: (1) headers/auth, (2) error handling, (3) parsing and types. Simulate responses with a mock server.",
            ));
        }
    }

    if issue.id.starts_with(layering::UI_DIRECT_HTTP)
        || issue.id.starts_with(layering::UI_IMPORTS_API)
    {
        if let Some(file) = issue.evidence.as_ref().and_then(|e| e.file()) {
            hints.push(hint(
                file,
                HintKind::Integration,
                "The UI is coupled to HTTP calls and prone to divergence.",
                "Extract the call into a service or hook and test it with a mocked HTTP client; keep the UI on render tests.",
            ));
        }
    }

    if issue.id.starts_with(smart_components::SMART_COMPONENT) {
        if let Some(file) = issue.evidence.as_ref().and_then(|e| e.file()) {
            hints.push(hint(
                file,
                HintKind::Unit,
                "Components with heavy logic tend to break under refactors.",
                "Extract the logic into a pure hook or utility functions and test those directly; leave minimal render/snapshot tests for the UI.",
            ));
        }
    }

    hints
}

pub fn build_test_hints(issues: &[Issue]) -> Vec<TestHint> {
    let mut hints = Vec::new();
    let mut seen: HashSet<(HintKind, String, String)> = HashSet::new();

    for issue in issues {
        for hint in hints_for(issue) {
            let key = (hint.kind, hint.target.clone(), hint.rationale.clone());
            if seen.insert(key) {
                hints.push(hint);
            }
            if hints.len() == MAX_HINTS {
                return hints;
            }
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evidence, ServiceHttpUse, Severity};

    fn layer_issue(id: &str, file: &str) -> Issue {
        Issue::new(
            id,
            Severity::High,
            "t",
            "e",
            Some(Evidence::File {
                file: file.to_string(),
            }),
        )
    }

    #[test]
    fn direct_http_issue_yields_client_and_example_hints() {
        let issue = Issue::new(
            service_http::DIRECT_HTTP_SERVICES,
            Severity::High,
            "t",
            "e",
            Some(Evidence::HttpServices {
                count: 3,
                examples: vec![ServiceHttpUse {
                    file: "app/services/a.service.ts".to_string(),
                    url_hints: vec![],
                }],
            }),
        );
        let hints = build_test_hints(&[issue]);
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[0].target, SHARED_CLIENT_TARGET);
        assert_eq!(hints[0].kind, HintKind::Contract);
        assert_eq!(hints[1].target, "app/services/a.service.ts");
    }

    #[test]
    fn identical_key_is_dropped_not_merged() {
        let a = layer_issue(layering::UI_DIRECT_HTTP, "components/Cart.tsx");
        let b = layer_issue(layering::UI_IMPORTS_API, "components/Cart.tsx");
        // same (kind, target, rationale) from two different issues
        let hints = build_test_hints(&[a, b]);
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].kind, HintKind::Integration);
    }

    #[test]
    fn output_is_capped_at_thirty() {
        let issues: Vec<Issue> = (0..50)
            .map(|i| layer_issue(layering::UI_DIRECT_HTTP, &format!("components/C{i}.tsx")))
            .collect();
        assert_eq!(build_test_hints(&issues).len(), 30);
    }

    #[test]
    fn unrelated_issues_produce_no_hints() {
        let issue = Issue::new("CFG-ESLINT-001", Severity::High, "t", "e", None);
        assert!(build_test_hints(&[issue]).is_empty());
    }
}
