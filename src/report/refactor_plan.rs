//! Pre-authored remediation steps keyed on specific trigger issues.

use crate::core::{Evidence, Issue, RefactorStep, Severity};
use crate::rules::{duplicate_endpoints, service_http};

const MAX_SAMPLE_FILES: usize = 10;

fn sample_files(issue: &Issue) -> Vec<String> {
    match issue.evidence.as_ref() {
        Some(Evidence::HttpServices { examples, .. }) => examples
            .iter()
            .take(MAX_SAMPLE_FILES)
            .map(|e| e.file.clone())
            .collect(),
        Some(Evidence::DuplicateEndpoints { duplicates }) => {
            let mut files = Vec::new();
            for group in duplicates {
                for f in &group.files {
                    if !files.contains(f) {
                        files.push(f.clone());
                    }
                    if files.len() == MAX_SAMPLE_FILES {
                        return files;
                    }
                }
            }
            files
        }
        _ => Vec::new(),
    }
}

pub fn build_refactor_plan(issues: &[Issue]) -> Vec<RefactorStep> {
    let mut plan = Vec::new();

    if let Some(issue) = issues
        .iter()
        .find(|i| i.id == service_http::DIRECT_HTTP_SERVICES)
    {
        plan.push(RefactorStep {
            title: "Create a single apiClient and migrate services onto it".to_string(),
            impact: Severity::High,
            files: sample_files(issue),
            rationale: "Centralizing HTTP removes divergence in headers, auth, errors, and parsing, and enables contract tests. It lowers the cost of every later refactor.".to_string(),
            actions: vec![
                "Create `app/services/api-client.ts` (or `http-client.ts`) with baseUrl, headers, auth, error handling, and shared parsing.".to_string(),
                "Define `get/post/put/delete` helpers and a typed `request<T>()` wrapper.".to_string(),
                "Migrate one service first and verify the UI is unchanged.".to_string(),
                "Migrate the rest, deleting the per-file fetch/header duplication.".to_string(),
            ],
            related_issue_ids: vec![service_http::DIRECT_HTTP_SERVICES.to_string()],
        });
    }

    if let Some(issue) = issues
        .iter()
        .find(|i| i.id == duplicate_endpoints::DUPLICATE_ENDPOINTS)
    {
        plan.push(RefactorStep {
            title: "Consolidate duplicated endpoints per resource".to_string(),
            impact: Severity::High,
            files: sample_files(issue),
            rationale: "Keeps the same resource from accumulating duplicated functions that drift over time; stabilizes contracts and simplifies testing.".to_string(),
            actions: vec![
                "Group the duplicates by resource.".to_string(),
                "Pick one module per resource as the single source.".to_string(),
                "Remove or deprecate the duplicated functions and unify the response types.".to_string(),
            ],
            related_issue_ids: vec![duplicate_endpoints::DUPLICATE_ENDPOINTS.to_string()],
        });
    }

    plan
}
