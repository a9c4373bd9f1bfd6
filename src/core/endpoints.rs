//! Extraction and normalization of API endpoint literals.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::source::SourceCache;
use crate::core::EndpointGroup;

static ENDPOINT_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["'`]\s*/api/[^"'`]+["'`]"#).unwrap());

static INTERPOLATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Scan raw text for quoted literals that look like absolute API paths.
///
/// Returns raw (un-normalized) endpoints in first-occurrence order, without
/// deduplication.
pub fn extract_endpoints(text: &str) -> Vec<String> {
    ENDPOINT_LITERAL
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_matches(|c| c == '"' || c == '\'' || c == '`')
                .trim()
                .to_string()
        })
        .collect()
}

/// Normalize an endpoint for grouping: drop the query string, replace each
/// `${...}` interpolation with `:param`, and collapse purely numeric path
/// segments to `:id`. Idempotent.
pub fn normalize_endpoint(raw: &str) -> String {
    let path = raw.split('?').next().unwrap_or(raw);
    let interpolated = INTERPOLATION.replace_all(path, ":param");

    interpolated
        .split('/')
        .map(|seg| {
            if !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()) {
                ":id"
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Group normalized endpoints by the set of files referencing them.
///
/// Groups come back sorted by reference count descending, then by endpoint,
/// so output is stable regardless of input order.
pub fn group_endpoints(files: &[String], sources: &SourceCache) -> Vec<EndpointGroup> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for file in files {
        let src = sources.get(file);
        for raw in extract_endpoints(src) {
            map.entry(normalize_endpoint(&raw))
                .or_default()
                .insert(file.clone());
        }
    }

    let mut groups: Vec<EndpointGroup> = map
        .into_iter()
        .map(|(endpoint, files)| EndpointGroup {
            endpoint,
            count: files.len(),
            files: files.into_iter().collect(),
        })
        .collect();

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.endpoint.cmp(&b.endpoint)));
    groups
}
