//! Components carrying enough logic to deserve extraction into hooks/services.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::classify::{classify, FileRole};
use crate::core::source::SourceCache;
use crate::core::{Evidence, Issue, Severity, SmartSignals};
use crate::rules::layering::{FETCH_LIKE, IMPORTS_SERVICES};

pub const SMART_COMPONENT: &str = "UI-SMART-001";

const SCORE_THRESHOLD: u32 = 3;

static STATE_OR_EFFECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\buseState\s*\(|\buseReducer\s*\(|\buseEffect\s*\(").unwrap());
static FORMATTING_LOGIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdate-fns\b|format\(|parseISO\(|toLocaleString\(").unwrap());
static COLLECTION_TRANSFORMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"map\(|reduce\(|filter\(").unwrap());

pub fn detect(files: &[String], sources: &SourceCache) -> Vec<Issue> {
    let mut issues = Vec::new();

    for f in files {
        if !f.ends_with(".tsx") {
            continue;
        }
        let role = classify(f);
        if !matches!(role, FileRole::Component | FileRole::Page) {
            continue;
        }
        let src = sources.get(f);
        if src.is_empty() {
            continue;
        }

        let signals = SmartSignals {
            network_call: FETCH_LIKE.is_match(src),
            service_import: IMPORTS_SERVICES.is_match(src),
            state_or_effect: STATE_OR_EFFECT.is_match(src),
            collection_transforms: COLLECTION_TRANSFORMS.is_match(src),
            formatting_logic: FORMATTING_LOGIC.is_match(src),
        };
        let score = signals.score();

        if score >= SCORE_THRESHOLD {
            issues.push(Issue::new(
                SMART_COMPONENT,
                Severity::Low,
                "Component is probably 'smart' (heavy logic/effects)",
                "If this component keeps growing, extract the logic into a hook or service and leave a presentational component behind; that reduces duplication and makes it testable.",
                Some(Evidence::SmartSignals {
                    file: f.clone(),
                    score,
                    signals,
                }),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::collections::HashMap;

    fn run(path: &str, src: &str) -> Vec<Issue> {
        let mut map = HashMap::new();
        map.insert(path.to_string(), src.to_string());
        detect(&[path.to_string()], &SourceCache::from_map(map))
    }

    #[test]
    fn three_signals_trigger_the_rule() {
        let src = indoc! {r#"
            import { useState, useEffect } from "react";
            export function Cart() {
              const [items, setItems] = useState([]);
              useEffect(() => { fetch("/api/cart").then(r => r.json()).then(setItems); }, []);
              return items.map(render);
            }
        "#};
        let issues = run("components/Cart.tsx", src);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, SMART_COMPONENT);
        assert_eq!(issues[0].severity, Severity::Low);
        match issues[0].evidence.as_ref() {
            Some(Evidence::SmartSignals { score, signals, .. }) => {
                assert_eq!(*score, 3);
                assert!(signals.network_call);
                assert!(signals.state_or_effect);
                assert!(signals.collection_transforms);
                assert!(!signals.service_import);
            }
            other => panic!("unexpected evidence: {other:?}"),
        }
    }

    #[test]
    fn two_signals_stay_quiet() {
        let src = indoc! {r#"
            import { useState } from "react";
            export function Badge({ items }) {
              const [open, setOpen] = useState(false);
              return items.filter(Boolean).length;
            }
        "#};
        assert!(run("components/Badge.tsx", src).is_empty());
    }

    #[test]
    fn non_tsx_and_non_ui_files_are_skipped() {
        let busy = "fetch(1); useState(2); map(3);";
        assert!(run("app/services/cart.service.ts", busy).is_empty());
        assert!(run("hooks/useCart.tsx", busy).is_empty());
    }
}
