use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

use webaudit::core::source::SourceCache;
use webaudit::{build_refactor_plan, build_test_hints, detect_project, rules, Severity};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "package.json",
        indoc! {r#"
            {
              "name": "legacy-shop",
              "scripts": { "dev": "next dev" },
              "dependencies": { "next": "14.0.0", "react": "18.0.0" },
              "devDependencies": { "typescript": "5.0.0" }
            }
        "#},
    );
    write(root, "eslint.config.js", "export default [];");
    write(root, ".eslintrc.json", "{}");

    // three services doing HTTP directly, two of them hitting the same resource
    write(
        root,
        "app/services/vouchers.service.ts",
        r#"export const get = (id) => fetch(`/api/vouchers/${id}`);"#,
    );
    write(
        root,
        "app/services/admin.service.ts",
        r#"export const byId = (code) => fetch(`/api/vouchers/${code}`);"#,
    );
    write(
        root,
        "app/services/reservas.service.ts",
        r#"export const list = () => fetch(process.env.API_URL + "/api/reservas?page=1");"#,
    );

    // component fetching on its own
    write(
        root,
        "components/VoucherList.tsx",
        indoc! {r#"
            import { useState, useEffect } from "react";
            export function VoucherList() {
              const [rows, setRows] = useState([]);
              useEffect(() => { fetch("/api/vouchers").then(r => r.json()).then(setRows); }, []);
              return rows.map(render);
            }
        "#},
    );

    dir
}

#[test]
fn full_pipeline_over_a_legacy_fixture() {
    let dir = fixture();
    let root = dir.path();

    let files = webaudit::io::walker::list_repo_files(root).unwrap();
    let project = detect_project(root, &files).unwrap();
    assert!(project.uses_route_framework);
    assert!(project.uses_type_system);

    let sources = SourceCache::load(root, &files);
    let issues = rules::run_all(&project, &files, &sources);
    let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();

    // mixed lint config formats at the root
    assert!(ids.contains(&"CFG-CONFLICT-ESLINT-001"));
    // route framework + type system but no tsconfig.json
    assert!(ids.contains(&"CFG-TS-001"));
    // component fetching directly
    assert!(ids.contains(&"ARCH-LAYER-001"));
    // smart component: fetch + state + map
    assert!(ids.contains(&"UI-SMART-001"));
    // three services with direct HTTP
    assert!(ids.contains(&"SERVICE-HTTP-001"));
    // /api/vouchers/${id} and /api/vouchers/${code} normalize to the same resource
    let dup = issues
        .iter()
        .find(|i| i.id == "API-DUP-ENDPOINT-001")
        .expect("duplicate endpoint issue");
    assert_eq!(dup.severity, Severity::High);

    let hints = build_test_hints(&issues);
    assert!(!hints.is_empty());
    assert!(hints.len() <= 30);
    assert!(hints.iter().any(|h| h.target == "app/services (api-client)"));

    let plan = build_refactor_plan(&issues);
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|s| s.files.len() <= 10));
}

#[test]
fn detector_output_is_deterministic() {
    let dir = fixture();
    let root = dir.path();

    let files = webaudit::io::walker::list_repo_files(root).unwrap();
    let project = detect_project(root, &files).unwrap();
    let sources = SourceCache::load(root, &files);

    let first = rules::run_all(&project, &files, &sources);
    let second = rules::run_all(&project, &files, &sources);
    assert_eq!(first, second);
}

#[test]
fn missing_manifest_fails_before_any_rule_runs() {
    let dir = TempDir::new().unwrap();
    let err = detect_project(dir.path(), &[]).unwrap_err();
    assert!(err.to_string().contains("package.json"));
}
