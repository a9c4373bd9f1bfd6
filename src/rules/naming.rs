//! Naming-convention checks for components, hooks, modules, and directories.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::classify::{classify, FileRole};
use crate::core::{Evidence, Issue, Severity};

pub const COMPONENT_NAME: &str = "NAMING-COMP-001";
pub const HOOK_NAME: &str = "NAMING-HOOK-001";
pub const MODULE_NAME: &str = "NAMING-MOD-001";
pub const DIRECTORY_NAME: &str = "NAMING-DIR-001";

static PASCAL_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());
static KEBAB_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());
static LOWER_CAMEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][A-Za-z0-9]*$").unwrap());
static HOOK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^use[A-Z]").unwrap());
static SCRIPT_EXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(ts|tsx|js|jsx|mjs|cjs)$").unwrap());
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

fn camel_to_kebab(input: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(input, "$1-$2")
        .replace('_', "-")
        .to_lowercase()
}

/// Accepts `<kebab>.<suffix>` where the suffix matches the file's role.
fn dot_suffix_valid(base: &str, role: FileRole) -> bool {
    let mut parts = base.split('.');
    let (Some(name), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if name.is_empty() || suffix.is_empty() || !KEBAB_CASE.is_match(name) {
        return false;
    }
    match role {
        FileRole::Service => suffix == "service",
        FileRole::Api => suffix == "api",
        FileRole::Util => suffix == "util" || suffix == "utils",
        _ => false,
    }
}

pub fn detect(files: &[String]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for f in files {
        let norm = f.replace('\\', "/");
        let parts: Vec<&str> = norm.split('/').collect();
        let file_name = parts.last().copied().unwrap_or(norm.as_str());
        let base = SCRIPT_EXT.replace(file_name, "").to_string();
        let ext = file_name.rsplit('.').next().unwrap_or("");

        let role = classify(&norm);

        if ext == "tsx" && role == FileRole::Component && !PASCAL_CASE.is_match(&base) {
            issues.push(Issue::new(
                COMPONENT_NAME,
                Severity::Medium,
                "Component file name is not PascalCase",
                "Components are conventionally PascalCase (e.g. UserCard.tsx); it keeps UI files easy to tell apart from logic.",
                Some(Evidence::Naming {
                    file: norm.clone(),
                    expected: "PascalCase.tsx".to_string(),
                    rename_suggestion: None,
                }),
            ));
        }

        if role == FileRole::Hook && !HOOK_PREFIX.is_match(&base) {
            issues.push(Issue::new(
                HOOK_NAME,
                Severity::Medium,
                "Hook file name does not follow the use-prefix convention",
                "Hooks start with useXxx (e.g. useCreateVoucher.ts); anything else confuses readers and autocomplete.",
                Some(Evidence::Naming {
                    file: norm.clone(),
                    expected: "useXxx.ts".to_string(),
                    rename_suggestion: None,
                }),
            ));
        }

        if matches!(role, FileRole::Service | FileRole::Api | FileRole::Util) {
            let ok = dot_suffix_valid(&base, role)
                || KEBAB_CASE.is_match(&base)
                || (role == FileRole::Util
                    && (base.ends_with(".util") || base.ends_with(".utils")));

            if !ok {
                // Only suggest a rename for plain names; guessing a suffix is noise.
                let suggested_base = if base.contains('.') {
                    base.clone()
                } else {
                    camel_to_kebab(&base)
                };
                let suggested = if parts.len() > 1 {
                    format!(
                        "{}/{suggested_base}.{ext}",
                        parts[..parts.len() - 1].join("/")
                    )
                } else {
                    format!("{suggested_base}.{ext}")
                };

                issues.push(Issue::new(
                    MODULE_NAME,
                    Severity::Low,
                    "Service/API/util file name outside convention",
                    "Utils: kebab-case.ts or <kebab>.utils.ts. Services: <kebab>.service.ts. APIs: <kebab>.api.ts.",
                    Some(Evidence::Naming {
                        file: norm.clone(),
                        expected: "kebab-case.ts | <kebab>.service.ts | <kebab>.api.ts | <kebab>.utils.ts"
                            .to_string(),
                        rename_suggestion: Some(suggested),
                    }),
                ));
            }
        }

        for dir in &parts[..parts.len().saturating_sub(1)] {
            if dir.is_empty() || dir.starts_with('.') || *dir == "src" {
                continue;
            }
            if !KEBAB_CASE.is_match(dir) && !LOWER_CAMEL.is_match(dir) {
                issues.push(Issue::new(
                    DIRECTORY_NAME,
                    Severity::Low,
                    "Directory name outside the accepted styles",
                    "Mixed directory styles add friction; pick kebab-case or lowerCamel and keep it.",
                    Some(Evidence::Directory {
                        file: norm.clone(),
                        segment: dir.to_string(),
                    }),
                ));
                break;
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_one(path: &str) -> Vec<Issue> {
        detect(&[path.to_string()])
    }

    #[test]
    fn camel_to_kebab_handles_boundaries() {
        assert_eq!(camel_to_kebab("formatHorarioSku"), "format-horario-sku");
        assert_eq!(camel_to_kebab("already-kebab"), "already-kebab");
        assert_eq!(camel_to_kebab("snake_case"), "snake-case");
    }

    #[test]
    fn component_must_be_pascal_case() {
        let issues = detect_one("components/userCard.tsx");
        assert_eq!(issues[0].id, COMPONENT_NAME);
        assert!(detect_one("components/UserCard.tsx").is_empty());
    }

    #[test]
    fn hook_must_use_prefix() {
        let issues = detect_one("hooks/cartHelpers.ts");
        assert!(issues.iter().any(|i| i.id == HOOK_NAME));
        assert!(detect_one("hooks/useCart.ts").is_empty());
    }

    #[test]
    fn module_names_accept_kebab_or_role_suffix() {
        assert!(detect_one("app/services/vouchers.service.ts").is_empty());
        assert!(detect_one("src/utils/format-horario-sku.ts").is_empty());
        assert!(detect_one("src/utils/date.utils.ts").is_empty());

        let issues = detect_one("app/services/VoucherService.ts");
        assert_eq!(issues[0].id, MODULE_NAME);
        match issues[0].evidence.as_ref() {
            Some(Evidence::Naming {
                rename_suggestion, ..
            }) => assert_eq!(
                rename_suggestion.as_deref(),
                Some("app/services/voucher-service.ts")
            ),
            other => panic!("unexpected evidence: {other:?}"),
        }
    }

    #[test]
    fn one_directory_issue_per_file_at_most() {
        let issues = detect_one("My_Stuff/Other_Stuff/readme.txt");
        let dir_issues: Vec<_> = issues.iter().filter(|i| i.id == DIRECTORY_NAME).collect();
        assert_eq!(dir_issues.len(), 1);
    }

    #[test]
    fn src_and_dot_directories_are_skipped() {
        assert!(detect_one("src/.github/workflow.yml").is_empty());
    }
}
