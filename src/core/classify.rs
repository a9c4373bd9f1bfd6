//! Role classification for repository-relative paths.
//!
//! Classification is a pure function of the path string: directory checks and
//! suffix checks run on the lowercased, separator-normalized path, while the
//! hook naming convention (`use` + uppercase letter) keeps the original case.
//! Rules are evaluated top to bottom and the first match wins, so a path that
//! satisfies several patterns still resolves to exactly one role.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Api,
    Service,
    Component,
    Hook,
    Context,
    Util,
    Page,
    Type,
    Unknown,
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileRole::Api => "api",
            FileRole::Service => "service",
            FileRole::Component => "component",
            FileRole::Hook => "hook",
            FileRole::Context => "context",
            FileRole::Util => "util",
            FileRole::Page => "page",
            FileRole::Type => "type",
            FileRole::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

static HOOK_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|/)use[A-Z]").unwrap());

/// True when `path` sits under a directory named `dir` at any depth.
fn in_dir(path: &str, dir: &str) -> bool {
    path.starts_with(&format!("{dir}/")) || path.contains(&format!("/{dir}/"))
}

pub fn classify(path: &str) -> FileRole {
    let norm = path.replace('\\', "/");
    let p = norm.to_lowercase();

    if in_dir(&p, "types") || p.ends_with(".d.ts") {
        return FileRole::Type;
    }
    if in_dir(&p, "app") && p.ends_with("/page.tsx") {
        return FileRole::Page;
    }
    if in_dir(&p, "services") || p.ends_with(".service.ts") || p.ends_with(".service.tsx") {
        return FileRole::Service;
    }
    if in_dir(&p, "api") || p.ends_with(".api.ts") || p.ends_with(".api.tsx") {
        return FileRole::Api;
    }
    if in_dir(&p, "contexts") || p.ends_with("context.ts") || p.ends_with("context.tsx") {
        return FileRole::Context;
    }
    if in_dir(&p, "hooks") || HOOK_SEGMENT.is_match(&norm) {
        return FileRole::Hook;
    }
    if in_dir(&p, "components") && (p.ends_with(".tsx") || p.ends_with(".ts")) {
        return FileRole::Component;
    }
    if in_dir(&p, "utils")
        || in_dir(&p, "lib")
        || p.ends_with(".util.ts")
        || p.ends_with(".utils.ts")
    {
        return FileRole::Util;
    }

    FileRole::Unknown
}
