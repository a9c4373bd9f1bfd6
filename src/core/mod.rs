//! Shared data model for issues, derived hints, and the assembled report.

pub mod classify;
pub mod endpoints;
pub mod source;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::discovery::ProjectInfo;
use crate::report::context::AppContext;

/// Severity attached to each issue by its producing rule; never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{s}")
    }
}

/// One heuristic finding. Created exactly once by a rule and read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

impl Issue {
    pub fn new(
        id: &str,
        severity: Severity,
        title: &str,
        explanation: &str,
        evidence: Option<Evidence>,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            explanation: explanation.to_string(),
            evidence,
        }
    }
}

/// Evidence payloads, one shape per rule family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// Script table from the project manifest.
    Scripts { scripts: BTreeMap<String, String> },
    /// Conflicting root-level configuration files.
    ConflictingFiles { files: Vec<String> },
    /// Coexisting flat and legacy lint configurations.
    LintConfigs { flat: Vec<String>, legacy: Vec<String> },
    /// A file whose name violates the expected pattern.
    Naming {
        file: String,
        expected: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        rename_suggestion: Option<String>,
    },
    /// A directory segment outside the accepted naming styles.
    Directory { file: String, segment: String },
    /// A single offending file.
    File { file: String },
    /// Signal vector for a component carrying too much logic.
    SmartSignals {
        file: String,
        score: u32,
        signals: SmartSignals,
    },
    /// Files that look like independent HTTP clients.
    ClientCandidates { candidates: Vec<String> },
    /// Top-level roots containing service files.
    ServiceRoots { roots: Vec<String>, count: usize },
    /// Service files performing HTTP directly, with URL hints.
    HttpServices {
        count: usize,
        examples: Vec<ServiceHttpUse>,
    },
    /// Environment variables used as base URLs across services.
    EnvUsage { env_vars: Vec<EnvVarUsage> },
    /// Normalized endpoints referenced from more than one service.
    DuplicateEndpoints { duplicates: Vec<EndpointGroup> },
}

impl Evidence {
    /// The single offending file, when the payload carries one.
    pub fn file(&self) -> Option<&str> {
        match self {
            Evidence::Naming { file, .. }
            | Evidence::Directory { file, .. }
            | Evidence::File { file }
            | Evidence::SmartSignals { file, .. } => Some(file),
            _ => None,
        }
    }

    /// First concrete file a derived hint can point at.
    pub fn first_example(&self) -> Option<&str> {
        match self {
            Evidence::HttpServices { examples, .. } => {
                examples.first().map(|e| e.file.as_str())
            }
            Evidence::ClientCandidates { candidates } => {
                candidates.first().map(String::as_str)
            }
            _ => self.file(),
        }
    }
}

/// Independent signals used by the smart-component rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartSignals {
    pub network_call: bool,
    pub service_import: bool,
    pub state_or_effect: bool,
    pub collection_transforms: bool,
    pub formatting_logic: bool,
}

impl SmartSignals {
    pub fn score(&self) -> u32 {
        [
            self.network_call,
            self.service_import,
            self.state_or_effect,
            self.collection_transforms,
            self.formatting_logic,
        ]
        .iter()
        .filter(|s| **s)
        .count() as u32
    }
}

/// A service file doing HTTP on its own, with the URL-ish literals it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHttpUse {
    pub file: String,
    pub url_hints: Vec<String>,
}

/// One environment variable referenced as a base URL, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarUsage {
    pub env: String,
    pub used_in: Vec<String>,
    pub count: usize,
}

/// A normalized endpoint and the files referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointGroup {
    pub endpoint: String,
    pub files: Vec<String>,
    pub count: usize,
}

/// Suggested testing strategy derived from one or more issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestHint {
    pub target: String,
    pub kind: HintKind,
    pub rationale: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Unit,
    Integration,
    Contract,
}

/// Pre-authored remediation step emitted when its trigger issue is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefactorStep {
    pub title: String,
    pub impact: Severity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    pub rationale: String,
    pub actions: Vec<String>,
    pub related_issue_ids: Vec<String>,
}

/// Size and extension statistics over the walked file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub total_files: usize,
    pub by_ext: BTreeMap<String, usize>,
    pub largest_files: Vec<FileInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: String,
    pub ext: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub generated_at: DateTime<Utc>,
    pub repo_root: PathBuf,
}

/// The run's terminal artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub project: ProjectInfo,
    pub inventory: Inventory,
    pub issues: Vec<Issue>,
    pub test_hints: Vec<TestHint>,
    pub refactor_plan: Vec<RefactorStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AppContext>,
}
