// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod discovery;
pub mod error;
pub mod io;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    classify::{classify, FileRole},
    endpoints::{extract_endpoints, group_endpoints, normalize_endpoint},
    source::SourceCache,
    EndpointGroup, Evidence, HintKind, Issue, RefactorStep, Report, Severity, TestHint,
};

pub use crate::discovery::{detect_project, ProjectInfo};
pub use crate::error::AuditError;
pub use crate::io::output::{create_writer, ReportWriter};
pub use crate::report::{build_refactor_plan, build_test_hints};
