//! Derivation of test hints, the refactor plan, and the assembled report.

pub mod context;
pub mod refactor_plan;
pub mod test_hints;

use chrono::Utc;
use std::path::PathBuf;

use crate::core::{Inventory, Issue, RefactorStep, Report, ReportMeta, TestHint};
use crate::discovery::ProjectInfo;
use crate::report::context::AppContext;

pub use refactor_plan::build_refactor_plan;
pub use test_hints::build_test_hints;

#[allow(clippy::too_many_arguments)]
pub fn assemble(
    repo_root: PathBuf,
    project: ProjectInfo,
    inventory: Inventory,
    issues: Vec<Issue>,
    test_hints: Vec<TestHint>,
    refactor_plan: Vec<RefactorStep>,
    context: Option<AppContext>,
) -> Report {
    Report {
        meta: ReportMeta {
            generated_at: Utc::now(),
            repo_root,
        },
        project,
        inventory,
        issues,
        test_hints,
        refactor_plan,
        context,
    }
}
