//! Orchestration of one analysis run.

use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::core::source::SourceCache;
use crate::io::{inventory, output, walker};
use crate::{discovery, report, rules};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub include_context: bool,
}

pub fn run(config: AnalyzeConfig) -> Result<()> {
    let root = config.path.canonicalize().unwrap_or(config.path.clone());

    let files = walker::list_repo_files(&root)?;
    debug!("walked {} files under {}", files.len(), root.display());

    // Fatal precondition: a missing manifest aborts before any rule runs.
    let project = discovery::detect_project(&root, &files)?;

    let sources = SourceCache::load(&root, &files);
    let issues = rules::run_all(&project, &files, &sources);
    info!("{} issues from {} files", issues.len(), files.len());

    let test_hints = report::build_test_hints(&issues);
    let refactor_plan = report::build_refactor_plan(&issues);
    let inventory = inventory::build_inventory(&root, &files);
    let context = config
        .include_context
        .then(|| report::context::build_app_context(&project, &files, &sources));

    let assembled = report::assemble(
        root,
        project,
        inventory,
        issues,
        test_hints,
        refactor_plan,
        context,
    );

    let mut writer = output::create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&assembled)?;
    Ok(())
}
