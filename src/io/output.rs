//! Report writers for the supported output formats.

use anyhow::Result;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::{Report, Severity};

pub trait ReportWriter {
    fn write_report(&mut self, report: &Report) -> Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Box::new(File::create(path)?)
        }
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "# Webaudit Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Root: {}", report.meta.repo_root.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_project(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "## Project")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Property | Value |")?;
        writeln!(self.writer, "|----------|-------|")?;
        writeln!(
            self.writer,
            "| Name | {} |",
            report.project.name.as_deref().unwrap_or("(unnamed)")
        )?;
        writeln!(
            self.writer,
            "| Route framework | {} |",
            report.project.uses_route_framework
        )?;
        writeln!(
            self.writer,
            "| Type system | {} |",
            report.project.uses_type_system
        )?;
        writeln!(self.writer, "| Files | {} |", report.inventory.total_files)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_issues(&mut self, report: &Report) -> Result<()> {
        if report.issues.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Issues ({})", report.issues.len())?;
        writeln!(self.writer)?;

        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            let group: Vec<_> = report
                .issues
                .iter()
                .filter(|i| i.severity == severity)
                .collect();
            if group.is_empty() {
                continue;
            }

            writeln!(self.writer, "### {severity}")?;
            writeln!(self.writer)?;
            for issue in group {
                writeln!(self.writer, "- **{}** {}", issue.id, issue.title)?;
                writeln!(self.writer, "  {}", issue.explanation)?;
                if let Some(file) = issue.evidence.as_ref().and_then(|e| e.file()) {
                    writeln!(self.writer, "  `{file}`")?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_test_hints(&mut self, report: &Report) -> Result<()> {
        if report.test_hints.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Test Hints")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Target | Kind | Rationale |")?;
        writeln!(self.writer, "|--------|------|-----------|")?;
        for hint in &report.test_hints {
            writeln!(
                self.writer,
                "| `{}` | {:?} | {} |",
                hint.target, hint.kind, hint.rationale
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_refactor_plan(&mut self, report: &Report) -> Result<()> {
        if report.refactor_plan.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Refactor Plan")?;
        writeln!(self.writer)?;
        for (i, step) in report.refactor_plan.iter().enumerate() {
            writeln!(self.writer, "### {}. {}", i + 1, step.title)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "Impact: {} — {}", step.impact, step.rationale)?;
            writeln!(self.writer)?;
            for action in &step.actions {
                writeln!(self.writer, "- {action}")?;
            }
            if !step.files.is_empty() {
                writeln!(self.writer)?;
                writeln!(self.writer, "Files:")?;
                for file in &step.files {
                    writeln!(self.writer, "- `{file}`")?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.write_header(report)?;
        self.write_project(report)?;
        self.write_issues(report)?;
        self.write_test_hints(report)?;
        self.write_refactor_plan(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::Low => "LOW".dimmed(),
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "{}", "Webaudit Report".bold().blue())?;
        writeln!(self.writer, "{}", "===============".blue())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Project: {}",
            report.project.name.as_deref().unwrap_or("(unnamed)")
        )?;
        writeln!(
            self.writer,
            "Files: {}  Issues: {}",
            report.inventory.total_files,
            report.issues.len()
        )?;
        writeln!(self.writer)?;

        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            for issue in report.issues.iter().filter(|i| i.severity == severity) {
                writeln!(
                    self.writer,
                    "{} {} {}",
                    severity_label(severity),
                    issue.id.cyan(),
                    issue.title
                )?;
                if let Some(file) = issue.evidence.as_ref().and_then(|e| e.file()) {
                    writeln!(self.writer, "       {file}")?;
                }
            }
        }

        if !report.refactor_plan.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Refactor plan:".bold())?;
            for (i, step) in report.refactor_plan.iter().enumerate() {
                writeln!(
                    self.writer,
                    "  {}. {} [{}]",
                    i + 1,
                    step.title,
                    severity_label(step.impact)
                )?;
            }
        }

        if !report.test_hints.is_empty() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} test hints derived; see JSON/markdown output for details",
                report.test_hints.len()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, Issue, Report, ReportMeta};
    use crate::discovery::ProjectInfo;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                generated_at: Utc::now(),
                repo_root: "/tmp/app".into(),
            },
            project: ProjectInfo {
                name: Some("shop".to_string()),
                ..ProjectInfo::default()
            },
            inventory: Inventory {
                total_files: 2,
                by_ext: BTreeMap::new(),
                largest_files: Vec::new(),
            },
            issues: vec![Issue::new(
                "CFG-ESLINT-001",
                Severity::High,
                "No lint tooling detected",
                "Add a linter to catch issues early.",
                None,
            )],
            test_hints: Vec::new(),
            refactor_plan: Vec::new(),
            context: None,
        }
    }

    #[test]
    fn json_writer_emits_valid_report() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["issues"][0]["id"], "CFG-ESLINT-001");
        assert_eq!(value["issues"][0]["severity"], "high");
    }

    #[test]
    fn markdown_writer_emits_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Webaudit Report"));
        assert!(text.contains("## Issues (1)"));
        assert!(text.contains("### high"));
        assert!(text.contains("CFG-ESLINT-001"));
    }

    #[test]
    fn terminal_writer_prints_issue_ids() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("CFG-ESLINT-001"));
    }
}
