//! Console output for scan reports
//!
//! Each line of a report is prefixed with a colored status marker:
//! `x` error, `!` warning, `+` success, `i` info.

use colored::{ColoredString, Colorize};
use std::io::{self, Write};

use crate::scan::{FileReport, ScanEntry, ScanReport};
use crate::validation::{ValidationFinding, ValidationSeverity};

const RULE_WIDTH: usize = 60;

/// Title printed in the header banner
pub const TITLE: &str = "Agent Configuration Validator";

/// Final banner line on success
pub const PASSED_MESSAGE: &str = "All validations passed!";

/// Final banner line on failure
pub const FAILED_MESSAGE: &str = "Validation failed. Please fix the errors above.";

/// Severity coloring utilities
pub struct SeverityColorizer;

impl SeverityColorizer {
    /// Get the marker for a severity level
    pub fn icon(severity: ValidationSeverity) -> ColoredString {
        match severity {
            ValidationSeverity::Error => "x".red().bold(),
            ValidationSeverity::Warning => "!".yellow().bold(),
            ValidationSeverity::Info => "i".blue(),
        }
    }

    /// Get the marker for a passed check
    pub fn success_icon() -> ColoredString {
        "+".green().bold()
    }
}

/// Renders a [`ScanReport`] as human-readable text
pub struct ConsoleReporter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    /// Render the whole report, header to final banner
    pub fn render(&mut self, report: &ScanReport) -> io::Result<()> {
        self.render_header()?;

        for entry in &report.entries {
            match entry {
                ScanEntry::Notice(finding) => self.render_notice(finding)?,
                ScanEntry::File(file) => self.render_file(file)?,
            }
            writeln!(self.out)?;
        }

        self.render_summary(report.all_valid)?;
        self.out.flush()
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    fn render_header(&mut self) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "{}", TITLE.cyan().bold())?;
        self.rule()?;
        writeln!(self.out)
    }

    fn render_notice(&mut self, finding: &ValidationFinding) -> io::Result<()> {
        writeln!(
            self.out,
            "{} [{}] {}",
            SeverityColorizer::icon(finding.severity),
            finding.code.dimmed(),
            finding.message
        )
    }

    fn render_file(&mut self, file: &FileReport) -> io::Result<()> {
        writeln!(self.out, "Validating {}...", file.path.display())?;

        for finding in &file.result.findings {
            let message = match finding.severity {
                ValidationSeverity::Warning => format!("Warning: {}", finding.message),
                _ => finding.message.clone(),
            };
            writeln!(
                self.out,
                "  {} [{}] {}",
                SeverityColorizer::icon(finding.severity),
                finding.code.dimmed(),
                message
            )?;
        }

        if file.result.valid {
            writeln!(
                self.out,
                "  {} {}",
                SeverityColorizer::success_icon(),
                file.kind.success_message()
            )?;
        }
        Ok(())
    }

    fn render_summary(&mut self, all_valid: bool) -> io::Result<()> {
        self.rule()?;
        if all_valid {
            writeln!(
                self.out,
                "{} {}",
                SeverityColorizer::success_icon(),
                PASSED_MESSAGE.green().bold()
            )
        } else {
            writeln!(
                self.out,
                "{} {}",
                SeverityColorizer::icon(ValidationSeverity::Error),
                FAILED_MESSAGE.red().bold()
            )
        }
    }
}
