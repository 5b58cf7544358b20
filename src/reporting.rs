//! Console output formatting for scan results.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use crate::types::ScanReport;

/// Prints a formatted scan report to stdout.
pub fn print_report(report: &ScanReport) {
    for unit in &report.units {
        if let Some(ref error) = unit.error {
            println!(
                "{} {}: {}",
                "ABORTED".red().bold(),
                unit.unit,
                error.dimmed()
            );
            continue;
        }
        for issue in &unit.issues {
            println!("{}", issue.rule_key.red().bold());
            println!(
                "  {} {}:{}:{}",
                "-->".blue(),
                unit.unit,
                issue.span.line,
                issue.span.column
            );
        }
    }
    print_summary(report);
}

fn print_summary(report: &ScanReport) {
    #[allow(clippy::cast_possible_truncation)]
    let duration = Duration::from_millis(report.duration_ms as u64);

    if !report.has_issues() && !report.has_failures() {
        println!(
            "{} No violations in {} units ({duration:?}).",
            "OK".green().bold(),
            report.units.len()
        );
        return;
    }

    let aborted = report
        .units
        .iter()
        .filter(|u| u.error.is_some())
        .count();
    let mut parts = vec![format!(
        "{} {}",
        report.total_issues,
        pluralize("violation", report.total_issues)
    )];
    if aborted > 0 {
        parts.push(format!("{} {} aborted", aborted, pluralize("unit", aborted)));
    }

    println!(
        "{} Demeter found {} ({duration:?}).",
        "X".red().bold(),
        parts.join(", ")
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
