use crate::domain::models::{Diagnostic, DiagnosticReport, InvalidInput, JsonOut, Severity};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print_status(json, true, data, row)
}

/// Like `print_one`, but the envelope's `ok` reflects the outcome.
pub fn print_status<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "ok",
        Severity::Warning => "warn",
        Severity::Info => "info",
        Severity::Error => "error",
    }
}

pub fn diagnostic_line(d: &Diagnostic) -> String {
    let indent = "  ".repeat(d.depth);
    if d.block > 0 {
        format!("{indent}#{} {:<5} {}", d.block, marker(d.severity), d.message)
    } else {
        format!("{indent}{:<5} {}", marker(d.severity), d.message)
    }
}

pub fn report_text(report: &DiagnosticReport) -> String {
    let mut lines: Vec<String> = report.diagnostics.iter().map(diagnostic_line).collect();
    lines.push(format!(
        "{}: {} block(s), {} warning(s), {} error(s)",
        report.overall, report.blocks, report.warnings, report.errors
    ));
    lines.join("\n")
}

pub fn invalid_text(invalid: &InvalidInput) -> String {
    format!("invalid JSON: {}\n{}", invalid.error, invalid.raw)
}
