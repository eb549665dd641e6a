use crate::catalog::Catalog;
use crate::cli::ExtractStrategy;
use crate::domain::constants::EMPTY_OBJECT;
use crate::domain::models::{DiagnosticReport, InvalidInput};
use crate::services::diagnose::diagnose;
use crate::services::extract::payload_span;
use crate::services::format::{format_json, wrap_script};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ValidEdit {
    #[serde(skip)]
    pub value: Value,
    pub json: String,
    pub embed: String,
    pub report: DiagnosticReport,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EditOutcome {
    Valid(ValidEdit),
    Invalid(InvalidInput),
}

impl EditOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, EditOutcome::Valid(_))
    }
}

/// One editor interaction: extract, parse, format and diagnose the pasted text.
/// Malformed JSON degrades to the parser message plus the untouched input.
pub fn process(catalog: &Catalog, raw: &str, strategy: ExtractStrategy) -> EditOutcome {
    let span = payload_span(raw, strategy);
    let payload = span.clone().map_or(EMPTY_OBJECT, |span| &raw[span]);
    let parsed = serde_json::from_str::<Value>(payload)
        .and_then(|value| format_json(&value).map(|json| (value, json)));

    match parsed {
        Ok((value, json)) => {
            let report = diagnose(catalog, &value);
            tracing::debug!(
                blocks = report.blocks,
                warnings = report.warnings,
                "processed input"
            );
            EditOutcome::Valid(ValidEdit {
                embed: wrap_script(&json),
                json,
                report,
                value,
            })
        }
        Err(e) => {
            tracing::debug!(error = %e, "input is not valid JSON");
            let offset = span.map_or(0, |span| span.start);
            EditOutcome::Invalid(invalid_input(&e, &raw[..offset], raw))
        }
    }
}

/// Re-bases the parser position from the payload onto the raw input.
fn invalid_input(e: &serde_json::Error, before: &str, raw: &str) -> InvalidInput {
    let message = e.to_string();
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    let message = message.strip_suffix(&suffix).unwrap_or(&message);

    let (line, column) = if e.line() == 0 {
        (0, 0)
    } else {
        let lines_before = before.matches('\n').count();
        let last_line = before.rfind('\n').map_or(before, |i| &before[i + 1..]);
        let column = if e.line() == 1 {
            e.column() + last_line.len()
        } else {
            e.column()
        };
        (e.line() + lines_before, column)
    };

    InvalidInput {
        error: if line == 0 {
            message.to_string()
        } else {
            format!("{message} at line {line} column {column}")
        },
        line,
        column,
        raw: raw.to_string(),
    }
}
