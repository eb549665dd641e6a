use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One row of the static rule table.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuleEntry {
    pub brief: String,
    #[serde(default)]
    pub rich_result: String,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub recommended: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RuleFile {
    #[serde(default)]
    pub types: BTreeMap<String, RuleEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    TypeBrief,
    RequiredMissing,
    RequiredOk,
    RecommendedMissing,
    RichResult,
    OfferPriceMissing,
    ImageMissing,
    AcceptedAnswerMissing,
    ArraySummary,
    GraphSummary,
    UnrecognizedNode,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Number of the object this message belongs to, 0 for array/scalar positions.
    pub block: usize,
    pub depth: usize,
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub overall: String,
    pub blocks: usize,
    pub warnings: usize,
    pub errors: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn is_ok(&self) -> bool {
        self.overall == "ok"
    }

    #[cfg(test)]
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }
}

#[derive(Serialize, Clone)]
pub struct TypeItem {
    pub name: String,
    pub brief: String,
    pub rich_result: String,
}

#[derive(Serialize)]
pub struct TemplateItem {
    pub name: String,
    pub snippet: String,
}

#[derive(Serialize)]
pub struct RuleItem {
    pub name: String,
    #[serde(flatten)]
    pub rule: RuleEntry,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SkippedTemplate {
    pub name: String,
    pub reason: String,
}

#[derive(Serialize)]
pub struct MergeReport {
    pub types: Vec<String>,
    pub merged: usize,
    pub skipped: Vec<SkippedTemplate>,
    pub json: String,
    pub embed: String,
}

#[derive(Serialize)]
pub struct ExtractReport {
    pub strategy: String,
    pub payload: String,
}

#[derive(Serialize)]
pub struct PreviewReport {
    pub valid: bool,
    pub html: String,
}

/// Malformed input: the parser message plus the raw text, echoed back unmodified.
#[derive(Debug, Serialize)]
pub struct InvalidInput {
    pub error: String,
    pub line: usize,
    pub column: usize,
    pub raw: String,
}
