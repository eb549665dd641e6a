use crate::catalog::Catalog;
use crate::cli::ExtractStrategy;
use crate::domain::models::SkippedTemplate;
use crate::services::extract::extract_payload;
use serde_json::Value;

#[derive(Debug)]
pub struct MergeOutcome {
    pub value: Value,
    pub merged: usize,
    pub skipped: Vec<SkippedTemplate>,
}

/// Extracts and parses each selected template in order.
/// Unknown types and templates that fail to parse are skipped.
pub fn merge_selected(
    catalog: &Catalog,
    selected: &[String],
    strategy: ExtractStrategy,
) -> MergeOutcome {
    let mut values = Vec::new();
    let mut skipped = Vec::new();

    for name in selected {
        let template = match catalog.template(name) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(template = %name, error = %e, "skipping selection");
                skipped.push(SkippedTemplate {
                    name: name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        match serde_json::from_str::<Value>(extract_payload(&template.snippet, strategy)) {
            Ok(v) => values.push(v),
            Err(e) => {
                tracing::debug!(template = %name, error = %e, "template does not parse");
                skipped.push(SkippedTemplate {
                    name: name.clone(),
                    reason: format!("invalid template JSON: {e}"),
                });
            }
        }
    }

    MergeOutcome {
        merged: values.len(),
        value: collapse(values),
        skipped,
    }
}

/// A single value is returned unwrapped; anything else becomes an array.
pub fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        if let Some(only) = values.pop() {
            return only;
        }
    }
    Value::Array(values)
}
