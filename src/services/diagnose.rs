//! Rule walk over parsed JSON-LD.
//!
//! Objects are numbered in visit order ("blocks") with one counter shared by
//! the whole walk, so a message can be traced back to the node it is about.
//! Every finding is advisory; the walk never fails.

use crate::catalog::Catalog;
use crate::domain::constants::UNKNOWN_TYPE;
use crate::domain::models::{Diagnostic, DiagnosticCode, DiagnosticReport, Severity};
use serde_json::{Map, Value};

pub fn diagnose(catalog: &Catalog, value: &Value) -> DiagnosticReport {
    let mut walk = Walk {
        catalog,
        blocks: 0,
        diagnostics: Vec::new(),
    };
    walk.visit(value, 0, false);

    let warnings = walk.count(Severity::Warning);
    let errors = walk.count(Severity::Error);
    DiagnosticReport {
        overall: if warnings == 0 && errors == 0 {
            "ok"
        } else {
            "needs_attention"
        }
        .to_string(),
        blocks: walk.blocks,
        warnings,
        errors,
        diagnostics: walk.diagnostics,
    }
}

/// `@type` as a string, or the first string of an `@type` array.
pub fn node_type(map: &Map<String, Value>) -> &str {
    match map.get("@type") {
        Some(Value::String(s)) => s.as_str(),
        Some(Value::Array(types)) => types.iter().find_map(Value::as_str).unwrap_or(UNKNOWN_TYPE),
        _ => UNKNOWN_TYPE,
    }
}

fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|o| o.contains_key(key))
}

fn scalar_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct Walk<'a> {
    catalog: &'a Catalog,
    blocks: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Walk<'_> {
    fn push(
        &mut self,
        block: usize,
        depth: usize,
        severity: Severity,
        code: DiagnosticCode,
        message: String,
    ) {
        self.diagnostics.push(Diagnostic {
            block,
            depth,
            severity,
            code,
            message,
        });
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// `inherited` is set for nodes that take `@context` from an enclosing `@graph`.
    fn visit(&mut self, node: &Value, depth: usize, inherited: bool) {
        match node {
            Value::Object(map) if !map.contains_key("@type") && map.contains_key("@graph") => {
                self.visit_graph(map, depth, inherited)
            }
            Value::Object(map) => self.visit_object(map, depth, inherited),
            Value::Array(items) => self.visit_array(items, depth, inherited),
            scalar => self.push(
                0,
                depth,
                Severity::Error,
                DiagnosticCode::UnrecognizedNode,
                format!(
                    "unrecognized node: {} (expected an object or array)",
                    scalar_kind(scalar)
                ),
            ),
        }
    }

    fn visit_array(&mut self, items: &[Value], depth: usize, inherited: bool) {
        self.push(
            0,
            depth,
            Severity::Info,
            DiagnosticCode::ArraySummary,
            format!("array with {} item(s)", items.len()),
        );
        for item in items {
            self.visit(item, depth + 1, inherited);
        }
    }

    fn visit_graph(&mut self, map: &Map<String, Value>, depth: usize, inherited: bool) {
        let inherited = inherited || map.contains_key("@context");
        match map.get("@graph") {
            Some(Value::Array(nodes)) => {
                self.push(
                    0,
                    depth,
                    Severity::Info,
                    DiagnosticCode::GraphSummary,
                    format!("@graph with {} node(s)", nodes.len()),
                );
                for node in nodes {
                    self.visit(node, depth + 1, inherited);
                }
            }
            Some(node) => self.visit(node, depth + 1, inherited),
            None => {}
        }
    }

    fn visit_object(&mut self, map: &Map<String, Value>, depth: usize, inherited: bool) {
        self.blocks += 1;
        let block = self.blocks;
        let type_name = node_type(map);
        let catalog = self.catalog;
        let known = catalog.rule(type_name).is_some();
        let rule = catalog.rule_or_default(type_name);

        let brief = if known {
            rule.brief.clone()
        } else {
            format!("{type_name}: {}", rule.brief)
        };
        self.push(block, depth, Severity::Info, DiagnosticCode::TypeBrief, brief);

        let missing_required: Vec<&str> = rule
            .required
            .iter()
            .map(String::as_str)
            .filter(|k| !(map.contains_key(*k) || (inherited && *k == "@context")))
            .collect();
        if missing_required.is_empty() {
            self.push(
                block,
                depth,
                Severity::Success,
                DiagnosticCode::RequiredOk,
                format!("{type_name}: all required fields present"),
            );
        } else {
            self.push(
                block,
                depth,
                Severity::Warning,
                DiagnosticCode::RequiredMissing,
                format!(
                    "{type_name}: missing required fields: {}",
                    missing_required.join(", ")
                ),
            );
        }

        let missing_recommended: Vec<&str> = rule
            .recommended
            .iter()
            .map(String::as_str)
            .filter(|k| !map.contains_key(*k))
            .collect();
        if !missing_recommended.is_empty() {
            self.push(
                block,
                depth,
                Severity::Info,
                DiagnosticCode::RecommendedMissing,
                format!(
                    "{type_name}: consider adding recommended fields: {}",
                    missing_recommended.join(", ")
                ),
            );
        }

        if !rule.rich_result.is_empty() {
            self.push(
                block,
                depth,
                Severity::Info,
                DiagnosticCode::RichResult,
                rule.rich_result.clone(),
            );
        }

        match type_name {
            "Product" => self.check_product(map, block, depth),
            "FAQPage" => self.check_faq(map, block, depth),
            _ => {}
        }
    }

    fn check_product(&mut self, map: &Map<String, Value>, block: usize, depth: usize) {
        match map.get("offers") {
            Some(Value::Array(offers)) => {
                for (i, offer) in offers.iter().enumerate() {
                    if !has_key(offer, "price") {
                        self.push(
                            block,
                            depth,
                            Severity::Warning,
                            DiagnosticCode::OfferPriceMissing,
                            format!("Product: offers[{i}] has no price"),
                        );
                    }
                }
            }
            Some(offer) if has_key(offer, "price") => {}
            Some(_) => self.push(
                block,
                depth,
                Severity::Warning,
                DiagnosticCode::OfferPriceMissing,
                "Product: offers has no price".to_string(),
            ),
            None => self.push(
                block,
                depth,
                Severity::Warning,
                DiagnosticCode::OfferPriceMissing,
                "Product: no offers.price, product snippets need a price".to_string(),
            ),
        }

        if !map.contains_key("image") {
            self.push(
                block,
                depth,
                Severity::Warning,
                DiagnosticCode::ImageMissing,
                "Product: no image, product rich results need one".to_string(),
            );
        }
    }

    fn check_faq(&mut self, map: &Map<String, Value>, block: usize, depth: usize) {
        let questions: Vec<&Value> = match map.get("mainEntity") {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(item) => vec![item],
            None => return,
        };
        for (i, question) in questions.into_iter().enumerate() {
            if has_key(question, "acceptedAnswer") {
                continue;
            }
            let label = question
                .get("name")
                .and_then(Value::as_str)
                .map(|n| format!(" ({n})"))
                .unwrap_or_default();
            self.push(
                block,
                depth,
                Severity::Warning,
                DiagnosticCode::AcceptedAnswerMissing,
                format!("FAQPage: mainEntity[{i}]{label} has no acceptedAnswer"),
            );
        }
    }
}
