//! Per-session editing context.
//!
//! A `Session` owns everything one user accumulates while editing: the
//! selected types, the editor buffer, a bounded history of buffer snapshots
//! and a favorites list. Handlers receive it explicitly; nothing here is
//! global or persisted.

use crate::catalog::Catalog;
use crate::cli::ExtractStrategy;
use crate::services::editor::{process, EditOutcome};
use crate::services::format::format_json;
use crate::services::merge::{merge_selected, MergeOutcome};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("unknown structured data type: {0}")]
    UnknownType(String),
    #[error("nothing selected")]
    EmptySelection,
    #[error("no history entry #{0}")]
    NoHistory(usize),
    #[error("failed to format merged document: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub label: String,
    pub buffer: String,
}

#[derive(Debug)]
pub struct Session {
    selections: Vec<String>,
    buffer: String,
    history: VecDeque<HistoryEntry>,
    favorites: Vec<String>,
    history_limit: usize,
}

impl Session {
    pub fn new(history_limit: usize) -> Self {
        Self {
            selections: Vec::new(),
            buffer: String::new(),
            history: VecDeque::new(),
            favorites: Vec::new(),
            history_limit,
        }
    }

    /// Returns `false` when the type was already selected.
    pub fn select(&mut self, catalog: &Catalog, name: &str) -> Result<bool, SessionError> {
        if !catalog.contains(name) {
            return Err(SessionError::UnknownType(name.to_string()));
        }
        if self.selections.iter().any(|s| s == name) {
            return Ok(false);
        }
        self.selections.push(name.to_string());
        Ok(true)
    }

    pub fn deselect(&mut self, name: &str) -> bool {
        let before = self.selections.len();
        self.selections.retain(|s| s != name);
        before != self.selections.len()
    }

    pub fn clear_selection(&mut self) {
        self.selections.clear();
    }

    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Replaces the buffer with the merged templates of the current selection.
    pub fn load_selection(
        &mut self,
        catalog: &Catalog,
        strategy: ExtractStrategy,
    ) -> Result<MergeOutcome, SessionError> {
        if self.selections.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        let outcome = merge_selected(catalog, &self.selections, strategy);
        let text = format_json(&outcome.value)?;
        let label = format!("load {}", self.selections.join("+"));
        self.set_buffer(text, &label);
        Ok(outcome)
    }

    pub fn set_buffer(&mut self, text: String, label: &str) {
        self.buffer = text;
        self.record(label);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn check(&self, catalog: &Catalog, strategy: ExtractStrategy) -> EditOutcome {
        process(catalog, &self.buffer, strategy)
    }

    fn record(&mut self, label: &str) {
        self.history.push_back(HistoryEntry {
            label: label.to_string(),
            buffer: self.buffer.clone(),
        });
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Oldest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Restores the 1-based history entry `index` into the buffer.
    pub fn restore(&mut self, index: usize) -> Result<(), SessionError> {
        self.buffer = index
            .checked_sub(1)
            .and_then(|i| self.history.get(i))
            .map(|entry| entry.buffer.clone())
            .ok_or(SessionError::NoHistory(index))?;
        Ok(())
    }

    pub fn add_favorite(&mut self, catalog: &Catalog, name: &str) -> Result<bool, SessionError> {
        if !catalog.contains(name) {
            return Err(SessionError::UnknownType(name.to_string()));
        }
        if self.favorites.iter().any(|f| f == name) {
            return Ok(false);
        }
        self.favorites.push(name.to_string());
        Ok(true)
    }

    pub fn remove_favorite(&mut self, name: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != name);
        before != self.favorites.len()
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }
}
