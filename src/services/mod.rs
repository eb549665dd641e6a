//! Service layer containing the editing and diagnostic logic.
//!
//! ## Service map
//! - `extract.rs` — locate the JSON payload inside script-wrapped text.
//! - `merge.rs` — combine selected templates into one document.
//! - `diagnose.rs` — rule walk producing advisory diagnostics.
//! - `format.rs` — stable JSON formatting, script embed, HTML preview.
//! - `editor.rs` — one editor interaction (extract → parse → format → diagnose).
//! - `session.rs` — per-session selections, buffer, history, favorites.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers; only `output.rs` writes to stdout.
//! - Keep command handlers thin; delegate to services.

pub mod diagnose;
pub mod editor;
pub mod extract;
pub mod format;
pub mod merge;
pub mod output;
pub mod session;
