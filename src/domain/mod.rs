//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — rule entries, diagnostics, report/output structs.
//! - `constants.rs` — script tag delimiters and fallback names.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
