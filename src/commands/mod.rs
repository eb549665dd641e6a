//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — one-shot commands: types/template/rules/merge/extract/format/check/preview.
//! - `shell.rs` — interactive session over stdin.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate editing and diagnostic logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod shell;

pub use runtime::handle_runtime_commands;
pub use shell::handle_shell_command;
