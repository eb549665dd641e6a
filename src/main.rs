use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod services;

pub use catalog::Catalog;
pub use cli::{Cli, Commands, ExtractStrategy};
pub use commands::{handle_runtime_commands, handle_shell_command};
pub use config::{load_config, Config};
pub use domain::models::{
    ExtractReport, MergeReport, PreviewReport, RuleItem, TemplateItem, TypeItem,
};
pub use services::editor::{process, EditOutcome};
pub use services::extract::extract_payload;
pub use services::format::{format_json, html_preview, wrap_script};
pub use services::merge::merge_selected;
pub use services::output::{invalid_text, print_one, print_out, print_status, report_text};
pub use services::session::Session;

const LOG_ENV: &str = "LDSNIP_LOG";

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let config = load_config(cli.config.as_deref())?;
    let catalog = Catalog::load(&config.catalog)?;
    tracing::debug!(templates = catalog.templates().len(), "catalog loaded");

    if handle_shell_command(&cli, &catalog, &config)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &catalog, &config)
}
