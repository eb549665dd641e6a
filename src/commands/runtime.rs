use crate::*;
use std::io::Read;
use std::path::Path;

/// Reads the input file, or stdin for `-` / no path.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn handle_runtime_commands(
    cli: &Cli,
    catalog: &Catalog,
    config: &Config,
) -> anyhow::Result<()> {
    let strategy = config.strategy(cli.strategy);

    match &cli.command {
        Commands::Types => {
            let items: Vec<TypeItem> = catalog
                .templates()
                .iter()
                .map(|t| {
                    let rule = catalog.rule_or_default(&t.name);
                    TypeItem {
                        name: t.name.clone(),
                        brief: rule.brief.clone(),
                        rich_result: rule.rich_result.clone(),
                    }
                })
                .collect();
            print_out(cli.json, &items, |t| format!("{}\t{}", t.name, t.brief))?;
        }
        Commands::Template { name } => {
            let t = catalog.template(name)?;
            let item = TemplateItem {
                name: t.name.clone(),
                snippet: t.snippet.clone(),
            };
            print_one(cli.json, item, |t| t.snippet.trim_end().to_string())?;
        }
        Commands::Rules { name } => {
            let items: Vec<RuleItem> = match name {
                Some(n) => vec![RuleItem {
                    name: n.clone(),
                    rule: catalog.rule_or_default(n).clone(),
                }],
                None => catalog
                    .rules()
                    .map(|(n, r)| RuleItem {
                        name: n.clone(),
                        rule: r.clone(),
                    })
                    .collect(),
            };
            print_out(cli.json, &items, |r| {
                format!(
                    "{}\trequired: {}\trecommended: {}",
                    r.name,
                    r.rule.required.join(", "),
                    r.rule.recommended.join(", ")
                )
            })?;
        }
        Commands::Merge { types, embed } => {
            let outcome = merge_selected(catalog, types, strategy);
            for s in &outcome.skipped {
                tracing::warn!(template = %s.name, reason = %s.reason, "template skipped");
            }
            let json = format_json(&outcome.value)?;
            let report = MergeReport {
                types: types.clone(),
                merged: outcome.merged,
                skipped: outcome.skipped,
                embed: wrap_script(&json),
                json,
            };
            let show_embed = *embed;
            print_one(cli.json, report, |r| {
                if show_embed {
                    r.embed.clone()
                } else {
                    r.json.clone()
                }
            })?;
        }
        Commands::Extract { input } => {
            let raw = read_input(input.as_deref())?;
            let report = ExtractReport {
                strategy: strategy.as_str().to_string(),
                payload: extract_payload(&raw, strategy).to_string(),
            };
            print_one(cli.json, report, |r| r.payload.clone())?;
        }
        Commands::Format { input, embed } => {
            let raw = read_input(input.as_deref())?;
            let outcome = process(catalog, &raw, strategy);
            let show_embed = *embed;
            print_status(cli.json, outcome.is_valid(), outcome, |o| match o {
                EditOutcome::Valid(edit) if show_embed => edit.embed.clone(),
                EditOutcome::Valid(edit) => edit.json.clone(),
                EditOutcome::Invalid(invalid) => invalid_text(invalid),
            })?;
        }
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let outcome = process(catalog, &raw, strategy);
            let ok = match &outcome {
                EditOutcome::Valid(edit) => edit.report.is_ok(),
                EditOutcome::Invalid(_) => false,
            };
            print_status(cli.json, ok, outcome, |o| match o {
                EditOutcome::Valid(edit) => report_text(&edit.report),
                EditOutcome::Invalid(invalid) => invalid_text(invalid),
            })?;
        }
        Commands::Preview { input } => {
            let raw = read_input(input.as_deref())?;
            let report = match process(catalog, &raw, strategy) {
                EditOutcome::Valid(edit) => PreviewReport {
                    valid: true,
                    html: html_preview(&edit.json),
                },
                EditOutcome::Invalid(_) => PreviewReport {
                    valid: false,
                    html: html_preview(&raw),
                },
            };
            print_status(cli.json, report.valid, report, |r| r.html.clone())?;
        }
        Commands::Shell => unreachable!("handled before one-shot commands"),
    }

    Ok(())
}
