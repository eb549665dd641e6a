use crate::*;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  types                  list available types
  select <TYPE>...       add types to the selection
  deselect <TYPE>        remove a type from the selection
  selected               show the selection
  clear                  empty the selection
  load                   merge the selection into the buffer
  paste                  replace the buffer with the following lines, ended by `.`
  show                   print the buffer
  check                  run diagnostics on the buffer
  embed                  print the buffer as a script-tag embed
  fav add|rm <TYPE>      edit favorites
  favs                   list favorites
  history                list buffer snapshots
  restore <N>            put snapshot N back into the buffer
  help                   this text
  quit                   leave the shell";

pub fn handle_shell_command(cli: &Cli, catalog: &Catalog, config: &Config) -> anyhow::Result<bool> {
    let Commands::Shell = &cli.command else {
        return Ok(false);
    };

    let mut session = Session::new(config.session.history_limit);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_shell(
        &mut session,
        catalog,
        config.strategy(cli.strategy),
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(true)
}

/// Drives one session from line input until `quit` or end of input.
/// Session errors are reported inline and never end the loop.
pub fn run_shell(
    session: &mut Session,
    catalog: &Catalog,
    strategy: ExtractStrategy,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let mut lines = input.lines();
    writeln!(out, "ldsnip shell, `help` for commands")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        tracing::debug!(command = cmd, "shell command");

        match cmd {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "types" => {
                for t in catalog.templates() {
                    writeln!(out, "{}", t.name)?;
                }
            }
            "select" => {
                for name in &args {
                    match session.select(catalog, name) {
                        Ok(true) => writeln!(out, "selected {name}")?,
                        Ok(false) => writeln!(out, "{name} already selected")?,
                        Err(e) => writeln!(out, "error: {e}")?,
                    }
                }
            }
            "deselect" => {
                for name in &args {
                    if session.deselect(name) {
                        writeln!(out, "deselected {name}")?;
                    } else {
                        writeln!(out, "{name} was not selected")?;
                    }
                }
            }
            "selected" => writeln!(out, "{}", session.selections().join(", "))?,
            "clear" => {
                session.clear_selection();
                writeln!(out, "selection cleared")?;
            }
            "load" => match session.load_selection(catalog, strategy) {
                Ok(merged) => {
                    for s in &merged.skipped {
                        writeln!(out, "skipped {}: {}", s.name, s.reason)?;
                    }
                    writeln!(out, "{}", session.buffer())?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "paste" => {
                let mut text = Vec::new();
                for next in lines.by_ref() {
                    let next = next?;
                    if next.trim() == "." {
                        break;
                    }
                    text.push(next);
                }
                session.set_buffer(text.join("\n"), "paste");
                writeln!(out, "buffer updated ({} line(s))", text.len())?;
            }
            "show" => writeln!(out, "{}", session.buffer())?,
            "check" => match session.check(catalog, strategy) {
                EditOutcome::Valid(edit) => writeln!(out, "{}", report_text(&edit.report))?,
                EditOutcome::Invalid(invalid) => writeln!(out, "{}", invalid_text(&invalid))?,
            },
            "embed" => match session.check(catalog, strategy) {
                EditOutcome::Valid(edit) => writeln!(out, "{}", edit.embed)?,
                EditOutcome::Invalid(invalid) => writeln!(out, "{}", invalid_text(&invalid))?,
            },
            "fav" => match args.as_slice() {
                ["add", name] => match session.add_favorite(catalog, name) {
                    Ok(true) => writeln!(out, "favorited {name}")?,
                    Ok(false) => writeln!(out, "{name} already a favorite")?,
                    Err(e) => writeln!(out, "error: {e}")?,
                },
                ["rm", name] => {
                    if session.remove_favorite(name) {
                        writeln!(out, "unfavorited {name}")?;
                    } else {
                        writeln!(out, "{name} was not a favorite")?;
                    }
                }
                _ => writeln!(out, "usage: fav add|rm <TYPE>")?,
            },
            "favs" => writeln!(out, "{}", session.favorites().join(", "))?,
            "history" => {
                for (i, h) in session.history().enumerate() {
                    writeln!(out, "{}\t{}", i + 1, h.label)?;
                }
            }
            "restore" => match args.first().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) => match session.restore(n) {
                    Ok(()) => writeln!(out, "{}", session.buffer())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                },
                None => writeln!(out, "usage: restore <N>")?,
            },
            other => writeln!(out, "unknown command: {other} (try `help`)")?,
        }
    }

    Ok(())
}
