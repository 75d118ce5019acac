//! Help message rendering over a grammar.
//!
//! Two modes share one column layout:
//!
//! - **summary** — usage string, one aligned line per described command,
//!   example blocks, closing note.
//! - **detail** — per-command option listings, selected by command name or
//!   the literal `all`. A selection matching no command falls back to
//!   summary mode.
//!
//! Column width is computed per call across every label the current
//! invocation produces, so alignment is consistent within one message but
//! not across calls. The formatter is pure; [`write_help`] is the thin
//! adapter for callers that want the text on an output sink.

use std::io;

use command_grammar_core::{CommandDef, Grammar, OptionDef};

const CMD_INDENT: &str = " ";
const OPT_INDENT: &str = "  ";
const GUTTER: &str = "  ";

/// Renders the help text for a grammar.
///
/// An empty `command_names` slice selects summary mode; otherwise detail
/// mode for the named commands (`"all"` selects every command). Commands
/// and options without a `describe` are omitted.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, Grammar, OptionDef};
/// use command_grammar_argv::help_message;
///
/// let grammar = Grammar::builder()
///     .usage("Usage: mytool -command [options]")
///     .command(
///         CommandDef::build("convert")
///             .describe("Convert a dataset")
///             .option(OptionDef::number("precision").with_describe("Coordinate precision"))
///             .done()
///             .unwrap(),
///     )
///     .build();
///
/// let summary = help_message(&grammar, &[]);
/// assert!(summary.starts_with("Usage: mytool -command [options]\n"));
///
/// let detail = help_message(&grammar, &["convert"]);
/// assert!(detail.contains("precision="));
/// ```
pub fn help_message(grammar: &Grammar, command_names: &[&str]) -> String {
    let all = grammar.commands();
    let mut detail = !command_names.is_empty();

    // Filtering matches canonical names only; `all` keeps the full set.
    let mut filtered = detail && !command_names.contains(&"all");
    let mut selected: Vec<&CommandDef> = if filtered {
        all.iter()
            .filter(|c| command_names.contains(&c.name.as_str()))
            .collect()
    } else {
        all.iter().collect()
    };
    if selected.is_empty() {
        detail = false;
        filtered = false;
        selected = all.iter().collect();
    }

    // First pass: build every label this invocation will print and find
    // the widest one.
    let mut col_width = 0;
    let command_labels: Vec<Option<String>> = selected
        .iter()
        .map(|cmd| {
            cmd.describe.as_ref().map(|_| {
                let label = command_label(cmd);
                col_width = col_width.max(label.len());
                label
            })
        })
        .collect();
    let option_labels: Vec<Vec<Option<String>>> = selected
        .iter()
        .map(|cmd| {
            if !detail {
                return Vec::new();
            }
            cmd.options
                .iter()
                .map(|opt| {
                    opt.describe.as_ref().map(|_| {
                        let label = option_label(opt);
                        col_width = col_width.max(label.len());
                        label
                    })
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    if detail {
        out.push('\n');
    } else if let Some(usage) = grammar.usage() {
        out.push_str(usage);
        out.push_str("\n\n");
    }

    for (i, cmd) in selected.iter().enumerate() {
        if !filtered {
            if let Some(title) = &cmd.title {
                out.push_str(title);
                out.push('\n');
            }
        }
        if let (Some(label), Some(describe)) = (&command_labels[i], &cmd.describe) {
            push_help_line(&mut out, label, describe, col_width);
        }
        if (cmd.title.is_some() || cmd.describe.is_some()) && detail && !cmd.options.is_empty() {
            for (opt, label) in cmd.options.iter().zip(&option_labels[i]) {
                if let (Some(label), Some(describe)) = (label, &opt.describe) {
                    push_help_line(&mut out, label, describe, col_width);
                }
            }
            out.push('\n');
        }
    }

    if !detail && !grammar.examples().is_empty() {
        out.push_str("\nExamples\n");
        for example in grammar.examples() {
            out.push('\n');
            out.push_str(example);
            out.push('\n');
        }
    }
    if !detail {
        if let Some(note) = grammar.note() {
            out.push('\n');
            out.push_str(note);
        }
    }

    out
}

/// Writes the help text plus a trailing newline to `sink`.
pub fn write_help<W: io::Write>(
    grammar: &Grammar,
    command_names: &[&str],
    sink: &mut W,
) -> io::Result<()> {
    writeln!(sink, "{}", help_message(grammar, command_names))
}

fn command_label(cmd: &CommandDef) -> String {
    let mut label = format!("{CMD_INDENT}-{}", cmd.name);
    if let Some(alias) = &cmd.alias {
        label.push_str(&format!(", -{alias}"));
    }
    label
}

fn option_label(opt: &OptionDef) -> String {
    if let Some(label) = &opt.label {
        return format!("{OPT_INDENT}{label}");
    }
    let mut label = format!("{OPT_INDENT}{}", opt.name);
    if let Some(alias) = &opt.alias {
        label.push_str(&format!(", {alias}"));
    }
    if opt.takes_value() {
        label.push('=');
    }
    label
}

fn push_help_line(out: &mut String, label: &str, describe: &str, col_width: usize) {
    out.push_str(&format!("{label:<col_width$}{GUTTER}{describe}\n"));
}
