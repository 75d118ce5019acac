//! The argv token-consumption state machine.
//!
//! [`parse_argv`] walks a raw token sequence against an immutable
//! [`Grammar`], producing one [`ParsedCommand`] per command segment, in
//! the order the command switches appeared. Tokens before the first
//! explicit switch belong to the grammar's default command, when one is
//! configured.
//!
//! Token classification uses two shapes:
//!
//! - command switch: `-name` or `--name` (word characters and hyphens)
//! - inline assignment: `name=value` (letters, digits, `_`, `+`, `-`)
//!
//! The shapes overlap: commands and options share the `-name` namespace.
//! Within a segment, a token is first tried against the current command's
//! options (with any leading dashes stripped); a switch-shaped token that
//! matches no option starts the next command. Bare tokens matching no
//! option are kept verbatim in the segment's positional list rather than
//! rejected; callers interpret those themselves.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use command_grammar_core::{
    CommandDef, Grammar, OptionDef, OptionType, OptionValue, ParsedCommand,
};

use crate::error::{ParseError, Result};

static COMMAND_SWITCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--?([A-Za-z0-9_-]+)$").expect("static regex must compile"));

static INLINE_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_+-]+)=(.+)$").expect("static regex must compile"));

/// Parses a raw token sequence into an ordered list of command
/// invocations.
///
/// The engine works on its own copy of the tokens; the caller's input is
/// left untouched. Parsing stops at the first error.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, Grammar, OptionDef, OptionValue};
/// use command_grammar_argv::parse_argv;
///
/// let grammar = Grammar::builder()
///     .command(
///         CommandDef::build("convert")
///             .alias("c")
///             .option(OptionDef::flag("verbose"))
///             .option(OptionDef::number("precision"))
///             .done()
///             .unwrap(),
///     )
///     .build();
///
/// let parsed = parse_argv(&grammar, ["-c", "-verbose", "precision=3", "in.dat"]).unwrap();
/// assert_eq!(parsed.len(), 1);
/// assert_eq!(parsed[0].name, "convert");
/// assert_eq!(parsed[0].option("precision"), Some(&OptionValue::Number(3.0)));
/// assert_eq!(parsed[0].positionals, vec!["in.dat"]);
/// ```
pub fn parse_argv<I>(grammar: &Grammar, argv: I) -> Result<Vec<ParsedCommand>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tokens: VecDeque<String> = argv
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect();
    let mut commands = Vec::new();

    while let Some(next) = tokens.front() {
        // Bare arguments before the first explicit switch belong to the
        // default command; the token stays in the stream for option parsing.
        let name = if commands.is_empty() && !is_command_switch(next) {
            grammar
                .default_command()
                .map(String::from)
                .ok_or_else(|| ParseError::InvalidCommand(next.clone()))?
        } else {
            read_command_name(&mut tokens)?
        };

        let def = grammar
            .find_command(&name)
            .ok_or_else(|| ParseError::UnknownCommand(name.clone()))?;

        let mut cmd = ParsedCommand::new(&def.name);
        while !tokens.is_empty() {
            match read_option(&mut tokens, def)? {
                Some((key, value)) => {
                    // Last occurrence wins.
                    cmd.options.insert(key, value);
                }
                None => {
                    let token = tokens.front().expect("reader leaves the token in place");
                    if is_command_switch(token) {
                        // Not an option of this command; it selects the
                        // next one.
                        break;
                    }
                    // Not a defined option; keep the whole token for the
                    // consumer to interpret.
                    let token = tokens.pop_front().expect("stream is non-empty");
                    cmd.positionals.push(token);
                }
            }
        }

        if let Some(validate) = &def.validate {
            validate(&cmd).map_err(|message| ParseError::Validation {
                command: def.name.clone(),
                message,
            })?;
        }

        debug!(
            command = %cmd.name,
            options = cmd.options.len(),
            positionals = cmd.positionals.len(),
            "parsed command segment"
        );
        commands.push(cmd);
    }

    Ok(commands)
}

/// True when the token selects a command (`-name` or `--name`).
fn is_command_switch(token: &str) -> bool {
    COMMAND_SWITCH.is_match(token)
}

/// Strips the `-`/`--` switch prefix from an option name, if present.
fn strip_switch_prefix(name: &str) -> &str {
    name.strip_prefix("--")
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name)
}

/// Consumes the next token as a command switch and returns its name.
fn read_command_name(tokens: &mut VecDeque<String>) -> Result<String> {
    let front = tokens.front().expect("caller checked for tokens");
    let name = COMMAND_SWITCH
        .captures(front)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::InvalidCommand(front.clone()))?;
    tokens.pop_front();
    Ok(name)
}

/// Tries to consume the next token (and possibly its value) as an option
/// of `def`.
///
/// Option names on the line may carry a leading `-` or `--`; matching
/// strips it. Returns `Ok(None)` when the token matches no option
/// definition; the token is left in the stream for the caller to
/// classify as the next command or a positional.
fn read_option(
    tokens: &mut VecDeque<String>,
    def: &CommandDef,
) -> Result<Option<(String, OptionValue)>> {
    let token = tokens.front().expect("caller checked for tokens");
    let (name, inline) = match INLINE_ASSIGN.captures(token) {
        Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
        None => (token.clone(), None),
    };
    let name = strip_switch_prefix(&name).to_string();

    let Some(opt) = def.find_option(&name) else {
        return Ok(None);
    };

    if inline.is_some() && !opt.takes_value() {
        return Err(ParseError::InlineValueNotAllowed {
            command: def.name.clone(),
            option: name,
        });
    }

    // Consume the name half. An inline value replaces the token in place,
    // so value coercion below sees it as the next token.
    match inline {
        Some(value) => tokens[0] = value,
        None => {
            tokens.pop_front();
        }
    }

    let key = opt.resolved_key();
    let value = read_option_value(tokens, opt).ok_or_else(|| ParseError::InvalidOptionValue {
        command: def.name.clone(),
        option: key.clone(),
    })?;
    Ok(Some((key, value)))
}

/// Coerces the value for a matched option, consuming its token when one
/// is taken. Returns `None` on a missing or uncoercible value.
fn read_option_value(tokens: &mut VecDeque<String>, opt: &OptionDef) -> Option<OptionValue> {
    if opt.kind == OptionType::Flag {
        return Some(OptionValue::Bool(true));
    }
    if opt.assign_to.is_some() {
        // Member of an enumerated group: the value is the member's own name.
        return Some(OptionValue::Text(opt.name.clone()));
    }

    // Value tokens are consumed unconditionally once the option matched,
    // so a switch-shaped value like "-5" is fine here.
    let raw = tokens.pop_front()?;
    match opt.kind {
        OptionType::Number => parse_numeral(&raw).map(OptionValue::Number),
        OptionType::Integer => parse_numeral(&raw).map(|n| OptionValue::Integer(n.round() as i64)),
        OptionType::CommaSep => Some(OptionValue::List(
            raw.split(',').map(String::from).collect(),
        )),
        OptionType::Str => Some(OptionValue::Text(raw)),
        OptionType::Flag => unreachable!("flags never reach value coercion"),
    }
}

fn parse_numeral(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_switch_shapes() {
        assert!(is_command_switch("-convert"));
        assert!(is_command_switch("--convert"));
        assert!(is_command_switch("-bbox-offset"));
        assert!(is_command_switch("-5"));
        assert!(!is_command_switch("convert"));
        assert!(!is_command_switch("-"));
        assert!(!is_command_switch("-convert=x"));
        assert!(!is_command_switch("in.dat"));
    }

    #[test]
    fn test_inline_assign_splits_on_first_equals() {
        let caps = INLINE_ASSIGN.captures("expression=a=b").unwrap();
        assert_eq!(&caps[1], "expression");
        assert_eq!(&caps[2], "a=b");
    }

    #[test]
    fn test_inline_assign_rejects_bad_identifiers() {
        assert!(INLINE_ASSIGN.captures("=value").is_none());
        assert!(INLINE_ASSIGN.captures("name=").is_none());
        assert!(INLINE_ASSIGN.captures("na me=x").is_none());
    }

    #[test]
    fn test_strip_switch_prefix() {
        assert_eq!(strip_switch_prefix("verbose"), "verbose");
        assert_eq!(strip_switch_prefix("-verbose"), "verbose");
        assert_eq!(strip_switch_prefix("--verbose"), "verbose");
        assert_eq!(strip_switch_prefix("keep-shapes"), "keep-shapes");
    }

    #[test]
    fn test_parse_numeral_rejects_non_numeric() {
        assert_eq!(parse_numeral("3.5"), Some(3.5));
        assert_eq!(parse_numeral("-2"), Some(-2.0));
        assert_eq!(parse_numeral("1e3"), Some(1000.0));
        assert_eq!(parse_numeral("abc"), None);
        assert_eq!(parse_numeral("NaN"), None);
    }
}
