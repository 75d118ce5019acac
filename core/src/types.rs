//! Definition-model and parse-result types.
//!
//! This module defines the in-memory description of a command-line grammar
//! (commands, their typed options, aliases, help metadata) and the value
//! types produced by parsing. Grammar definitions are assembled through the
//! builders in this crate and are immutable afterwards; the parsing engine
//! only ever sees the finished form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validator hook attached to a [`CommandDef`].
///
/// Invoked with the fully assembled [`ParsedCommand`] after all of the
/// command's tokens have been consumed. Returning `Err` aborts the whole
/// parse; the message is reported prefixed with the command name.
pub type ValidateFn = Box<dyn Fn(&ParsedCommand) -> Result<(), String> + Send + Sync>;

/// Value kind an option coerces its input to.
///
/// This is a closed enumeration: every option carries one of these kinds,
/// fixed at definition time, so there is no "unknown type" branch at parse
/// time.
///
/// # Examples
///
/// ```
/// use command_grammar_core::OptionType;
///
/// let kind = OptionType::default();
/// assert_eq!(kind, OptionType::Str);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionType {
    /// Boolean switch; consumes no value token.
    Flag,
    /// Floating-point numeral.
    Number,
    /// Floating-point numeral rounded to the nearest whole value.
    Integer,
    /// Comma-separated list of strings, empty segments preserved.
    CommaSep,
    /// Raw string, used verbatim (the default).
    #[default]
    Str,
}

/// A coerced option value.
///
/// Produced by the parsing engine according to the option's
/// [`OptionType`]. Serializes untagged, so JSON output reads as the plain
/// value (`true`, `3.5`, `["a", "b"]`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A [`OptionType::Flag`] selection.
    Bool(bool),
    /// A whole value from an [`OptionType::Integer`] option.
    Integer(i64),
    /// A numeral from an [`OptionType::Number`] option.
    Number(f64),
    /// The segments of an [`OptionType::CommaSep`] option.
    List(Vec<String>),
    /// A raw string, or the selected member name of an enumerated group.
    Text(String),
}

impl OptionValue {
    /// Returns the text content, if this is a [`OptionValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Definition of one recognized option on a command.
///
/// Options are matched against bare tokens (`precision`) and inline
/// assignments (`precision=3`) within a command segment, by `name` or
/// `alias`. Constructors cover each [`OptionType`]; chainable methods add
/// the optional metadata.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{OptionDef, OptionType};
///
/// let opt = OptionDef::number("precision")
///     .with_alias("p")
///     .with_describe("Coordinate precision");
/// assert_eq!(opt.kind, OptionType::Number);
/// assert!(opt.matches("p"));
/// assert!(opt.takes_value());
///
/// // Enumerated-group member: selecting it writes its own name under
/// // the shared "format" key.
/// let geojson = OptionDef::new("geojson").assign_to("format");
/// assert!(!geojson.takes_value());
/// assert_eq!(geojson.resolved_key(), "format");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionDef {
    /// Identifier matched on the command line, unique within its command.
    pub name: String,
    /// Optional alternate short name.
    pub alias: Option<String>,
    /// Value kind this option coerces to.
    pub kind: OptionType,
    /// When set, selecting this option writes the option's own `name`
    /// under this key instead of consuming a value token.
    pub assign_to: Option<String>,
    /// Override for the help-display label.
    pub label: Option<String>,
    /// One-line help text; options without it are hidden from detail help.
    pub describe: Option<String>,
}

impl OptionDef {
    /// Creates a string-valued option (the default kind).
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Creates a boolean flag option.
    pub fn flag(name: &str) -> Self {
        Self::new(name).with_kind(OptionType::Flag)
    }

    /// Creates a floating-point numeric option.
    pub fn number(name: &str) -> Self {
        Self::new(name).with_kind(OptionType::Number)
    }

    /// Creates a whole-number option.
    pub fn integer(name: &str) -> Self {
        Self::new(name).with_kind(OptionType::Integer)
    }

    /// Creates a comma-separated list option.
    pub fn comma_sep(name: &str) -> Self {
        Self::new(name).with_kind(OptionType::CommaSep)
    }

    /// Sets the value kind.
    pub fn with_kind(mut self, kind: OptionType) -> Self {
        self.kind = kind;
        self
    }

    /// Adds an alternate short name.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Marks this option as a member of a mutually-exclusive group writing
    /// under `key`.
    pub fn assign_to(mut self, key: &str) -> Self {
        self.assign_to = Some(key.to_string());
        self
    }

    /// Overrides the help-display label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Adds one-line help text.
    pub fn with_describe(mut self, describe: &str) -> Self {
        self.describe = Some(describe.to_string());
        self
    }

    /// Checks whether `s` is this option's name or alias.
    pub fn matches(&self, s: &str) -> bool {
        self.name == s || self.alias.as_deref() == Some(s)
    }

    /// Returns `true` when this option consumes a value token.
    ///
    /// Flags and enumerated-group members take no value; everything else
    /// does.
    pub fn takes_value(&self) -> bool {
        self.kind != OptionType::Flag && self.assign_to.is_none()
    }

    /// Key this option's value is stored under in the parse result.
    ///
    /// The `assign_to` target when present, otherwise the option name with
    /// hyphens mapped to underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_grammar_core::OptionDef;
    ///
    /// assert_eq!(OptionDef::new("no-repair").resolved_key(), "no_repair");
    /// assert_eq!(OptionDef::new("shp").assign_to("format").resolved_key(), "format");
    /// ```
    pub fn resolved_key(&self) -> String {
        match &self.assign_to {
            Some(key) => key.clone(),
            None => self.name.replace('-', "_"),
        }
    }
}

/// Definition of one sub-command.
///
/// Matched against a leading `-name`/`--name` token by `name` or `alias`.
/// Built through [`CommandDef::build`]; immutable once finalized.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, OptionDef};
///
/// let convert = CommandDef::build("convert")
///     .alias("c")
///     .describe("Convert a dataset to another format")
///     .option(OptionDef::flag("verbose"))
///     .option(OptionDef::number("precision"))
///     .done()
///     .unwrap();
///
/// assert!(convert.matches("c"));
/// assert!(convert.find_option("precision").is_some());
/// ```
pub struct CommandDef {
    /// Canonical name, matched against the command switch.
    pub name: String,
    /// Optional alternate matcher.
    pub alias: Option<String>,
    /// Section heading printed above this command in full help listings.
    pub title: Option<String>,
    /// One-line help text; commands without it are hidden from summary help.
    pub describe: Option<String>,
    /// Ordered option definitions (order matters for help, not parsing).
    pub options: Vec<OptionDef>,
    /// Semantic validation hook, run against the assembled parse result.
    pub validate: Option<ValidateFn>,
}

impl CommandDef {
    /// Starts a scoped builder for a command named `name`.
    pub fn build(name: &str) -> crate::CommandBuilder {
        crate::CommandBuilder::new(name)
    }

    /// Checks whether `s` is this command's name or alias.
    pub fn matches(&self, s: &str) -> bool {
        self.name == s || self.alias.as_deref() == Some(s)
    }

    /// Finds an option by name or alias.
    pub fn find_option(&self, name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.matches(name))
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("title", &self.title)
            .field("describe", &self.describe)
            .field("options", &self.options)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Immutable grammar for one tool: parser-wide metadata plus the ordered
/// command definitions.
///
/// Built once through [`Grammar::builder`], then reused for every parse
/// and help rendering. Holds no parse state.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, Grammar, OptionDef};
///
/// let grammar = Grammar::builder()
///     .usage("Usage: mytool -command [options] ...")
///     .default_command("io")
///     .command(CommandDef::build("io").done().unwrap())
///     .command(
///         CommandDef::build("convert")
///             .alias("c")
///             .option(OptionDef::flag("verbose"))
///             .done()
///             .unwrap(),
///     )
///     .build();
///
/// assert_eq!(grammar.find_command("c").unwrap().name, "convert");
/// assert_eq!(grammar.default_command(), Some("io"));
/// ```
#[derive(Debug, Default)]
pub struct Grammar {
    pub(crate) usage: Option<String>,
    pub(crate) examples: Vec<String>,
    pub(crate) note: Option<String>,
    pub(crate) default_command: Option<String>,
    pub(crate) commands: Vec<CommandDef>,
}

impl Grammar {
    /// Starts a grammar builder.
    pub fn builder() -> crate::GrammarBuilder {
        crate::GrammarBuilder::default()
    }

    /// The configured usage string, if any.
    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// The configured example blocks, in registration order.
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// The configured closing note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The command applied to arguments preceding the first explicit
    /// command switch, if one is configured.
    pub fn default_command(&self) -> Option<&str> {
        self.default_command.as_deref()
    }

    /// All registered commands, in registration order.
    pub fn commands(&self) -> &[CommandDef] {
        &self.commands
    }

    /// Finds a command by name or alias.
    pub fn find_command(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.matches(name))
    }
}

/// One parsed command invocation.
///
/// Produced by the parsing engine for each command segment of the token
/// stream, in the order the switches appeared. Immutable once returned.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{OptionValue, ParsedCommand};
///
/// let mut cmd = ParsedCommand::new("convert");
/// cmd.options.insert("verbose".into(), OptionValue::Bool(true));
/// cmd.positionals.push("in.dat".into());
///
/// assert_eq!(cmd.option("verbose"), Some(&OptionValue::Bool(true)));
/// assert_eq!(cmd.positionals, vec!["in.dat"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Canonical name of the resolved command (never the alias).
    pub name: String,
    /// Coerced option values keyed by resolved key; last write wins.
    pub options: BTreeMap<String, OptionValue>,
    /// Tokens that matched no option definition, in original order.
    pub positionals: Vec<String>,
}

impl ParsedCommand {
    /// Creates an empty parse result for the named command.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Looks up an option value by resolved key.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_matches_name_and_alias() {
        let opt = OptionDef::flag("verbose").with_alias("v");
        assert!(opt.matches("verbose"));
        assert!(opt.matches("v"));
        assert!(!opt.matches("x"));
    }

    #[test]
    fn test_resolved_key_maps_hyphens() {
        assert_eq!(OptionDef::new("bbox-offset").resolved_key(), "bbox_offset");
    }

    #[test]
    fn test_assign_to_overrides_resolved_key() {
        let opt = OptionDef::new("geojson").assign_to("format");
        assert_eq!(opt.resolved_key(), "format");
        assert!(!opt.takes_value());
    }

    #[test]
    fn test_takes_value_per_kind() {
        assert!(!OptionDef::flag("verbose").takes_value());
        assert!(OptionDef::number("precision").takes_value());
        assert!(OptionDef::new("name").takes_value());
    }

    #[test]
    fn test_grammar_find_command_by_alias() {
        let grammar = Grammar::builder()
            .command(CommandDef::build("convert").alias("c").done().unwrap())
            .build();
        assert_eq!(grammar.find_command("c").unwrap().name, "convert");
        assert!(grammar.find_command("x").is_none());
    }

    #[test]
    fn test_option_value_serializes_untagged() {
        let json = serde_json::to_string(&OptionValue::List(vec!["a".into(), "".into()])).unwrap();
        assert_eq!(json, r#"["a",""]"#);
        let json = serde_json::to_string(&OptionValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
    }
}
