//! Builders for grammars and command definitions.
//!
//! The definition model is mutable only during the builder phase.
//! [`CommandBuilder::done`] performs the build-time checks (empty names
//! fail fast here, not at parse time) and yields the immutable
//! [`CommandDef`]; [`GrammarBuilder::build`] freezes the whole grammar.
//!
//! Duplicate command or option names are *not* detected: registering two
//! components under the same matcher makes the grammar ambiguous, and
//! resolving that is left to the integrator.

use thiserror::Error;

use crate::{CommandDef, Grammar, OptionDef, ParsedCommand};

/// Definition-time errors, reported when a builder is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// Command name is empty.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// An option registered on the named command has an empty name.
    #[error("option name cannot be empty in command: {0}")]
    EmptyOptionName(String),
}

/// Scoped builder for one [`CommandDef`].
///
/// Accumulates the command's options and metadata; [`done`](Self::done)
/// checks the definition and yields the immutable form.
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, DefineError, OptionDef};
///
/// let cmd = CommandDef::build("filter")
///     .describe("Keep features matching an expression")
///     .option(OptionDef::new("expression").with_alias("e"))
///     .done()
///     .unwrap();
/// assert_eq!(cmd.name, "filter");
///
/// let err = CommandDef::build("filter")
///     .option(OptionDef::new(""))
///     .done()
///     .unwrap_err();
/// assert_eq!(err, DefineError::EmptyOptionName("filter".into()));
/// ```
pub struct CommandBuilder {
    name: String,
    alias: Option<String>,
    title: Option<String>,
    describe: Option<String>,
    options: Vec<OptionDef>,
    validate: Option<crate::ValidateFn>,
}

impl CommandBuilder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
            title: None,
            describe: None,
            options: Vec::new(),
            validate: None,
        }
    }

    /// Adds an alternate matcher for the command switch.
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Sets the section heading shown above this command in full help
    /// listings.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the one-line help text; commands without it are hidden from
    /// summary help.
    pub fn describe(mut self, describe: &str) -> Self {
        self.describe = Some(describe.to_string());
        self
    }

    /// Registers an option. Order is preserved for help display.
    pub fn option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }

    /// Attaches a semantic validation hook, run against the assembled
    /// parse result for this command.
    pub fn validate<F>(mut self, f: F) -> Self
    where
        F: Fn(&ParsedCommand) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(f));
        self
    }

    /// Finalizes the definition.
    ///
    /// Fails when the command name or any registered option name is empty.
    pub fn done(self) -> Result<CommandDef, DefineError> {
        if self.name.trim().is_empty() {
            return Err(DefineError::EmptyCommandName);
        }
        if self.options.iter().any(|o| o.name.trim().is_empty()) {
            return Err(DefineError::EmptyOptionName(self.name));
        }
        Ok(CommandDef {
            name: self.name,
            alias: self.alias,
            title: self.title,
            describe: self.describe,
            options: self.options,
            validate: self.validate,
        })
    }
}

/// Builder for a [`Grammar`].
///
/// # Examples
///
/// ```
/// use command_grammar_core::{CommandDef, Grammar};
///
/// let grammar = Grammar::builder()
///     .usage("Usage: mytool -command [options]")
///     .example("mytool -convert in.dat out.dat")
///     .note("See the manual for details.")
///     .command(CommandDef::build("convert").done().unwrap())
///     .build();
/// assert_eq!(grammar.examples().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    grammar: Grammar,
}

impl GrammarBuilder {
    /// Sets the usage string printed at the top of summary help.
    pub fn usage(mut self, usage: &str) -> Self {
        self.grammar.usage = Some(usage.to_string());
        self
    }

    /// Appends an example block to summary help.
    pub fn example(mut self, example: &str) -> Self {
        self.grammar.examples.push(example.to_string());
        self
    }

    /// Sets the closing note printed at the bottom of summary help.
    pub fn note(mut self, note: &str) -> Self {
        self.grammar.note = Some(note.to_string());
        self
    }

    /// Names the command applied to arguments preceding the first explicit
    /// command switch.
    pub fn default_command(mut self, name: &str) -> Self {
        self.grammar.default_command = Some(name.to_string());
        self
    }

    /// Registers a finalized command definition.
    pub fn command(mut self, command: CommandDef) -> Self {
        self.grammar.commands.push(command);
        self
    }

    /// Freezes the grammar.
    pub fn build(self) -> Grammar {
        self.grammar
    }
}
