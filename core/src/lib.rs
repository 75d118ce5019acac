//! Definition model for multi-command argv grammars.
//!
//! This crate defines the foundational types for describing a tool's
//! command-line grammar and the values produced by parsing it:
//!
//! - [`Grammar`] — immutable parser-wide configuration: usage/examples/note
//!   metadata, an optional default command, and the ordered command list.
//! - [`CommandDef`] — one sub-command, matched against a leading
//!   `-name`/`--name` switch, with its ordered [`OptionDef`]s and an
//!   optional semantic validator.
//! - [`OptionDef`] — one typed option, with alias, help metadata, and the
//!   enumerated-group `assign_to` mechanism.
//! - [`ParsedCommand`] / [`OptionValue`] — the structured result of one
//!   command segment.
//!
//! Grammars are assembled with builders ([`Grammar::builder`],
//! [`CommandDef::build`]) and frozen before use; build-time checks
//! ([`DefineError`]) catch empty names when a command builder is
//! finalized. The parsing engine and help formatter live in the
//! `command-grammar-argv` crate.
//!
//! # Example
//!
//! ```
//! use command_grammar_core::{CommandDef, Grammar, OptionDef};
//!
//! let grammar = Grammar::builder()
//!     .usage("Usage: mytool -command [options] ...")
//!     .default_command("io")
//!     .command(CommandDef::build("io").done().unwrap())
//!     .command(
//!         CommandDef::build("convert")
//!             .alias("c")
//!             .describe("Convert a dataset to another format")
//!             .option(OptionDef::flag("verbose").with_describe("Print progress"))
//!             .option(OptionDef::number("precision"))
//!             .done()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! let convert = grammar.find_command("c").unwrap();
//! assert_eq!(convert.name, "convert");
//! assert!(convert.find_option("precision").unwrap().takes_value());
//! ```

mod builder;
mod types;

pub use builder::{CommandBuilder, DefineError, GrammarBuilder};
pub use types::{
    CommandDef, Grammar, OptionDef, OptionType, OptionValue, ParsedCommand, ValidateFn,
};
