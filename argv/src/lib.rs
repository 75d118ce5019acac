//! Argv parsing engine and help formatter for command grammars.
//!
//! This crate consumes the immutable definition model from
//! `command-grammar-core` and provides:
//!
//! - [`parse_argv`] — the token-consumption state machine turning a raw
//!   argv sequence into an ordered list of
//!   [`ParsedCommand`](command_grammar_core::ParsedCommand)s.
//! - [`help_message`] / [`write_help`] — summary and per-command detail
//!   help rendering over the same model.
//! - [`ParseError`] — the fatal error taxonomy for a parse run.
//!
//! # Example
//!
//! ```
//! use command_grammar_core::{CommandDef, Grammar, OptionDef, OptionValue};
//! use command_grammar_argv::{help_message, parse_argv};
//!
//! let grammar = Grammar::builder()
//!     .usage("Usage: mytool -command [options] ...")
//!     .command(
//!         CommandDef::build("convert")
//!             .alias("c")
//!             .describe("Convert a dataset to another format")
//!             .option(OptionDef::flag("verbose").with_describe("Print progress"))
//!             .option(OptionDef::number("precision").with_describe("Coordinate precision"))
//!             .done()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! let parsed = parse_argv(&grammar, ["-c", "-verbose", "precision=3", "in.dat"]).unwrap();
//! assert_eq!(parsed[0].name, "convert");
//! assert_eq!(parsed[0].option("verbose"), Some(&OptionValue::Bool(true)));
//!
//! let help = help_message(&grammar, &[]);
//! assert!(help.contains("-convert, -c"));
//! ```

mod error;
mod help;
mod parse;

pub use error::{ParseError, Result};
pub use help::{help_message, write_help};
pub use parse::parse_argv;
