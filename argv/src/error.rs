//! Error types for argv parsing.
//!
//! Every variant is fatal: the engine stops the whole multi-command parse
//! at the first occurrence and propagates it to the caller. How the error
//! terminates the program (print-and-exit, panic, conversion into another
//! error type) is the embedding application's decision.

use thiserror::Error;

/// Errors that can occur while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A command name was required but the next token does not have the
    /// command-switch shape and no default command applies.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A well-formed command switch named a command missing from the
    /// grammar.
    #[error("unknown command: -{0}")]
    UnknownCommand(String),

    /// Inline `name=value` syntax used against an option that takes no
    /// value (a flag or an enumerated-group member).
    #[error("-{command} {option} doesn't take a value")]
    InlineValueNotAllowed { command: String, option: String },

    /// Value coercion failed, or the value token is missing entirely.
    #[error("invalid value for -{command} {option}")]
    InvalidOptionValue { command: String, option: String },

    /// A command's validator rejected the assembled parse result. The
    /// original message is preserved behind the command-name prefix.
    #[error("[{command}] {message}")]
    Validation { command: String, message: String },
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::UnknownCommand("badcmd".into()).to_string(),
            "unknown command: -badcmd"
        );
        assert_eq!(
            ParseError::InlineValueNotAllowed {
                command: "convert".into(),
                option: "verbose".into(),
            }
            .to_string(),
            "-convert verbose doesn't take a value"
        );
        assert_eq!(
            ParseError::Validation {
                command: "filter".into(),
                message: "missing expression".into(),
            }
            .to_string(),
            "[filter] missing expression"
        );
    }
}
