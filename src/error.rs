use thiserror::Error;

/// Structural failures raised while rewriting a document.
///
/// All of these are fatal for the run: the pass that hit them discards its
/// partially built output instead of returning a truncated document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// An option span `[...]` never closes.
    #[error("syntax error, expected a closing ] for the [ at offset {at}")]
    UnterminatedOption { at: usize },
    /// An argument group `{...}` never closes.
    #[error("unclosed {{ at offset {at}")]
    UnclosedArgument { at: usize },
    /// The argument group to preserve does not exist in the chain.
    #[error("\\{name} has no argument group at index {index}")]
    ArgumentOutOfRange { name: String, index: usize },
}

/// Failures parsing a `name:action[:index]` specification token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("empty macro name in \"{0}\"")]
    EmptyName(String),
    #[error("expected a single operation letter in \"{0}\"")]
    MissingAction(String),
    #[error("invalid operation character in \"{0}\"")]
    InvalidAction(String),
    #[error("invalid argument to preserve value in \"{0}\"")]
    InvalidIndex(String),
}
