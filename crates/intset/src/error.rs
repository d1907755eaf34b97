use thiserror::Error;

/// Classified reason a set literal was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `{` or `}` appeared where the brace structure does not allow one.
    #[error("unbalanced braces")]
    UnbalancedBraces,
    /// The input ended before the set was closed with `}`.
    #[error("missing closing brace")]
    MissingClosingBrace,
    /// Two commas occurred with no number between them.
    #[error("duplicate separator")]
    DuplicateSeparator,
    /// Two numbers occurred with no comma between them.
    #[error("missing separator")]
    MissingSeparator,
    /// A comma with no number after it.
    #[error("dangling comma")]
    DanglingComma,
    /// A character outside the literal grammar.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    /// A number too large for a 32-bit signed integer.
    #[error("integer out of range")]
    NumericOverflow,
    /// The element buffer could not grow.
    #[error("allocation failed")]
    AllocationError,
}

/// Error returned when parsing a set literal fails.
///
/// Parsing fails fast: the first violated rule aborts the parse and no
/// partial set is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) offset: usize,
}

impl ParseError {
    /// The classified reason for the failure.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset into the literal at which the rule was violated.
    ///
    /// Checks performed at end of input report the input length.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
