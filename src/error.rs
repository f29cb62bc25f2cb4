use std::fmt;

/// The type of error that can occur when parsing a pattern or generating from it.
#[derive(Debug, PartialEq)]
pub struct Error(pub(crate) ErrorRepr);

/// The category of an [`Error`], see [`Error::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The pattern is not a valid regular expression.
    Parse,
    /// The pattern uses an operator that cannot be generated, e.g. `\b`.
    UnsupportedOperator,
    /// A text anchor (or a line end with nothing written yet) stopped generation.
    AnchorStop,
    /// The output grew past the configured `max_len`.
    OutputLimit,
    /// A hand-built [`crate::Node`] is malformed.
    InvalidNode,
    /// The random source failed to produce a value.
    Entropy,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            ErrorRepr::Parse(_) | ErrorRepr::Utf8(_) => ErrorKind::Parse,
            ErrorRepr::Unsupported(_) => ErrorKind::UnsupportedOperator,
            ErrorRepr::AnchorStop(_) => ErrorKind::AnchorStop,
            ErrorRepr::OutputLimit(_) => ErrorKind::OutputLimit,
            ErrorRepr::InvalidNode(_) => ErrorKind::InvalidNode,
            ErrorRepr::Entropy(_) => ErrorKind::Entropy,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorRepr::Parse(e) => Some(e),
            ErrorRepr::Utf8(e) => Some(e),
            ErrorRepr::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum ErrorRepr {
    Parse(regex_syntax::Error),
    Utf8(std::str::Utf8Error),
    Unsupported(&'static str),
    AnchorStop(&'static str),
    OutputLimit(usize),
    InvalidNode(String),
    Entropy(arbitrary::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorRepr::Parse(e) => e.fmt(f),
            ErrorRepr::Utf8(e) => write!(f, "Literal is not valid utf8: {}", e),
            ErrorRepr::Unsupported(op) => write!(f, "Unsupported operator: {}", op),
            ErrorRepr::AnchorStop(anchor) => write!(f, "Cannot satisfy anchor: {}", anchor),
            ErrorRepr::OutputLimit(max) => write!(f, "Output exceeded {} bytes", max),
            ErrorRepr::InvalidNode(e) => write!(f, "Invalid node: {}", e),
            ErrorRepr::Entropy(e) => write!(f, "Random source failed: {}", e),
        }
    }
}

impl From<regex_syntax::Error> for Error {
    fn from(e: regex_syntax::Error) -> Self {
        Self(ErrorRepr::Parse(e))
    }
}

impl From<arbitrary::Error> for Error {
    fn from(e: arbitrary::Error) -> Self {
        Self(ErrorRepr::Entropy(e))
    }
}
