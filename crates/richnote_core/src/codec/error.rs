use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to read a stored annotated text document.
#[derive(Debug)]
pub enum DecodeError {
    /// Document is not JSON or does not have the expected shape.
    Malformed(serde_json::Error),
    /// A span ends before it starts.
    InvalidRange {
        index: usize,
        start: usize,
        end: usize,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed annotated text payload: {err}"),
            Self::InvalidRange { index, start, end } => write!(
                f,
                "span {index} has invalid range {start}..{end}: start > end"
            ),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::InvalidRange { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}
