use thiserror::Error;

/// Rejection of a dataset row at load time.
///
/// Every variant except [`RecordError::Io`] describes a malformed record and
/// carries the 1-based line it was read from (0 for records built in memory).
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line {line}: expected 3 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: record id is empty")]
    EmptyId { line: usize },

    #[error("line {line}: unknown party label `{label}`")]
    UnknownCategory { line: usize, label: String },

    #[error("line {line}: expected {expected} votes, found {found}")]
    Width {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid vote `{symbol}` at position {position}")]
    InvalidVote {
        line: usize,
        symbol: char,
        position: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RecordError {
    pub fn line(&self) -> Option<usize> {
        match self {
            RecordError::FieldCount { line, .. }
            | RecordError::EmptyId { line }
            | RecordError::UnknownCategory { line, .. }
            | RecordError::Width { line, .. }
            | RecordError::InvalidVote { line, .. } => Some(*line),
            RecordError::Io(_) => None,
        }
    }
}
