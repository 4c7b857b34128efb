use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lines share the slope {slope} and have no single intersection")]
    ParallelLines { slope: String },

    #[error("expected a value greater than 0, got {0}")]
    NotPositive(String),

    #[error("circular array needs a capacity greater than 0")]
    EmptyCircularArray,

    #[error("unable to convert {0:?} to binary, not a hexadecimal digit")]
    InvalidHexDigit(char),

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("expected row {row} to have width {expected}, found {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
