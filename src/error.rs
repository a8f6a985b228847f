use thiserror::Error;

/// Warning shown when no attribute field yields a value.
pub const EMPTY_INPUT_WARNING: &str = "Please enter at least one attribute with values.";

/// Errors that can occur while generating or exporting combinations
#[derive(Error, Debug)]
pub enum CombinationError {
    /// No attribute field produced any non-empty value
    #[error("{}", EMPTY_INPUT_WARNING)]
    EmptyInput,

    /// The cross product would not fit in a single worksheet
    #[error("Too many combinations: the attributes would produce more than {limit} rows")]
    TooManyCombinations { limit: usize },

    /// More attribute fields than a session allows
    #[error("A session has at most {limit} attribute fields")]
    TooManyFields { limit: usize },

    /// The workbook writer rejected the table content
    #[error("Spreadsheet serialization failed: {0}")]
    Serialization(#[from] rust_xlsxwriter::XlsxError),

    /// A cell holds more characters than a worksheet cell accepts
    #[error("Spreadsheet serialization failed: {column} has a value longer than {limit} characters")]
    CellTooLong { column: String, limit: usize },

    /// The table does not fit in a single worksheet
    #[error("Spreadsheet serialization failed: {rows} rows x {columns} columns exceed the worksheet limits")]
    SheetLimitExceeded { rows: usize, columns: usize },
}

impl CombinationError {
    /// True for the errors surfaced to the user as a serialization failure
    pub fn is_serialization_failure(&self) -> bool {
        matches!(
            self,
            CombinationError::Serialization(_)
                | CombinationError::SheetLimitExceeded { .. }
                | CombinationError::CellTooLong { .. }
        )
    }
}
