use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Input data is missing a required field or carries a value of the
    /// wrong type. `row` is the zero-based input position when known.
    #[error("schema error{}: {message}", row.map(|r| format!(" at row {r}")).unwrap_or_default())]
    Schema {
        row: Option<usize>,
        message: String,
    },

    #[error("shape error: expected {expected}, found {found}")]
    Shape { expected: String, found: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChartError {
    pub(crate) fn schema(row: Option<usize>, message: impl Into<String>) -> Self {
        Self::Schema {
            row,
            message: message.into(),
        }
    }

    pub(crate) fn shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Shape {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
