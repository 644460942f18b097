use thiserror::Error;

/// Reasons an upload attempt can be rejected.
///
/// Every variant is terminal for the attempt that produced it; the caller has to
/// select a new file. The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum IngestError {
    #[error("No file selected")]
    MissingFile,
    #[error("Please upload a CSV file (got '{name}')")]
    InvalidExtension {
        name: String
    },
    #[error("File size must be less than 10MB (got {size} bytes, limit {limit} bytes)")]
    FileTooLarge {
        size: u64,
        limit: u64
    },
    #[error("CSV must contain columns: {}", required.join(", "))]
    MissingColumns {
        required: Vec<String>
    },
    #[error("CSV file is empty")]
    EmptyFile,
    #[error("Error parsing CSV: {message}")]
    ParseFailure {
        message: String
    },
    #[error("Upload was cancelled before it finished")]
    Cancelled
}

impl IngestError {
    pub fn missing_columns(required: &[&str]) -> Self {
        Self::MissingColumns {
            required: required.iter().map(|column| column.to_string()).collect()
        }
    }

    pub fn parse_failure(error: impl ToString) -> Self {
        Self::ParseFailure { message: error.to_string() }
    }
}

/// Why a numeric cell could not be read.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum NumericError {
    #[error("Numeric error: '{0}' is not a number")]
    InvalidFormat(String),
    #[error("Numeric error: '{0}' is outside the representable range")]
    OutOfRange(String)
}
