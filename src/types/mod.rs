mod calendar;
mod errors;
mod lenient;

pub use calendar::parse_calendar_date;
pub use errors::{IngestError, NumericError};
pub use lenient::{coerce_decimal, lenient_decimal, lenient_text, parse_decimal};

/// Largest upload accepted by the ingestor, in bytes (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Header columns every uploaded CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "product", "quantity", "revenue"];

/// File suffix accepted by the ingestor (case-sensitive).
pub const CSV_EXTENSION: &str = ".csv";
