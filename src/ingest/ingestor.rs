use csv::ReaderBuilder;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::ingest::SelectedFile;
use crate::models::{Dataset, Transaction};
use crate::types::{IngestError, CSV_EXTENSION, MAX_FILE_SIZE, REQUIRED_COLUMNS};

/// Validates an uploaded sales CSV and turns it into a [`Dataset`].
pub struct Ingestor {
    max_file_size: u64
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Runs the full validation and parsing pipeline for one upload.
    ///
    /// Checks run in order and stop at the first failure: presence, `.csv`
    /// suffix, size, required header columns, record syntax, and finally that
    /// at least one data row exists. The content is only read once the cheap
    /// checks have passed, and the dataset is returned only after every row has
    /// been parsed.
    pub async fn ingest(&self, file: Option<&SelectedFile>) -> Result<Dataset, IngestError> {
        let file = file.ok_or(IngestError::MissingFile)?;

        self.validate(file.name(), file.size())?;

        let contents = file.read().await.map_err(IngestError::parse_failure)?;

        //NOTE: The reported size can be stale for files on disk, so the limit is enforced again on what was actually read
        self.validate(file.name(), contents.len() as u64)?;

        let dataset = spawn_blocking(move || parse_dataset(&contents))
            .await
            .map_err(IngestError::parse_failure)??;

        info!("Ingested {} transactions from '{}'", dataset.len(), file.name());

        Ok(dataset)
    }

    fn validate(&self, name: &str, size: u64) -> Result<(), IngestError> {
        if !name.ends_with(CSV_EXTENSION) {
            return Err(IngestError::InvalidExtension { name: name.to_string() })
        }

        if size > self.max_file_size {
            return Err(IngestError::FileTooLarge { size, limit: self.max_file_size })
        }

        debug!("File '{name}' ({size} bytes) passed upload checks");

        Ok(())
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_dataset(contents: &[u8]) -> Result<Dataset, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents);

    let headers = reader.headers().map_err(IngestError::parse_failure)?;
    let has_required_columns = REQUIRED_COLUMNS.iter()
        .all(|column| headers.iter().any(|header| header == *column));

    if !has_required_columns {
        return Err(IngestError::missing_columns(&REQUIRED_COLUMNS))
    }

    let transactions = reader.deserialize::<Transaction>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(IngestError::parse_failure)?;

    if transactions.is_empty() {
        return Err(IngestError::EmptyFile)
    }

    Ok(Dataset::new(transactions))
}
