use super::{Ingestor, SelectedFile};

use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::Builder;

use crate::types::{IngestError, MAX_FILE_SIZE};

const SAMPLE_CSV: &str = "date,product,quantity,revenue\n2024-01-02,A,3,10.00\n2024-01-01,B,x,5.5\n";

async fn ingest_bytes(name: &str, contents: &[u8]) -> Result<crate::models::Dataset, IngestError> {
    Ingestor::new().ingest(Some(&SelectedFile::from_bytes(name, contents))).await
}

#[tokio::test]
async fn test_ingest_parses_rows_with_lenient_numbers() -> Result<()> {
    let dataset = ingest_bytes("sales.csv", SAMPLE_CSV.as_bytes()).await?;
    let rows = dataset.transactions();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-02");
    assert_eq!(rows[0].product, "A");
    assert_eq!(rows[0].quantity, Decimal::from(3));
    assert_eq!(rows[0].revenue, Decimal::new(1000, 2));
    assert_eq!(rows[1].quantity, Decimal::ZERO);
    assert_eq!(rows[1].revenue, Decimal::new(55, 1));

    Ok(())
}

#[tokio::test]
async fn test_ingest_requires_a_file() {
    let result = Ingestor::new().ingest(None).await;

    assert_eq!(result, Err(IngestError::MissingFile));
}

#[tokio::test]
async fn test_ingest_rejects_non_csv_names_case_sensitively() {
    for name in ["data.txt", "data.CSV", "data.csv.bak", "csv"] {
        let result = ingest_bytes(name, SAMPLE_CSV.as_bytes()).await;

        assert!(matches!(result, Err(IngestError::InvalidExtension { .. })), "name {name}");
    }
}

#[tokio::test]
async fn test_ingest_checks_extension_before_size() {
    let ingestor = Ingestor::new().with_max_file_size(4);
    let result = ingestor.ingest(Some(&SelectedFile::from_bytes("data.txt", SAMPLE_CSV))).await;

    assert!(matches!(result, Err(IngestError::InvalidExtension { .. })));
}

#[tokio::test]
async fn test_ingest_rejects_files_over_ten_mebibytes() {
    let mut contents = SAMPLE_CSV.as_bytes().to_vec();
    contents.resize(MAX_FILE_SIZE as usize + 1, b'\n');

    let result = ingest_bytes("big.csv", &contents).await;

    assert_eq!(result, Err(IngestError::FileTooLarge { size: MAX_FILE_SIZE + 1, limit: MAX_FILE_SIZE }));
}

#[tokio::test]
async fn test_ingest_accepts_file_exactly_at_size_limit() -> Result<()> {
    let ingestor = Ingestor::new().with_max_file_size(SAMPLE_CSV.len() as u64);
    let dataset = ingestor.ingest(Some(&SelectedFile::from_bytes("sales.csv", SAMPLE_CSV))).await?;

    assert_eq!(dataset.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_ingest_reports_all_required_columns_when_one_is_missing() {
    let result = ingest_bytes("sales.csv", b"date,product,quantity\n2024-01-01,A,1\n").await;

    assert_eq!(result, Err(IngestError::MissingColumns {
        required: vec!["date".into(), "product".into(), "quantity".into(), "revenue".into()]
    }));
}

#[tokio::test]
async fn test_ingest_matches_headers_exactly() {
    for header in ["date,product,quantity,Revenue", "date,product,quantity, revenue", ""] {
        let contents = format!("{header}\n2024-01-01,A,1,1\n");
        let result = ingest_bytes("sales.csv", contents.as_bytes()).await;

        assert!(matches!(result, Err(IngestError::MissingColumns { .. })), "header {header:?}");
    }
}

#[tokio::test]
async fn test_ingest_rejects_header_only_and_blank_files() {
    for contents in ["date,product,quantity,revenue", "date,product,quantity,revenue\n\n\n"] {
        let result = ingest_bytes("sales.csv", contents.as_bytes()).await;

        assert_eq!(result, Err(IngestError::EmptyFile), "contents {contents:?}");
    }
}

#[tokio::test]
async fn test_ingest_surfaces_parser_errors() {
    let result = ingest_bytes("sales.csv", b"date,product,quantity,revenue\n2024-01-01,\xff\xfe,1,1\n").await;

    assert!(matches!(result, Err(IngestError::ParseFailure { ref message }) if !message.is_empty()));
}

#[tokio::test]
async fn test_ingest_ignores_extra_columns_and_tolerates_short_rows() -> Result<()> {
    let contents = "region,revenue,product,date,quantity\nnorth,7.25,Gadget,2024-02-01,2\nsouth,3\n";
    let dataset = ingest_bytes("sales.csv", contents.as_bytes()).await?;
    let rows = dataset.transactions();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].product, "Gadget");
    assert_eq!(rows[0].revenue, Decimal::new(725, 2));
    assert_eq!(rows[1].revenue, Decimal::from(3));
    assert_eq!(rows[1].product, "");
    assert_eq!(rows[1].quantity, Decimal::ZERO);

    Ok(())
}

#[tokio::test]
async fn test_ingest_keeps_labels_untrimmed() -> Result<()> {
    let dataset = ingest_bytes("sales.csv", b"date,product,quantity,revenue\n 2024-01-01 , Widget ,1,1\n").await?;

    assert_eq!(dataset.transactions()[0].product, " Widget ");
    assert_eq!(dataset.transactions()[0].date, " 2024-01-01 ");

    Ok(())
}

#[tokio::test]
async fn test_ingest_reads_selected_file_from_disk() -> Result<()> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    write!(file, "{SAMPLE_CSV}")?;
    file.flush()?;

    let selected = SelectedFile::from_path(file.path()).await?;

    assert!(selected.name().ends_with(".csv"));
    assert_eq!(selected.size(), SAMPLE_CSV.len() as u64);

    let dataset = Ingestor::new().ingest(Some(&selected)).await?;

    assert_eq!(dataset.len(), 2);

    Ok(())
}
