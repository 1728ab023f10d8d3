use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::error::CatalogError;

pub const EXPECTED_COLUMNS: [&str; 6] = [
    "service",
    "category",
    "subcategory",
    "price_recommended_mad",
    "price_avg_min_mad",
    "price_avg_max_mad",
];

/// One line of the offer export. Missing columns and empty cells are `None`.
#[derive(Debug, Clone, Default)]
pub struct SourceRow {
    pub service: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price_recommended_mad: Option<String>,
    pub price_avg_min_mad: Option<String>,
    pub price_avg_max_mad: Option<String>,
}

impl SourceRow {
    /// Rows without a service name carry no identity and are skipped.
    pub fn has_service(&self) -> bool {
        self.service.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// ISO-8859-1: every byte is the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    parse_rows(&decode_latin1(&bytes))
}

pub fn parse_rows(text: &str) -> Result<Vec<SourceRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in missing_columns(&headers) {
        warn!(column, "source header is missing an expected column");
    }
    let columns: Vec<Option<usize>> = EXPECTED_COLUMNS
        .into_iter()
        .map(|column| headers.iter().position(|h| h == column))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let get = |i: usize| cell(&record, columns[i]);
        rows.push(SourceRow {
            service: get(0),
            category: get(1),
            subcategory: get(2),
            price_recommended_mad: get(3),
            price_avg_min_mad: get(4),
            price_avg_max_mad: get(5),
        });
    }
    Ok(rows)
}

pub fn missing_columns(headers: &StringRecord) -> Vec<&'static str> {
    EXPECTED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect()
}

/// Short rows and absent columns read the same as an empty cell.
fn cell(record: &StringRecord, column: Option<usize>) -> Option<String> {
    column
        .and_then(|i| record.get(i))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
