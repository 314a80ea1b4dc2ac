#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("input is empty")]
    EmptyInput,

    #[error("no data rows found after header detection")]
    NoDataRows,

    #[error("malformed input: {0}")]
    Structure(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
