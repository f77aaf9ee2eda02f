use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unknown report [{name}], use the list command to see available reports")]
    UnknownReport { name: String },
    #[error("Failed to write report output: {0}")]
    Output(#[from] csv::Error),
    #[error("Failed to flush report output: {0}")]
    Flush(#[from] std::io::Error),
}
