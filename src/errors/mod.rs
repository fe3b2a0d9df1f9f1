use thiserror::Error;

pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Failures that abort a player ingestion run
#[derive(Error, Debug)]
pub enum IngestError {
    /// The data source could not be reached or answered with an error status
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A required field is missing or could not be parsed
    #[error("Malformed source data: {0}")]
    MalformedSourceData(String),

    /// The record store failed to read or write
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl IngestError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSourceData(msg.into())
    }

    /// Wraps an `anyhow` chain coming out of the database layer
    pub fn store(err: anyhow::Error) -> Self {
        Self::StoreUnavailable(format!("{err:#}"))
    }
}
