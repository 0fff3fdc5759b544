use crate::ingest::IngestError;
use crate::report::ReportError;

#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    #[error("failure reading summary configuration: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    IngestError(#[from] IngestError),
    #[error(transparent)]
    ReportError(#[from] ReportError),
}
