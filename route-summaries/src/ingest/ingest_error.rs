#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("could not open workbook '{path}': {message}")]
    SourceUnavailable { path: String, message: String },
}
