use thiserror::Error;

/// Errors raised while splitting a document.
///
/// None of these escape the public `split_document` surface; the
/// orchestrator renders them into `SplitResult::errors` strings.
#[derive(Error, Debug)]
pub enum SplitError {
    /// A field required by the selected split mode is missing or unusable.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// The source bytes are not a loadable PDF.
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// The source document has no pages to split.
    #[error("PDF file contains no pages")]
    EmptyDocument,

    /// Copying or serializing pages for one output failed. Fatal to the
    /// whole split; no partial outputs are returned.
    #[error("Failed to extract pages: {0}")]
    PageExtraction(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SplitError>;
