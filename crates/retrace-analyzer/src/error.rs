use thiserror::Error;

/// Failure modes of the external generation service.
///
/// These never cross the analyzer boundary: every variant collapses
/// into the degraded `AnalysisResult` before reaching callers.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to generation service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Generation service returned no content")]
    EmptyResponse,

    #[error("Analysis response violated the expected schema: {0}")]
    Contract(String),
}
