/// Error types for the remote catalog path
use thiserror::Error;

/// Errors that can occur while talking to the remote catalog service.
///
/// None of these reach the user: the catalog service logs them, latches
/// fallback mode and answers from the bundled snapshot instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No base address configured, or the HTTP client could not be built
    #[error("Remote catalog is disabled")]
    Disabled,

    /// The request did not complete within the configured timeout
    #[error("Remote catalog timed out after {0} ms")]
    Timeout(u128),

    /// Connection refused, DNS failure, TLS failure and friends
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Remote catalog returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected
    #[error("Malformed response body: {0}")]
    Decode(String),
}
