/// Failure taxonomy of the AI Edit Adapter.
///
/// Every variant is surfaced to the caller; none are retried
/// automatically. `NotConfigured` is kept distinct from transient
/// failures so the UI can explain that configuration is needed instead
/// of offering a retry.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API credential is configured.
    #[error("AI service not available - API key not configured")]
    NotConfigured,

    /// The external capability was reachable but the call failed
    /// (transport error, timeout, rate limit, provider error).
    #[error("AI request failed: {0}")]
    Request(String),

    /// The provider answered with no usable content.
    #[error("AI request failed: no response from AI")]
    EmptyResponse,

    /// The response body was not parseable as a JSON object, or did not
    /// match the section's expected shape.
    #[error("AI returned invalid JSON: {0}")]
    InvalidJson(String),
}
