//! Streaming error type.

/// Errors raised by the envelope sink.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("initial chunk not sent before deferred data")]
    InitialNotSent,

    #[error("initial chunk already sent")]
    InitialAlreadySent,

    #[error("stream already completed")]
    Completed,

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("streaming error: {0}")]
    Transport(String),
}
