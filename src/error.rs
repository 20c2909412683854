//! Error types for response emission
//!
//! Only two conditions surface as errors: a payload that cannot be
//! represented in the negotiated wire format, and a configuration that
//! cannot be loaded. Unknown status codes and unknown intents are recovered
//! locally via fallbacks and never reach this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    /// Payload not representable in the chosen wire format; the emission
    /// attempt fails and is not retried.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Emitter configuration could not be loaded from file or environment.
    #[error("failed to load emitter configuration: {0}")]
    Config(#[from] config::ConfigError),
}
