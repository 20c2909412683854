//! Response emitter module
//!
//! Drives the single-shot response assembly pipeline: status line and headers
//! before any body byte, body before termination, nothing after termination.
//! Terminal operations consume the emitter, so a terminated response cannot
//! be written to again.

use hyper::StatusCode;
use serde::Serialize;

use crate::config::EmitterConfig;
use crate::content::{self, ContentType};
use crate::error::EmitError;
use crate::etag;
use crate::logger;
use crate::sink::ResponseSink;
use crate::status;

/// Response assembly states. Transitions are strictly ordered and
/// single-shot; `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitState {
    Idle,
    HeadersSent,
    BodyWritten,
    Terminated,
}

/// Fixed-shape message envelope: `{ "result", "message", "code" }`
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub result: String,
    pub message: Option<String>,
    pub code: u16,
}

/// Assembles and emits exactly one response into a sink
pub struct ResponseEmitter<S: ResponseSink> {
    sink: S,
    config: EmitterConfig,
    state: EmitState,
}

impl<S: ResponseSink> ResponseEmitter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, EmitterConfig::default())
    }

    pub const fn with_config(sink: S, config: EmitterConfig) -> Self {
        Self {
            sink,
            config,
            state: EmitState::Idle,
        }
    }

    pub const fn state(&self) -> EmitState {
        self.state
    }

    fn fallback(&self) -> StatusCode {
        status::resolve(self.config.fallback_status, StatusCode::OK)
    }

    fn error_fallback(&self) -> StatusCode {
        status::resolve(
            self.config.error_fallback_status,
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// Assert the status line
    ///
    /// Strips implementation-identifying headers first, then resolves the raw
    /// code against the configured fallback status.
    pub fn send_status(&mut self, raw_code: u16) {
        for name in &self.config.strip_headers {
            self.sink.remove_header(name);
        }
        let code = status::resolve(raw_code, self.fallback());
        self.sink
            .set_status(code.as_u16(), status::reason_phrase(code.as_u16()));
        self.state = EmitState::HeadersSent;
    }

    /// Emit cache tag, content type, and body, then terminate
    ///
    /// A `None` payload is the "no content" contract: the cache tag still
    /// goes out, but no Content-Type header and no body are written before
    /// termination. Returns the sink so the finished response can be
    /// recovered.
    pub fn send_body<T: Serialize>(
        mut self,
        payload: Option<&T>,
        content_type: ContentType,
        etag_override: Option<&dyn Fn() -> String>,
    ) -> Result<S, EmitError> {
        let serialized = match payload {
            Some(value) => {
                match content::serialize_body(value, content_type, self.config.pretty_json) {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        logger::log_error(&format!("Failed to serialize payload: {e}"));
                        return Err(e);
                    }
                }
            }
            None => None,
        };

        etag::emit_cache_tag(
            &mut self.sink,
            serialized.as_deref().unwrap_or_default(),
            etag_override,
        );

        let Some(body) = serialized else {
            return Ok(self.terminate());
        };

        content::emit_content_type(&mut self.sink, content_type);
        self.state = EmitState::HeadersSent;

        self.sink.write_body(&body);
        self.state = EmitState::BodyWritten;

        Ok(self.terminate())
    }

    /// Send a fixed-shape message envelope
    ///
    /// Builds `{ "result", "message", "code" }` with the raw code resolved
    /// against the configured fallback, and forwards to [`Self::send_body`].
    /// Does not assert a status line; callers wanting one use
    /// [`Self::send_error`] or [`Self::send_status`] first.
    pub fn send_message(
        self,
        result: &str,
        raw_code: u16,
        message: Option<&str>,
        content_type: ContentType,
    ) -> Result<S, EmitError> {
        let code = status::resolve(raw_code, self.fallback());
        let envelope = MessageEnvelope {
            result: result.to_string(),
            message: message.map(str::to_string),
            code: code.as_u16(),
        };
        self.send_body(Some(&envelope), content_type, None)
    }

    /// Send a complete, well-formed error response
    ///
    /// Resolves the reason phrase for `raw_code`, asserts the status line,
    /// and emits the message envelope with the reason phrase as `result` and
    /// the caller's message as detail.
    pub fn send_error(
        mut self,
        message: &str,
        raw_code: u16,
        content_type: ContentType,
    ) -> Result<S, EmitError> {
        let code = status::resolve(raw_code, self.error_fallback());
        self.send_status(code.as_u16());
        self.send_message(
            status::reason_phrase(code.as_u16()),
            code.as_u16(),
            Some(message),
            content_type,
        )
    }

    fn terminate(mut self) -> S {
        self.state = EmitState::Terminated;
        self.sink
    }
}
