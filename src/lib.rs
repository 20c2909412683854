//! HTTP response emission helper
//!
//! Given a status code, a content-type intent, and a payload, this crate
//! produces the correct status line, headers (Content-Type, ETag), and
//! serialized body, then terminates the request-handling unit of work.
//! Exactly one terminal response is emitted per request.
//!
//! The transport primitives are abstracted behind [`sink::ResponseSink`]:
//! [`sink::HyperSink`] collects into a `hyper::Response` for use inside a
//! hyper service, and [`sink::BufferSink`] is an in-memory substitute for
//! tests and raw-wire emission.
//!
//! ```
//! use http_respond::{BufferSink, ContentType, ResponseEmitter};
//!
//! let emitter = ResponseEmitter::new(BufferSink::new());
//! let sink = emitter
//!     .send_message("ok", 200, Some("done"), ContentType::Json)
//!     .unwrap();
//! assert_eq!(sink.status_line(), "HTTP/1.1 200 OK");
//! assert_eq!(sink.body(), br#"{"result":"ok","message":"done","code":200}"#);
//! ```

pub mod config;
pub mod content;
pub mod emitter;
pub mod error;
pub mod etag;
pub mod logger;
pub mod sink;
pub mod status;

// Re-export commonly used types
pub use config::EmitterConfig;
pub use content::ContentType;
pub use emitter::{EmitState, MessageEnvelope, ResponseEmitter};
pub use error::EmitError;
pub use sink::{BufferSink, HyperSink, ResponseSink};
