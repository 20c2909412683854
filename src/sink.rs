//! Response sink module
//!
//! Abstracts the header/body transport primitives behind a narrow interface,
//! so the emitter can target a live hyper response or an in-memory buffer
//! interchangeably. Writes are fire-and-forget: the transport either accepts
//! them or the whole emission attempt is lost, so sink methods do not fail.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::{Response, StatusCode};

use crate::logger;
use crate::status;

/// Narrow transport interface for one in-flight response
pub trait ResponseSink {
    /// Assert the status line. Last call wins.
    fn set_status(&mut self, code: u16, reason: &'static str);
    /// Set a header, replacing any existing header with the same name.
    fn set_header(&mut self, name: &str, value: &str);
    /// Remove a header if present.
    fn remove_header(&mut self, name: &str);
    /// Append body bytes.
    fn write_body(&mut self, chunk: &[u8]);
}

/// In-memory sink for tests and raw-wire emission
#[derive(Debug)]
pub struct BufferSink {
    status: u16,
    reason: &'static str,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self {
            status: 200,
            reason: status::reason_phrase(200),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Get a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Count headers with the given case-insensitive name
    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .count()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Format the status line, e.g. `HTTP/1.1 200 OK`
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.status, self.reason)
    }

    /// Consume the sink into raw wire bytes: status line, headers, blank
    /// line, body
    pub fn into_wire(self) -> Vec<u8> {
        let mut out = format!("{}\r\n", self.status_line()).into_bytes();
        for (name, value) in &self.headers {
            out.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
        }
        out.extend_from_slice(b"\r\n");
        out.extend_from_slice(&self.body);
        out
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for BufferSink {
    fn set_status(&mut self, code: u16, reason: &'static str) {
        self.status = code;
        self.reason = reason;
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_header(&mut self, name: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }

    fn write_body(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }
}

/// Sink that collects into a hyper response, for use inside a hyper service
#[derive(Debug)]
pub struct HyperSink {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl HyperSink {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Consume the sink into a finished hyper response
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from(self.body)));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl Default for HyperSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for HyperSink {
    fn set_status(&mut self, code: u16, _reason: &'static str) {
        // hyper supplies its own reason phrase for known codes
        match StatusCode::from_u16(code) {
            Ok(status) => self.status = status,
            Err(e) => logger::log_error(&format!("Rejected status code {code}: {e}")),
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            // HeaderMap::insert replaces, matching the sink contract
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => logger::log_error(&format!("Failed to set header {name}")),
        }
    }

    fn remove_header(&mut self, name: &str) {
        if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
            self.headers.remove(name);
        }
    }

    fn write_body(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }
}
