//! HTTP status catalog module
//!
//! Maps numeric status codes to their canonical reason phrases and resolves
//! raw integers from untyped sources into known status codes.

use hyper::StatusCode;

/// Phrase returned for any code value not present in the catalog.
pub const UNKNOWN_STATUS: &str = "Unknown HTTP status code";

/// Get the canonical reason phrase for a numeric status code
///
/// Total over all integers; unrecognized codes yield [`UNKNOWN_STATUS`]
/// instead of failing.
///
/// # Examples
/// ```
/// use http_respond::status::reason_phrase;
/// assert_eq!(reason_phrase(200), "OK");
/// assert_eq!(reason_phrase(404), "Not Found");
/// assert_eq!(reason_phrase(999), "Unknown HTTP status code");
/// ```
pub const fn reason_phrase(code: u16) -> &'static str {
    match code {
        // 1xx Informational
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",

        // 2xx Success
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",

        // 3xx Redirection
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",

        // 4xx Client errors
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",

        // 5xx Server errors
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",

        // Default
        _ => UNKNOWN_STATUS,
    }
}

/// Check whether a numeric code is present in the catalog
pub fn is_known(code: u16) -> bool {
    reason_phrase(code) != UNKNOWN_STATUS
}

/// Resolve a raw integer from an untyped source into a known status code
///
/// Falls back to `fallback` when the integer does not match any catalog
/// entry, so callers can pass raw numeric codes safely.
pub fn resolve(raw: u16, fallback: StatusCode) -> StatusCode {
    if is_known(raw) {
        StatusCode::from_u16(raw).unwrap_or(fallback)
    } else {
        fallback
    }
}
