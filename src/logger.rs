//! Logger module
//!
//! Narrow logging helpers used on serialization failures and response-build
//! fallbacks. Lines go to stderr with a local timestamp.

use chrono::Local;

fn write_error(message: &str) {
    eprintln!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
