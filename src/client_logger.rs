//! Logging trait for Gemini client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all API interactions passing through the [`Gemini`]
//! client.
//!
//! [`Gemini`]: crate::Gemini

use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// A trait for logging Gemini client operations.
///
/// Implement this trait to capture and record all API interactions for
/// diagnostics. Failures are never retried by the client; the logger is the
/// only place they are recorded.
///
/// # Example
///
/// ```rust,ignore
/// use declutter::{ClientLogger, GenerateContentRequest, GenerateContentResponse};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, request: &GenerateContentRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &GenerateContentResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log an outbound request.
    ///
    /// Called once per `generate` call, before the request is sent. The
    /// request body includes any inline image payloads.
    fn log_request(&self, request: &GenerateContentRequest);

    /// Log a complete response from a successful `generate` call.
    fn log_response(&self, response: &GenerateContentResponse);
}
