//! Output formatting for API responses.

use crate::config::OutputFormat;
use crate::rapidapi::ApiResponse;

/// Formats responses for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a response. Errors render as `{"error": "..."}`.
    pub fn format_response(&self, response: &ApiResponse) -> String {
        let value = response.to_value();
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&value),
            OutputFormat::Compact => serde_json::to_string(&value),
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
