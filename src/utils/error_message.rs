use serde_json::Value;

/// The parts of a failed request that may carry a human readable message,
/// in the order they are looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    /// Raw response body
    pub response_text: Option<String>,
    /// Any other textual response attached to the failure
    pub response: Option<String>,
    /// HTTP status line reason
    pub status_text: Option<String>,
}

impl FailureReport {
    pub fn with_response_text(mut self, response_text: impl Into<String>) -> Self {
        self.response_text = Some(response_text.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = Some(status_text.into());
        self
    }

    fn candidate(&self) -> Option<&str> {
        [&self.response_text, &self.response, &self.status_text]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
    }
}

/// Builds the message shown to the user for a failed request.
///
/// A JSON body with `error.message` (or a top-level `message`) yields that
/// message, any other text is shown verbatim and `fallback` is used when
/// the failure carries no text at all.
pub fn extract_error_message(report: &FailureReport, fallback: &str) -> String {
    let Some(candidate) = report.candidate() else {
        return fallback.to_string();
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => message_from_json(&value).unwrap_or(candidate).to_string(),
        Err(_) => candidate.to_string(),
    }
}

fn message_from_json(value: &Value) -> Option<&str> {
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .filter(|message| !message.is_empty())
}
