//! Arrival feed error types.

/// Errors from fetching and parsing the realtime arrival feed.
///
/// Every variant ends that fetch attempt only; none is fatal to the server.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No access key configured
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Base URL or fixture directory unusable
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// HTTP request failed (network error, timeout, non-success status)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Upstream reported a non-success code
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Response parsed but matched none of the known shapes
    #[error("unexpected response shape (keys: {})", keys.join(", "))]
    UnexpectedShape { keys: Vec<String> },
}

impl FetchError {
    /// Short machine-readable kind, used in logs and JSON responses.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotConfigured(_) | FetchError::InvalidSetup(_) => "config",
            FetchError::Transport(_) | FetchError::Json { .. } => "transport",
            FetchError::Api { .. } => "api",
            FetchError::UnexpectedShape { .. } => "unexpected_shape",
        }
    }
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|body| format!(" (body: {body})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Api {
            code: "ERROR-300".into(),
            message: "invalid key".into(),
        };
        assert_eq!(err.to_string(), "API error ERROR-300: invalid key");

        let err = FetchError::UnexpectedShape {
            keys: vec!["status".into(), "total".into()],
        };
        assert_eq!(
            err.to_string(),
            "unexpected response shape (keys: status, total)"
        );

        let err = FetchError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = FetchError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = FetchError::InvalidSetup("base URL x cannot carry a path".into());
        assert_eq!(err.kind(), "config");

        let err = FetchError::NotConfigured("SEOUL_API_KEY is not set".into());
        assert_eq!(err.to_string(), "not configured: SEOUL_API_KEY is not set");
    }

    #[test]
    fn kinds() {
        assert_eq!(FetchError::NotConfigured(String::new()).kind(), "config");
        assert_eq!(
            FetchError::Json {
                message: String::new(),
                body: None
            }
            .kind(),
            "transport"
        );
        assert_eq!(
            FetchError::UnexpectedShape { keys: vec![] }.kind(),
            "unexpected_shape"
        );
    }
}
