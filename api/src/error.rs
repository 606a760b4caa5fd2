use thiserror::Error;

/// Failure classes for calls to the analysis service.
///
/// `Server` carries whatever message the service supplied (or a generic
/// status fallback), `Network` means no response was received at all, and
/// `Unexpected` covers everything else. Field-level validation never reaches
/// this crate; the form rejects bad drafts before a request is built.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: Unable to connect to server")]
    Network,

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if err.is_timeout() || err.is_connect() {
            return ApiError::Network;
        }

        #[cfg(target_arch = "wasm32")]
        if err.is_request() {
            return ApiError::Network;
        }

        ApiError::Unexpected(err.to_string())
    }

    /// Build a `Server` error from a non-2xx body, preferring the service's
    /// own `message`/`error` fields.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Server error: {status}"));

        ApiError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_response(422, r#"{"message":"Resume could not be parsed"}"#);
        assert_eq!(err.to_string(), "Resume could not be parsed");
    }

    #[test]
    fn error_field_is_second_choice() {
        let err = ApiError::from_response(500, r#"{"error":"analysis pipeline crashed"}"#);
        assert_eq!(err.to_string(), "analysis pipeline crashed");
    }

    #[test]
    fn falls_back_to_generic_status_message() {
        let err = ApiError::from_response(503, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Server error: 503");
        match err {
            ApiError::Server { status, .. } => assert_eq!(status, 503),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn network_error_has_connectivity_message() {
        assert_eq!(
            ApiError::Network.to_string(),
            "Network error: Unable to connect to server"
        );
    }
}
