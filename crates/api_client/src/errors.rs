use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type FrontendResult<T> = Result<T, FrontendError>;

/// Stores the status as a bare `u16` so the error stays serializable, which
/// resource values have to be.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrontendError {
    status: Option<u16>,
    message: String,
}

impl FrontendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        Self {
            status: status.map(|s| s.as_u16()),
            message: message.into(),
        }
    }

    /// HTTP status of the failed request, if one was received at all.
    pub fn status(&self) -> Option<StatusCode> {
        self.status.and_then(|s| StatusCode::from_u16(s).ok())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}

impl Display for FrontendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FrontendError {}

#[cfg(target_family = "wasm")]
impl From<gloo_net::Error> for FrontendError {
    fn from(value: gloo_net::Error) -> Self {
        Self::new(value.to_string())
    }
}

#[cfg(not(target_family = "wasm"))]
impl From<reqwest::Error> for FrontendError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<url::ParseError> for FrontendError {
    fn from(value: url::ParseError) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for FrontendError {
    fn from(value: serde_urlencoded::ser::Error) -> Self {
        Self::new(value.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// The backend reports validation failures as `{"error": "..."}` and that
/// message is shown to the user verbatim. Anything else falls back to a
/// generic message.
pub(crate) fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|res| res.error)
        .unwrap_or_else(|_| "Request failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn server_error_body_is_surfaced_verbatim() {
        assert_eq!(
            server_error_message(r#"{"error": "名前を入力してください"}"#),
            "名前を入力してください"
        );
    }

    #[test]
    fn unparseable_bodies_fall_back_to_a_generic_message() {
        assert_eq!(server_error_message("<html>502</html>"), "Request failed");
        assert_eq!(server_error_message(""), "Request failed");
        assert_eq!(server_error_message(r#"{"detail": "nope"}"#), "Request failed");
    }

    #[test]
    fn unauthorized_is_detectable() {
        let err = FrontendError::with_status(Some(StatusCode::UNAUTHORIZED), "auth");
        assert!(err.is_unauthorized());
        assert!(!FrontendError::new("offline").is_unauthorized());
    }
}
