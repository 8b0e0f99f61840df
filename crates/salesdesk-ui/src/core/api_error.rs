//! Normalized failures for REST calls.
//!
//! # Design
//! - Classify every failure once, at the transport boundary.
//! - Keep not-found distinct so edit pages can render a terminal state.
//! - Prefer the backend `detail` text; fall back to the raw body, then the status.

use salesdesk_api_models::ErrorBody;
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable response reached the client (network, timeout, decode).
    #[error("{0}")]
    Transport(String),
    /// The session token was rejected.
    #[error("unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,
    /// Any other non-2xx response.
    #[error("{detail}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message carried by the error body.
        detail: String,
    },
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => {
                let detail = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(|parsed| parsed.message())
                    .or_else(|| {
                        let trimmed = body.trim();
                        (!trimmed.is_empty() && !trimmed.starts_with('{'))
                            .then(|| trimmed.to_string())
                    })
                    .unwrap_or_else(|| format!("HTTP {status}"));
                Self::Server { status, detail }
            }
        }
    }

    /// Wrap a transport-level failure.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Text shown to the user, with a screen-specific fallback for generic failures.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { detail, .. } if !detail.is_empty() => detail.clone(),
            Self::Unauthorized => {
                "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.".to_string()
            }
            Self::NotFound => "Không tìm thấy dữ liệu".to_string(),
            Self::Transport(_) | Self::Server { .. } => fallback.to_string(),
        }
    }

    /// Whether the failure means the session must end.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_response(404, r#"{"detail":"missing"}"#),
            ApiError::NotFound
        );
    }

    #[test]
    fn server_errors_prefer_detail_text() {
        let err = ApiError::from_response(400, r#"{"detail":"Mã sản phẩm đã tồn tại"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                detail: "Mã sản phẩm đã tồn tại".to_string()
            }
        );
        assert_eq!(err.user_message("fallback"), "Mã sản phẩm đã tồn tại");
    }

    #[test]
    fn validation_lists_use_first_message() {
        let err = ApiError::from_response(
            422,
            r#"{"detail":[{"loc":["body","giaban"],"msg":"Giá bán phải lớn hơn 0"}]}"#,
        );
        assert_eq!(err.to_string(), "Giá bán phải lớn hơn 0");
    }

    #[test]
    fn raw_bodies_and_empty_bodies_fall_back() {
        assert_eq!(
            ApiError::from_response(502, "Bad Gateway").to_string(),
            "Bad Gateway"
        );
        assert_eq!(ApiError::from_response(500, "").to_string(), "HTTP 500");
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "HTTP 500");
    }

    #[test]
    fn transport_failures_use_screen_fallback() {
        let err = ApiError::transport("timeout");
        assert_eq!(err.user_message("Không thể tải dữ liệu"), "Không thể tải dữ liệu");
        assert!(!err.is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
    }
}
