//! Login form model.

use crate::core::api_error::ApiError;
use crate::core::form::{FieldErrors, Validator};
use salesdesk_api_models::LoginRequest;

/// Shown when the backend rejects a login without a usable message.
pub const LOGIN_FAILED: &str = "Đăng nhập thất bại. Vui lòng kiểm tra thông tin đăng nhập.";

/// Credentials as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Account email.
    pub email: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Request body with the email trimmed; the password is sent verbatim.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Field rules for the login form.
#[must_use]
pub fn validate(form: &LoginForm) -> FieldErrors {
    Validator::default()
        .required("email", &form.email, "Email không được để trống")
        .email("email", &form.email, "Email không hợp lệ")
        .check(
            "password",
            !form.password.is_empty(),
            "Mật khẩu không được để trống",
        )
        .finish()
}

/// Message for a failed login; a 401 here means bad credentials, not an expired session.
#[must_use]
pub fn login_failure(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => LOGIN_FAILED.to_string(),
        other => other.user_message(LOGIN_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_malformed_credentials_fail() {
        let errors = validate(&LoginForm::default());
        assert_eq!(errors.get("email"), Some("Email không được để trống"));
        assert_eq!(errors.get("password"), Some("Mật khẩu không được để trống"));

        let form = LoginForm {
            email: "ketoan".into(),
            password: "secret".into(),
        };
        assert_eq!(validate(&form).get("email"), Some("Email không hợp lệ"));
    }

    #[test]
    fn request_trims_email_only() {
        let form = LoginForm {
            email: "  ketoan@congty.vn ".into(),
            password: " pass ".into(),
        };
        assert!(validate(&form).is_empty());
        let request = form.to_request();
        assert_eq!(request.email, "ketoan@congty.vn");
        assert_eq!(request.password, " pass ");
    }

    #[test]
    fn rejected_credentials_never_read_as_expired_session() {
        assert_eq!(login_failure(&ApiError::Unauthorized), LOGIN_FAILED);
        let server = ApiError::Server {
            status: 400,
            detail: "Tài khoản đã bị khóa".into(),
        };
        assert_eq!(login_failure(&server), "Tài khoản đã bị khóa");
        assert_eq!(login_failure(&ApiError::Transport("offline".into())), LOGIN_FAILED);
    }
}
