//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep the session as plain data; storage and HTTP live in the app layer.
//! - A session is authenticated only once the profile has been loaded.
//! - Route gating is a pure decision so it can be tested natively.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use salesdesk_api_models::CurrentUser;
use serde_json::Value;

/// Message shown when a stored token can no longer be used.
pub const SESSION_EXPIRED: &str = "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.";

/// Lifecycle stage of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token.
    Anonymous,
    /// Token present, profile request in flight.
    Refreshing,
    /// Token accepted and profile loaded.
    Authenticated,
}

/// Process-wide authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent with every request.
    pub token: Option<String>,
    /// Profile of the signed-in user.
    pub user: Option<CurrentUser>,
    /// Current lifecycle stage.
    pub status: SessionStatus,
    /// Last login/refresh failure, shown on the login screen.
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            status: SessionStatus::Anonymous,
            error: None,
        }
    }
}

impl Session {
    /// Rebuild the session from a persisted token, discarding expired ones.
    #[must_use]
    pub fn restore(stored: Option<String>, now_secs: i64) -> Self {
        match stored {
            Some(token) if !token.trim().is_empty() && !token_expired(&token, now_secs) => Self {
                token: Some(token),
                user: None,
                status: SessionStatus::Refreshing,
                error: None,
            },
            _ => Self::default(),
        }
    }

    /// Record a freshly issued token; the profile still has to be loaded.
    pub fn token_issued(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.status = SessionStatus::Refreshing;
        self.error = None;
    }

    /// Complete a refresh with the loaded profile.
    pub fn refreshed(&mut self, user: CurrentUser) {
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
        self.error = None;
    }

    /// End the session after the profile could not be loaded.
    pub fn refresh_failed(&mut self) {
        self.logout();
        self.error = Some(SESSION_EXPIRED.to_string());
    }

    /// Record a rejected login attempt.
    pub fn login_failed(&mut self, message: String) {
        self.logout();
        self.error = Some(message);
    }

    /// Clear token and profile.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.status = SessionStatus::Anonymous;
    }

    /// Whether the session holds a loaded profile.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name, falling back to a generic label.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|user| user.full_name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Người dùng".to_string())
    }

    /// Upper-case initial used for the avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.user
            .as_ref()
            .and_then(|user| user.full_name.as_deref())
            .and_then(|name| name.trim().chars().next())
            .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect())
    }
}

/// What the router should render for a route given the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested page.
    Render,
    /// Show a full-page loader until the profile refresh resolves.
    Wait,
    /// Send the user to the login screen.
    RedirectToLogin,
}

/// Decide how a route renders. Public routes always render.
#[must_use]
pub const fn guard(session: &Session, public: bool) -> GuardOutcome {
    if public {
        return GuardOutcome::Render;
    }
    match session.status {
        SessionStatus::Authenticated => GuardOutcome::Render,
        SessionStatus::Refreshing => GuardOutcome::Wait,
        SessionStatus::Anonymous => GuardOutcome::RedirectToLogin,
    }
}

/// Whether a JWT's `exp` claim lies in the past.
///
/// Tokens without a readable payload are left for the server to judge.
#[must_use]
pub fn token_expired(token: &str, now_secs: i64) -> bool {
    token_expiry(token).is_some_and(|exp| exp < now_secs)
}

fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;
    exp.as_i64().or_else(|| exp.as_f64().map(|value| value as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_exp(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"a@b.vn","exp":{exp}}}"#));
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
    }

    fn user() -> CurrentUser {
        CurrentUser {
            id: Some(1),
            email: "ketoan@congty.vn".to_string(),
            full_name: Some("nguyễn văn an".to_string()),
        }
    }

    #[test]
    fn restore_discards_expired_tokens() {
        let session = Session::restore(Some(jwt_with_exp(100)), 200);
        assert_eq!(session.status, SessionStatus::Anonymous);
        assert_eq!(session.token, None);
    }

    #[test]
    fn restore_keeps_live_and_opaque_tokens() {
        let live = Session::restore(Some(jwt_with_exp(500)), 200);
        assert_eq!(live.status, SessionStatus::Refreshing);
        let opaque = Session::restore(Some("opaque-token".to_string()), 200);
        assert_eq!(opaque.status, SessionStatus::Refreshing);
        assert_eq!(Session::restore(Some("  ".to_string()), 200), Session::default());
    }

    #[test]
    fn lifecycle_reaches_authenticated_after_refresh() {
        let mut session = Session::default();
        session.token_issued("token".to_string());
        assert!(!session.is_authenticated());
        session.refreshed(user());
        assert!(session.is_authenticated());
        assert_eq!(session.initial(), "N");
        assert_eq!(session.display_name(), "nguyễn văn an");
        session.logout();
        assert_eq!(session.token, None);
        assert_eq!(session.status, SessionStatus::Anonymous);
    }

    #[test]
    fn failed_refresh_ends_session_with_message() {
        let mut session = Session::restore(Some("token".to_string()), 0);
        session.refresh_failed();
        assert_eq!(session.token, None);
        assert_eq!(session.error.as_deref(), Some(SESSION_EXPIRED));
        assert_eq!(session.display_name(), "Người dùng");
        assert_eq!(session.initial(), "U");
    }

    #[test]
    fn guard_redirects_only_private_routes() {
        let anonymous = Session::default();
        assert_eq!(guard(&anonymous, true), GuardOutcome::Render);
        assert_eq!(guard(&anonymous, false), GuardOutcome::RedirectToLogin);
        let pending = Session::restore(Some("token".to_string()), 0);
        assert_eq!(guard(&pending, false), GuardOutcome::Wait);
        let mut signed_in = pending;
        signed_in.refreshed(user());
        assert_eq!(guard(&signed_in, false), GuardOutcome::Render);
    }
}
