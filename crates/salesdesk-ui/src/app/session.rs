//! Session lifecycle wired to storage, the API client and the store.
//!
//! # Design
//! - The store owns the token; the app shell mirrors it into the client.
//! - A login is complete only after the profile loads, so both paths end in `refresh`.
//! - Expiry is idempotent: only a session that still holds a token is ended.

use crate::app::preferences::{clear_token, load_token, now_secs, persist_token};
use crate::core::auth::Session;
use crate::core::store::app_dispatch;
use crate::features::auth::state::login_failure;
use crate::services::api::ApiClient;
use gloo::console;
use salesdesk_api_models::LoginRequest;
use std::rc::Rc;

/// Rebuild the session from storage; expired tokens are dropped from storage too.
pub(crate) fn restore() -> Session {
    let session = Session::restore(load_token(), now_secs());
    if session.token.is_none() {
        clear_token();
    }
    session
}

/// Load the profile for the current token; failure ends the session.
pub(crate) async fn refresh(client: Rc<ApiClient>) {
    match client.me().await {
        Ok(user) => app_dispatch().reduce_mut(|store| store.session.refreshed(user)),
        Err(err) => {
            console::warn!("session refresh failed", err.to_string());
            expire();
        }
    }
}

/// Exchange credentials for a token, then load the profile.
pub(crate) async fn login(client: Rc<ApiClient>, request: LoginRequest) {
    match client.login(&request.email, &request.password).await {
        Ok(issued) => {
            persist_token(&issued.access_token);
            client.set_token(Some(issued.access_token.clone()));
            app_dispatch().reduce_mut(|store| store.session.token_issued(issued.access_token));
            refresh(client).await;
        }
        Err(err) => {
            let message = login_failure(&err);
            app_dispatch().reduce_mut(|store| store.session.login_failed(message));
        }
    }
}

/// End the session because the token was rejected.
pub(crate) fn expire() {
    if app_dispatch().get().session.token.is_none() {
        return;
    }
    clear_token();
    app_dispatch().reduce_mut(|store| store.session.refresh_failed());
}

/// End the session at the user's request.
pub(crate) fn logout() {
    clear_token();
    app_dispatch().reduce_mut(|store| store.session.logout());
}
