//! Server functions called by the views.

use crate::sponsor::{SponsorDetail, SponsorEntry};
use dioxus::prelude::*;

pub const SESSION_COOKIE: &str = "session";

#[server]
pub async fn get_sponsor_detail(id: String) -> Result<SponsorDetail, ServerFnError> {
    let conn = crate::state::open_db().await?;
    match crate::db::get_sponsor(&conn, &id)? {
        Some(detail) => Ok(detail),
        None => {
            log::warn!("Sponsor '{}' requested but not found", id);
            Err(ServerFnError::new(format!("sponsor '{}' not found", id)))
        }
    }
}

#[server]
pub async fn list_sponsors() -> Result<Vec<SponsorEntry>, ServerFnError> {
    let conn = crate::state::open_db().await?;
    let sponsors = crate::db::list_sponsors(&conn)?;
    Ok(sponsors)
}

/// User id bound to the caller's session cookie, if any.
#[server]
pub async fn current_session() -> Result<Option<String>, ServerFnError> {
    let headers: axum::http::HeaderMap = extract().await?;
    let Some(token) = session_token(&headers) else {
        return Ok(None);
    };
    let conn = crate::state::open_db().await?;
    let userid = crate::db::session_user(&conn, &token)?;
    Ok(userid)
}

/// Ends the caller's session. Calling it without a session is not an error.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    let headers: axum::http::HeaderMap = extract().await?;
    let Some(token) = session_token(&headers) else {
        log::debug!("Sign-out without a session cookie");
        return Ok(());
    };
    let conn = crate::state::open_db().await?;
    if crate::db::delete_session(&conn, &token)? {
        log::info!("Session signed out");
    }
    Ok(())
}

#[cfg(feature = "server")]
fn session_token(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
