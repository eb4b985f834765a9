use axum::{
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{api::AppState, flash};

pub const CONNECTION_OK: &str = "Connection successful!";
pub const CONNECTION_FAILED: &str = "Failed to connect to Webex API. Invalid Token.";

/// Re-validates the token and sends the user back to the landing page.
pub async fn test_connection(
    State(state): State<AppState>,
    Path(access_token): Path<String>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    let notice = match state.webex.get_user_info(&access_token).await {
        Some(_) => CONNECTION_OK,
        None => CONNECTION_FAILED,
    };

    let jar = flash::push(jar, notice);
    (jar, Redirect::to("/"))
}
