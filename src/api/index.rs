use axum::{Form, extract::State, response::Html};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{
    api::AppState,
    flash,
    types::TokenForm,
    utils, views,
};

pub const INVALID_TOKEN: &str = "Invalid Access Token. Please try again.";

pub async fn index(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    (jar, Html(views::index_page(&flashes)))
}

/// Validates the submitted token by fetching the owner's profile.
///
/// A blank token is rejected without calling Webex.
pub async fn submit_token(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<TokenForm>,
) -> (SignedCookieJar, Html<String>) {
    let (jar, mut flashes) = flash::take(jar);

    let user_info = if utils::is_blank_token(&form.access_token) {
        None
    } else {
        state.webex.get_user_info(&form.access_token).await
    };

    match user_info {
        Some(user) => {
            tracing::info!(user = %user.id, "token accepted");
            let page = views::user_info_page(&user, &form.access_token, &flashes);
            (jar, Html(page))
        }
        None => {
            flashes.push(INVALID_TOKEN.to_string());
            (jar, Html(views::index_page(&flashes)))
        }
    }
}
