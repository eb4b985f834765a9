use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{
    api::AppState,
    flash,
    types::{CreateRoomForm, MessageForm},
    utils, views,
};

pub const ROOMS_FAILED: &str = "Failed to retrieve rooms.";
pub const MESSAGE_FAILED: &str = "Failed to send the message. Please try again.";
pub const ROOM_CREATED: &str = "Room created successfully!";
pub const ROOM_FAILED: &str = "Failed to create room. Please try again.";

pub fn message_sent(room_id: &str) -> String {
    format!("Message sent to room {} successfully!", room_id)
}

pub async fn rooms(
    State(state): State<AppState>,
    Path(access_token): Path<String>,
    jar: SignedCookieJar,
) -> Response {
    let Some(rooms) = state.webex.get_rooms(&access_token).await else {
        return (StatusCode::BAD_REQUEST, ROOMS_FAILED).into_response();
    };

    let (jar, flashes) = flash::take(jar);
    (jar, Html(views::rooms_page(&rooms, &access_token, &flashes))).into_response()
}

/// Lists the rooms, then forwards the submitted message to the chosen room.
///
/// The room list is fetched before the message is sent, so the rendered list
/// does not include side effects of the send.
pub async fn post_message(
    State(state): State<AppState>,
    Path(access_token): Path<String>,
    jar: SignedCookieJar,
    Form(form): Form<MessageForm>,
) -> Response {
    let Some(rooms) = state.webex.get_rooms(&access_token).await else {
        return (StatusCode::BAD_REQUEST, ROOMS_FAILED).into_response();
    };

    let (jar, mut flashes) = flash::take(jar);
    if state
        .webex
        .send_message(&access_token, &form.room_id, &form.message)
        .await
    {
        tracing::info!(room = %form.room_id, "message sent");
        flashes.push(message_sent(&form.room_id));
    } else {
        flashes.push(MESSAGE_FAILED.to_string());
    }

    (jar, Html(views::rooms_page(&rooms, &access_token, &flashes))).into_response()
}

/// Creates a room and always redirects back to the room list.
pub async fn create_room(
    State(state): State<AppState>,
    Path(access_token): Path<String>,
    jar: SignedCookieJar,
    Form(form): Form<CreateRoomForm>,
) -> (SignedCookieJar, Redirect) {
    let notice = if state
        .webex
        .create_room(&access_token, &form.room_title)
        .await
    {
        tracing::info!(title = %form.room_title, "room created");
        ROOM_CREATED
    } else {
        ROOM_FAILED
    };

    let jar = flash::push(jar, notice);
    (jar, Redirect::to(&utils::rooms_path(&access_token)))
}
