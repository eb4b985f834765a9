use reqwest::Client;

use crate::{
    types::CreateMessageRequest,
    webex::{WebexError, expect_ok},
};

/// Posts a plain text message into a room.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `base_url` - Webex API base
/// * `token` - Access token of the sender
/// * `room_id` - Target room, forwarded exactly as given
/// * `text` - Message body, forwarded exactly as given
///
/// # Example
///
/// ```
/// messages::send(&client, "https://webexapis.com/v1", token, "Y2lzY29...", "Hello").await?;
/// ```
pub async fn send(
    client: &Client,
    base_url: &str,
    token: &str,
    room_id: &str,
    text: &str,
) -> Result<(), WebexError> {
    let api_url = format!("{uri}/messages", uri = base_url);
    let body = CreateMessageRequest {
        room_id: room_id.to_string(),
        text: text.to_string(),
    };

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    expect_ok(response)?;

    Ok(())
}
