use reqwest::Client;

use crate::{
    types::{CreateRoomRequest, Room, RoomList},
    webex::{WebexError, expect_ok},
};

/// Lists the rooms the token owner is a member of.
///
/// Only the `items` array of the response is returned; a body without `items`
/// yields an empty list.
pub async fn list(client: &Client, base_url: &str, token: &str) -> Result<Vec<Room>, WebexError> {
    let api_url = format!("{uri}/rooms", uri = base_url);

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let res = expect_ok(response)?.json::<RoomList>().await?;

    Ok(res.items)
}

/// Creates a room with the given title. The created room itself is not returned.
pub async fn create(
    client: &Client,
    base_url: &str,
    token: &str,
    title: &str,
) -> Result<(), WebexError> {
    let api_url = format!("{uri}/rooms", uri = base_url);
    let body = CreateRoomRequest {
        title: title.to_string(),
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
