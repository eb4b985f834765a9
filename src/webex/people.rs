use reqwest::Client;

use crate::{
    types::Person,
    webex::{WebexError, expect_ok},
};

/// Retrieves the profile of the person the token belongs to.
///
/// This doubles as the token check: a token is considered valid exactly when
/// this call succeeds.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `base_url` - Webex API base, e.g. `https://webexapis.com/v1`
/// * `token` - Access token, sent as-is in the bearer header
///
/// # Returns
///
/// - `Ok(Person)` - The response was `200 OK` and decoded
/// - `Err(WebexError::Status)` - Any other status code
/// - `Err(WebexError::Transport)` - Network, timeout or decode failure
/// - `Err(WebexError::Incomplete)` - A body without a person id, e.g. `{}`
pub async fn get_me(client: &Client, base_url: &str, token: &str) -> Result<Person, WebexError> {
    let api_url = format!("{uri}/people/me", uri = base_url);

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let person = expect_ok(response)?.json::<Person>().await?;
    if person.id.is_empty() {
        return Err(WebexError::Incomplete("person id"));
    }

    Ok(person)
}
