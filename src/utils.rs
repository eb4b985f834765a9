use rand::{Rng, distr::Alphanumeric};

pub fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Escapes text for interpolation into HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// A token counts as missing when it is empty or only whitespace.
pub fn is_blank_token(token: &str) -> bool {
    token.trim().is_empty()
}

pub fn rooms_path(token: &str) -> String {
    format!("/rooms/{}", urlencoding::encode(token))
}

pub fn create_room_path(token: &str) -> String {
    format!("/create_room/{}", urlencoding::encode(token))
}

pub fn test_connection_path(token: &str) -> String {
    format!("/test_connection/{}", urlencoding::encode(token))
}
