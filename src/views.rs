//! Server-rendered pages.
//!
//! Everything that came from the user or from Webex goes through
//! [`escape_html`] before it is interpolated.

use crate::{
    types::{Person, Room},
    utils::{self, escape_html},
};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
ul.flashes{list-style:none;padding:0}\
ul.flashes li{background:#eef4ff;border-left:4px solid #0b5cff;padding:.5rem;margin-bottom:.5rem}\
table{border-collapse:collapse;width:100%}td,th{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
form{margin:1rem 0}label{display:block;margin:.5rem 0 .2rem}";

fn layout(title: &str, flashes: &[String], body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n\
{flashes}{body}\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
        flashes = render_flashes(flashes),
        body = body,
    )
}

fn render_flashes(flashes: &[String]) -> String {
    if flashes.is_empty() {
        return String::new();
    }

    let items: String = flashes
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    format!("<ul class=\"flashes\">{}</ul>\n", items)
}

/// Token entry form.
pub fn index_page(flashes: &[String]) -> String {
    let body = "<form method=\"post\" action=\"/\">\n\
<label for=\"access_token\">Webex access token</label>\n\
<input type=\"password\" id=\"access_token\" name=\"access_token\" size=\"60\" required>\n\
<button type=\"submit\">Continue</button>\n</form>";

    layout("Webex Portal", flashes, body)
}

/// Profile of the token owner with links to the per-token actions.
pub fn user_info_page(user: &Person, access_token: &str, flashes: &[String]) -> String {
    let display_name = user.display_name.as_deref().unwrap_or("Unknown");
    let mut rows = vec![
        ("Name", display_name.to_string()),
        ("Emails", user.emails.join(", ")),
    ];
    if let Some(nick) = &user.nick_name {
        rows.push(("Nick name", nick.clone()));
    }
    if let Some(org) = &user.org_id {
        rows.push(("Organization", org.clone()));
    }
    if let Some(status) = &user.status {
        rows.push(("Status", status.clone()));
    }

    let table: String = rows
        .iter()
        .map(|(k, v)| format!("<tr><th>{}</th><td>{}</td></tr>\n", k, escape_html(v)))
        .collect();

    let avatar = match &user.avatar {
        Some(url) => format!(
            "<p><img src=\"{}\" alt=\"avatar\" width=\"96\" height=\"96\"></p>\n",
            escape_html(url)
        ),
        None => String::new(),
    };

    let body = format!(
        "{avatar}<table>\n{table}</table>\n<ul>\n\
<li><a href=\"{rooms}\">List rooms and send messages</a></li>\n\
<li><a href=\"{test}\">Test connection</a></li>\n\
<li><a href=\"/\">Use another token</a></li>\n</ul>",
        avatar = avatar,
        table = table,
        rooms = escape_html(&utils::rooms_path(access_token)),
        test = escape_html(&utils::test_connection_path(access_token)),
    );

    layout(&format!("Welcome, {}", display_name), flashes, &body)
}

/// Room list plus the send-message and create-room forms.
pub fn rooms_page(rooms: &[Room], access_token: &str, flashes: &[String]) -> String {
    let list = if rooms.is_empty() {
        "<p>No rooms found.</p>\n".to_string()
    } else {
        let rows: String = rooms
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&r.title),
                    escape_html(r.kind.as_deref().unwrap_or("")),
                    escape_html(r.last_activity.as_deref().unwrap_or("")),
                )
            })
            .collect();
        format!(
            "<table>\n<tr><th>Title</th><th>Type</th><th>Last activity</th></tr>\n{}</table>\n",
            rows
        )
    };

    let options: String = rooms
        .iter()
        .map(|r| {
            format!(
                "<option value=\"{}\">{}</option>",
                escape_html(&r.id),
                escape_html(&r.title)
            )
        })
        .collect();

    let rooms_action = escape_html(&utils::rooms_path(access_token));
    let body = format!(
        "{list}<h2>Send a message</h2>\n\
<form method=\"post\" action=\"{rooms_action}\">\n\
<label for=\"room_id\">Room</label>\n<select id=\"room_id\" name=\"room_id\" required>{options}</select>\n\
<label for=\"message\">Message</label>\n<textarea id=\"message\" name=\"message\" rows=\"3\" cols=\"60\" required></textarea>\n\
<button type=\"submit\">Send</button>\n</form>\n\
<h2>Create a room</h2>\n\
<form method=\"post\" action=\"{create_action}\">\n\
<label for=\"room_title\">Title</label>\n<input type=\"text\" id=\"room_title\" name=\"room_title\" required>\n\
<button type=\"submit\">Create</button>\n</form>\n\
<ul>\n<li><a href=\"{test}\">Test connection</a></li>\n<li><a href=\"/\">Home</a></li>\n</ul>",
        list = list,
        rooms_action = rooms_action,
        options = options,
        create_action = escape_html(&utils::create_room_path(access_token)),
        test = escape_html(&utils::test_connection_path(access_token)),
    );

    layout("Your Webex rooms", flashes, &body)
}
