use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use webex_portal::webex::{WebexApi, WebexClient};

const GOOD: &str = "Bearer good-token";

// What the stand-in Webex server saw: (path, Authorization header, JSON body).
type Seen = Arc<Mutex<Vec<(String, String, Value)>>>;

fn auth(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn people_me(State(seen): State<Seen>, headers: HeaderMap) -> Response {
    let auth = auth(&headers);
    seen.lock()
        .unwrap()
        .push(("/people/me".into(), auth.clone(), Value::Null));

    match auth.as_str() {
        GOOD => Json(json!({
            "id": "person-1",
            "emails": ["ada@example.com"],
            "displayName": "Ada Lovelace",
            "orgId": "org-1",
            "type": "person"
        }))
        .into_response(),
        "Bearer garbage-body" => (StatusCode::OK, "not json").into_response(),
        "Bearer empty-profile" => Json(json!({})).into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"message": "invalid"}))).into_response(),
    }
}

async fn list_rooms(State(seen): State<Seen>, headers: HeaderMap) -> Response {
    let auth = auth(&headers);
    seen.lock()
        .unwrap()
        .push(("GET /rooms".into(), auth.clone(), Value::Null));

    match auth.as_str() {
        GOOD => Json(json!({
            "items": [
                {"id": "room-1", "title": "Engineering", "type": "group", "isLocked": false},
                {"id": "room-2", "title": "Ada", "type": "direct", "lastActivity": "2024-01-01T00:00:00.000Z"}
            ]
        }))
        .into_response(),
        "Bearer no-items" => Json(json!({})).into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn create_room(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let auth = auth(&headers);
    seen.lock()
        .unwrap()
        .push(("POST /rooms".into(), auth.clone(), body.clone()));

    if auth != GOOD {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let title = body["title"].as_str().map(str::to_string);
    match title.as_deref() {
        Some("created-status") => (StatusCode::CREATED, Json(body)).into_response(),
        Some(title) => Json(json!({"id": "room-3", "title": title})).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn send_message(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let auth = auth(&headers);
    seen.lock()
        .unwrap()
        .push(("/messages".into(), auth.clone(), body.clone()));

    match auth.as_str() {
        GOOD => Json(json!({"id": "msg-1", "roomId": body["roomId"], "text": body["text"]}))
            .into_response(),
        "Bearer rate-limited" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn fake_webex() -> (WebexClient, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/people/me", get(people_me))
        .route("/v1/rooms", get(list_rooms).post(create_room))
        .route("/v1/messages", post(send_message))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (local_client(format!("http://{}/v1/", addr)), seen)
}

// Local stand-ins must not be routed through a proxy from the environment.
fn local_client(base_url: String) -> WebexClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    WebexClient::with_client(client, base_url)
}

#[tokio::test]
async fn base_url_trailing_slash_is_trimmed() {
    let client = WebexClient::new("https://webexapis.com/v1/", Duration::from_secs(1)).unwrap();
    assert_eq!(client.base_url(), "https://webexapis.com/v1");
}

#[tokio::test]
async fn user_info_with_valid_token() {
    let (client, seen) = fake_webex().await;

    let person = client.get_user_info("good-token").await.unwrap();
    assert_eq!(person.id, "person-1");
    assert_eq!(person.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(person.emails, vec!["ada@example.com".to_string()]);
    assert_eq!(person.kind.as_deref(), Some("person"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1, GOOD);
}

#[tokio::test]
async fn user_info_with_invalid_token_is_none() {
    let (client, _) = fake_webex().await;
    assert!(client.get_user_info("bad-token").await.is_none());
}

#[tokio::test]
async fn user_info_with_undecodable_body_is_none() {
    let (client, _) = fake_webex().await;
    assert!(client.get_user_info("garbage-body").await.is_none());
}

#[tokio::test]
async fn user_info_without_person_id_is_none() {
    let (client, seen) = fake_webex().await;
    assert!(client.get_user_info("empty-profile").await.is_none());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn rooms_returns_items() {
    let (client, _) = fake_webex().await;

    let rooms = client.get_rooms("good-token").await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, "room-1");
    assert_eq!(rooms[0].title, "Engineering");
    assert_eq!(rooms[1].kind.as_deref(), Some("direct"));
    assert_eq!(
        rooms[1].last_activity.as_deref(),
        Some("2024-01-01T00:00:00.000Z")
    );
}

#[tokio::test]
async fn rooms_without_items_is_empty() {
    let (client, _) = fake_webex().await;
    assert_eq!(client.get_rooms("no-items").await, Some(Vec::new()));
}

#[tokio::test]
async fn rooms_with_invalid_token_is_none() {
    let (client, _) = fake_webex().await;
    assert!(client.get_rooms("bad-token").await.is_none());
}

#[tokio::test]
async fn create_room_posts_title() {
    let (client, seen) = fake_webex().await;

    assert!(client.create_room("good-token", "Launch Plan").await);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "POST /rooms");
    assert_eq!(seen[0].1, GOOD);
    assert_eq!(seen[0].2, json!({"title": "Launch Plan"}));
}

#[tokio::test]
async fn create_room_only_accepts_200() {
    let (client, _) = fake_webex().await;
    assert!(!client.create_room("good-token", "created-status").await);
    assert!(!client.create_room("bad-token", "Launch").await);
}

#[tokio::test]
async fn send_message_posts_room_and_text() {
    let (client, seen) = fake_webex().await;

    assert!(client.send_message("good-token", "room-1", "Hello team!").await);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1, GOOD);
    assert_eq!(seen[0].2, json!({"roomId": "room-1", "text": "Hello team!"}));
}

#[tokio::test]
async fn send_message_failures_are_false() {
    let (client, _) = fake_webex().await;
    assert!(!client.send_message("rate-limited", "room-1", "hi").await);
    assert!(!client.send_message("bad-token", "room-1", "hi").await);
}

#[tokio::test]
async fn unreachable_api_collapses_to_failure() {
    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    let client = local_client(format!("http://{}", addr));
    assert!(client.get_user_info("good-token").await.is_none());
    assert!(client.get_rooms("good-token").await.is_none());
    assert!(!client.create_room("good-token", "x").await);
    assert!(!client.send_message("good-token", "room-1", "x").await);
}
