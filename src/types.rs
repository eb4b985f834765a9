use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: String,
    pub emails: Vec<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub org_id: Option<String>,
    pub created: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_locked: bool,
    pub last_activity: Option<String>,
    pub created: Option<String>,
    pub creator_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomList {
    #[serde(default)]
    pub items: Vec<Room>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub room_id: String,
    pub text: String,
}

/// Landing page form.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenForm {
    #[serde(default)]
    pub access_token: String,
}

/// Send-message form on the rooms page.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageForm {
    pub room_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomForm {
    pub room_title: String,
}
