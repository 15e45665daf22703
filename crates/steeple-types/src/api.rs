use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// -- Apps --

/// `created_by` falls back to the session user when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMinistry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub people: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to_ministry: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewService {
    pub title: String,
    pub date: String,
    /// Comma separated song titles as typed into the form.
    pub songs: String,
    pub timeline: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

// -- Chat --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub receiver_id: String,
    pub text: String,
}
