use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A registered member. `password` holds an Argon2id PHC string, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ministry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    /// User ids that joined the ministry.
    #[serde(default)]
    pub people: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_ministry: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// A worship service plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub songs: Vec<String>,
    /// Role name -> user ids serving in that role.
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub multimedia: Vec<String>,
    pub created_by: String,
}

/// A direct message. The unordered (sender, receiver) pair identifies the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl ChatMessage {
    /// True if this message was exchanged between `a` and `b`, in either direction.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_camel_case() {
        let event = EventItem {
            id: "1700000000000".into(),
            title: "Picnic".into(),
            date: "2025-01-06".into(),
            time: "10:00".into(),
            description: String::new(),
            created_by: "1".into(),
            assigned_to_ministry: None,
            attendees: vec!["2".into()],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["createdBy"], "1");
        assert_eq!(json["attendees"][0], "2");
        assert!(json.get("assignedToMinistry").is_none());
    }

    #[test]
    fn test_user_decodes_legacy_empty_fields() {
        // Older blobs carry an empty photoUrl and no people list
        let user: User = serde_json::from_str(
            r#"{"id":"1","name":"Ann","email":"a@b.com","password":"x","photoUrl":""}"#,
        )
        .unwrap();
        assert_eq!(user.photo_url.as_deref(), Some(""));

        let ministry: Ministry = serde_json::from_str(
            r#"{"id":"2","title":"Choir","description":"","createdBy":"1"}"#,
        )
        .unwrap();
        assert!(ministry.people.is_empty());
    }

    #[test]
    fn test_message_is_between_either_direction() {
        let msg = ChatMessage {
            id: "5".into(),
            sender_id: "a".into(),
            receiver_id: "b".into(),
            text: "hi".into(),
            timestamp: 5,
        };
        assert!(msg.is_between("a", "b"));
        assert!(msg.is_between("b", "a"));
        assert!(!msg.is_between("a", "c"));
    }
}
