use steeple_db::KeyValueStore;
use steeple_types::{ChatMessage, NewChatMessage};
use tracing::debug;

use crate::{EntityStore, StoreError};

impl<S: KeyValueStore> EntityStore<S> {
    /// Sends a direct message from the session user.
    pub fn send_message(&mut self, form: NewChatMessage) -> Result<ChatMessage, StoreError> {
        let text = form.text.trim();
        if text.is_empty() {
            return Err(StoreError::MissingField("text"));
        }
        let receiver_id = form.receiver_id.trim();
        if receiver_id.is_empty() {
            return Err(StoreError::MissingField("receiver"));
        }
        let sender_id = self.require_session()?.id.clone();

        let message = ChatMessage {
            id: self.ids.next_id(),
            sender_id,
            receiver_id: receiver_id.to_string(),
            text: text.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        debug!(message_id = %message.id, "Message sent");
        Ok(self.append(message))
    }

    /// Messages exchanged between `a` and `b`, oldest first.
    pub fn conversation(&self, a: &str, b: &str) -> Vec<&ChatMessage> {
        let mut messages: Vec<&ChatMessage> = self
            .chat_messages
            .iter()
            .filter(|m| m.is_between(a, b))
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    pub fn conversation_with(&self, partner_id: &str) -> Result<Vec<&ChatMessage>, StoreError> {
        let me = self.require_session()?;
        Ok(self.conversation(&me.id, partner_id))
    }
}

#[cfg(test)]
mod tests {
    use steeple_types::LoginForm;

    use super::*;
    use crate::testing::{memory_store, signup_form};

    fn message(id: &str, from: &str, to: &str, timestamp: i64) -> ChatMessage {
        ChatMessage {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            text: format!("msg {}", id),
            timestamp,
        }
    }

    #[test]
    fn test_conversation_filters_pair_and_orders() {
        let mut store = memory_store();
        store.append(message("1", "a", "b", 30));
        store.append(message("2", "b", "a", 10));
        store.append(message("3", "a", "c", 5));
        store.append(message("4", "c", "b", 1));
        store.append(message("5", "a", "b", 10));

        let ids: Vec<&str> = store
            .conversation("b", "a")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        // Equal timestamps keep insertion order
        assert_eq!(ids, vec!["2", "5", "1"]);
    }

    #[test]
    fn test_send_message_between_users() {
        let mut store = memory_store();
        let ann = store.signup(&signup_form("Ann", "a@b.com", "secret")).unwrap();
        let bob = store.signup(&signup_form("Bob", "bob@b.com", "secret")).unwrap();

        let hello = store
            .send_message(NewChatMessage {
                receiver_id: ann.id.clone(),
                text: "  hello  ".into(),
            })
            .unwrap();
        assert_eq!(hello.sender_id, bob.id);
        assert_eq!(hello.text, "hello");

        store
            .login(&LoginForm {
                email: "a@b.com".into(),
                password: "secret".into(),
            })
            .unwrap();
        store
            .send_message(NewChatMessage {
                receiver_id: bob.id.clone(),
                text: "hi bob".into(),
            })
            .unwrap();

        let thread = store.conversation_with(&bob.id).unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].text, "hello");
        assert_eq!(thread[1].text, "hi bob");
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut store = memory_store();
        store.signup(&signup_form("Ann", "a@b.com", "secret")).unwrap();

        let result = store.send_message(NewChatMessage {
            receiver_id: "2".into(),
            text: "   ".into(),
        });
        assert_eq!(result, Err(StoreError::MissingField("text")));
        assert!(store.chat_messages().is_empty());
    }

    #[test]
    fn test_send_requires_session() {
        let mut store = memory_store();
        let result = store.send_message(NewChatMessage {
            receiver_id: "2".into(),
            text: "hello".into(),
        });
        assert_eq!(result, Err(StoreError::NotLoggedIn));
    }
}
