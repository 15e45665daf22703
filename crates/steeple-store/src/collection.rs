use serde::Serialize;
use serde::de::DeserializeOwned;
use steeple_db::KeyValueStore;
use steeple_types::{ChatMessage, EventItem, Ministry, ServiceItem, User};

use crate::{EntityStore, keys};

/// An entity type persisted as one JSON array under a fixed key.
pub trait Collection: Serialize + DeserializeOwned {
    const KEY: &'static str;

    fn id(&self) -> &str;

    fn items<S: KeyValueStore>(store: &EntityStore<S>) -> &Vec<Self>;

    fn items_mut<S: KeyValueStore>(store: &mut EntityStore<S>) -> &mut Vec<Self>;
}

macro_rules! collection {
    ($ty:ty, $key:expr, $field:ident) => {
        impl Collection for $ty {
            const KEY: &'static str = $key;

            fn id(&self) -> &str {
                &self.id
            }

            fn items<S: KeyValueStore>(store: &EntityStore<S>) -> &Vec<Self> {
                &store.$field
            }

            fn items_mut<S: KeyValueStore>(store: &mut EntityStore<S>) -> &mut Vec<Self> {
                &mut store.$field
            }
        }
    };
}

collection!(User, keys::USERS, users);
collection!(Ministry, keys::MINISTRIES, ministries);
collection!(EventItem, keys::EVENTS, events);
collection!(ServiceItem, keys::SERVICES, services);
collection!(ChatMessage, keys::CHAT_MESSAGES, chat_messages);
