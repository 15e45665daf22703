use steeple_db::KeyValueStore;
use steeple_types::{EventItem, Ministry, ServiceItem, User};

use crate::{Collection, EntityStore};

const UNKNOWN_NAME: &str = "Unknown";

/// Orders records newest first by their numeric id. Records whose id does not
/// parse as an integer go last, in their stored order.
pub fn newest_first<T: Collection>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| sort_key(*b).cmp(&sort_key(*a)));
    sorted
}

fn sort_key<T: Collection>(item: &T) -> Option<i64> {
    item.id().parse().ok()
}

impl<S: KeyValueStore> EntityStore<S> {
    /// The home feed.
    pub fn events_newest_first(&self) -> Vec<&EventItem> {
        newest_first(&self.events)
    }

    pub fn ministries_newest_first(&self) -> Vec<&Ministry> {
        newest_first(&self.ministries)
    }

    pub fn services_newest_first(&self) -> Vec<&ServiceItem> {
        newest_first(&self.services)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_ministry(&self, id: &str) -> Option<&Ministry> {
        self.ministries.iter().find(|m| m.id == id)
    }

    /// Display name for a possibly dangling user reference.
    pub fn user_name(&self, id: &str) -> &str {
        self.find_user(id).map_or(UNKNOWN_NAME, |u| u.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::memory_store;

    fn event(id: &str) -> EventItem {
        EventItem {
            id: id.into(),
            title: format!("event {}", id),
            date: "2025-01-06".into(),
            time: "10:00".into(),
            description: String::new(),
            created_by: "1".into(),
            assigned_to_ministry: None,
            attendees: vec![],
        }
    }

    #[test]
    fn test_newest_first_numeric_not_lexical() {
        let events = vec![event("9"), event("1700000000000"), event("legacy"), event("100")];
        let ids: Vec<&str> = newest_first(&events).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1700000000000", "100", "9", "legacy"]);
    }

    #[test]
    fn test_feed_does_not_reorder_storage() {
        let mut store = memory_store();
        store.append(event("1"));
        store.append(event("3"));
        store.append(event("2"));

        let feed: Vec<&str> = store
            .events_newest_first()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(feed, vec!["3", "2", "1"]);

        let stored: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(stored, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_user_name_falls_back_for_dangling_ids() {
        let mut store = memory_store();
        store.append(User {
            id: "1".into(),
            name: "Ann".into(),
            email: "a@b.com".into(),
            password: String::new(),
            photo_url: None,
        });

        assert_eq!(store.user_name("1"), "Ann");
        assert_eq!(store.user_name("404"), "Unknown");
        assert!(store.find_ministry("1").is_none());
    }
}
