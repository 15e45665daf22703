use std::collections::BTreeMap;

use steeple_db::KeyValueStore;
use steeple_types::{NewService, ServiceItem};
use tracing::debug;

use crate::{EntityStore, StoreError};

impl<S: KeyValueStore> EntityStore<S> {
    pub fn create_service(&mut self, form: NewService) -> Result<ServiceItem, StoreError> {
        let title = form.title.trim();
        let date = form.date.trim();

        if title.is_empty() {
            return Err(StoreError::MissingField("title"));
        }
        if date.is_empty() {
            return Err(StoreError::MissingField("date"));
        }
        let created_by = self.resolve_creator(form.created_by)?;

        let service = ServiceItem {
            id: self.ids.next_id(),
            title: title.to_string(),
            date: date.to_string(),
            songs: parse_songs(&form.songs),
            roles: BTreeMap::new(),
            timeline: form.timeline.trim().to_string(),
            multimedia: Vec::new(),
            created_by,
        };

        debug!(service_id = %service.id, songs = service.songs.len(), "Service created");
        Ok(self.append(service))
    }
}

/// Splits the comma separated song field, dropping blank entries.
pub fn parse_songs(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
