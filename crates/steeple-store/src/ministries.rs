use steeple_db::KeyValueStore;
use steeple_types::{Ministry, NewMinistry};
use tracing::debug;

use crate::{EntityStore, StoreError};

impl<S: KeyValueStore> EntityStore<S> {
    pub fn create_ministry(&mut self, form: NewMinistry) -> Result<Ministry, StoreError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(StoreError::MissingField("title"));
        }
        let created_by = self.resolve_creator(form.created_by)?;

        let ministry = Ministry {
            id: self.ids.next_id(),
            title: title.to_string(),
            description: form.description.trim().to_string(),
            created_by,
            people: form.people,
        };

        debug!(ministry_id = %ministry.id, "Ministry created");
        Ok(self.append(ministry))
    }
}
