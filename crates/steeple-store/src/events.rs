use steeple_db::KeyValueStore;
use steeple_types::{EventItem, NewEvent};
use tracing::debug;

use crate::{EntityStore, StoreError};

impl<S: KeyValueStore> EntityStore<S> {
    pub fn create_event(&mut self, form: NewEvent) -> Result<EventItem, StoreError> {
        let title = form.title.trim();
        let date = form.date.trim();
        let time = form.time.trim();

        for (field, value) in [("title", title), ("date", date), ("time", time)] {
            if value.is_empty() {
                return Err(StoreError::MissingField(field));
            }
        }
        let created_by = self.resolve_creator(form.created_by)?;

        let event = EventItem {
            id: self.ids.next_id(),
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            description: form.description.trim().to_string(),
            created_by,
            assigned_to_ministry: form.assigned_to_ministry.filter(|id| !id.is_empty()),
            attendees: form.attendees,
        };

        debug!(event_id = %event.id, "Event created");
        Ok(self.append(event))
    }
}
