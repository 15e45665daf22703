use serde::Serialize;
use serde::de::DeserializeOwned;
use steeple_db::KeyValueStore;
use steeple_types::{ChatMessage, EventItem, Ministry, ServiceItem, User};
use tracing::{debug, error, info, warn};

use crate::{Collection, EntityStore, keys};

/// Outcome of [`EntityStore::load`], one entry per storage key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

/// Keys whose write failed during [`EntityStore::save`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub failed: Vec<&'static str>,
}

impl SaveReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<S: KeyValueStore> EntityStore<S> {
    /// Restores every collection and the session user from storage.
    ///
    /// Each key is read independently: a missing key keeps the default and a
    /// corrupt one is logged and skipped without affecting the others.
    pub fn load(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        if let Some(users) = self.read_key(keys::USERS, &mut report) {
            self.users = users;
        }
        if let Some(ministries) = self.read_key(keys::MINISTRIES, &mut report) {
            self.ministries = ministries;
        }
        if let Some(events) = self.read_key(keys::EVENTS, &mut report) {
            self.events = events;
        }
        if let Some(services) = self.read_key(keys::SERVICES, &mut report) {
            self.services = services;
        }
        if let Some(messages) = self.read_key(keys::CHAT_MESSAGES, &mut report) {
            self.chat_messages = messages;
        }
        if let Some(user) = self.read_key::<User>(keys::SESSION_USER, &mut report) {
            self.session = Some(user);
        }

        self.reseed_ids();

        info!(
            users = self.users.len(),
            ministries = self.ministries.len(),
            events = self.events.len(),
            services = self.services.len(),
            messages = self.chat_messages.len(),
            logged_in = self.session.is_some(),
            failed = report.failed.len(),
            "Store loaded"
        );
        report
    }

    /// Writes every collection in full, plus the session key (or its removal).
    ///
    /// Failures are logged and swallowed; the remaining keys are still written.
    pub fn save(&self) -> SaveReport {
        let mut report = SaveReport::default();

        self.write_key(keys::USERS, &self.users, &mut report);
        self.write_key(keys::MINISTRIES, &self.ministries, &mut report);
        self.write_key(keys::EVENTS, &self.events, &mut report);
        self.write_key(keys::SERVICES, &self.services, &mut report);
        self.write_key(keys::CHAT_MESSAGES, &self.chat_messages, &mut report);

        match &self.session {
            Some(user) => self.write_key(keys::SESSION_USER, user, &mut report),
            None => self.remove_key(keys::SESSION_USER, &mut report),
        }

        if report.is_ok() {
            debug!("Store saved");
        }
        report
    }

    fn read_key<T: DeserializeOwned>(&self, key: &'static str, report: &mut LoadReport) -> Option<T> {
        let text = match self.storage.get_item(key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                report.missing.push(key);
                return None;
            }
            Err(e) => {
                warn!(key, "Failed to read from storage: {:#}", e);
                report.failed.push(key);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => {
                report.loaded.push(key);
                Some(value)
            }
            Err(e) => {
                warn!(key, "Corrupt value in storage: {}", e);
                report.failed.push(key);
                None
            }
        }
    }

    fn write_key<T: Serialize + ?Sized>(&self, key: &'static str, value: &T, report: &mut SaveReport) {
        let result = serde_json::to_string(value)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set_item(key, &json));

        if let Err(e) = result {
            error!(key, "Failed to save: {:#}", e);
            report.failed.push(key);
        }
    }

    pub(crate) fn remove_key(&self, key: &'static str, report: &mut SaveReport) {
        if let Err(e) = self.storage.remove_item(key) {
            error!(key, "Failed to remove: {:#}", e);
            report.failed.push(key);
        }
    }

    fn reseed_ids(&mut self) {
        let mut ids = std::mem::take(&mut self.ids);
        observe_all::<User, S>(self, &mut ids);
        observe_all::<Ministry, S>(self, &mut ids);
        observe_all::<EventItem, S>(self, &mut ids);
        observe_all::<ServiceItem, S>(self, &mut ids);
        observe_all::<ChatMessage, S>(self, &mut ids);
        self.ids = ids;
    }
}

fn observe_all<T: Collection, S: KeyValueStore>(store: &EntityStore<S>, ids: &mut crate::IdGenerator) {
    for item in T::items(store) {
        ids.observe(item.id());
    }
}
