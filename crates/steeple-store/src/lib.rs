//! The local entity store.
//!
//! Holds every collection in memory and mirrors each one to a fixed key in
//! on-device storage. Mutating operations validate their input, push the new
//! record and finish with an explicit [`EntityStore::save`].

pub mod auth;
pub mod chat;
pub mod collection;
pub mod error;
pub mod events;
pub mod feed;
pub mod ids;
pub mod keys;
pub mod ministries;
pub mod persistence;
pub mod services;

use argon2::Argon2;
use steeple_db::KeyValueStore;
use steeple_types::{ChatMessage, EventItem, Ministry, ServiceItem, User};

pub use collection::Collection;
pub use error::StoreError;
pub use ids::IdGenerator;
pub use persistence::{LoadReport, SaveReport};

pub struct EntityStore<S: KeyValueStore> {
    storage: S,
    ids: IdGenerator,
    hasher: Argon2<'static>,
    users: Vec<User>,
    ministries: Vec<Ministry>,
    events: Vec<EventItem>,
    services: Vec<ServiceItem>,
    chat_messages: Vec<ChatMessage>,
    session: Option<User>,
}

impl<S: KeyValueStore> EntityStore<S> {
    /// An empty store. Call [`EntityStore::load`] before reading anything.
    pub fn new(storage: S) -> Self {
        Self::with_hasher(storage, Argon2::default())
    }

    pub fn with_hasher(storage: S, hasher: Argon2<'static>) -> Self {
        Self {
            storage,
            ids: IdGenerator::new(),
            hasher,
            users: Vec::new(),
            ministries: Vec::new(),
            events: Vec::new(),
            services: Vec::new(),
            chat_messages: Vec::new(),
            session: None,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn ministries(&self) -> &[Ministry] {
        &self.ministries
    }

    pub fn events(&self) -> &[EventItem] {
        &self.events
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.chat_messages
    }

    pub fn session_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Pushes a record onto its collection and persists everything.
    ///
    /// The record's id is reserved so later generated ids never collide with it.
    pub fn append<T: Collection + Clone>(&mut self, record: T) -> T {
        self.ids.observe(record.id());
        T::items_mut(self).push(record.clone());
        self.save();
        record
    }

    fn require_session(&self) -> Result<&User, StoreError> {
        self.session.as_ref().ok_or(StoreError::NotLoggedIn)
    }

    /// Creator id for a new record: the supplied one, else the session user.
    fn resolve_creator(&self, created_by: Option<String>) -> Result<String, StoreError> {
        let session = self.require_session()?;
        Ok(created_by
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| session.id.clone()))
    }
}
