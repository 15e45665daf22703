use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use steeple_db::KeyValueStore;
use steeple_types::{LoginForm, SignupForm, User};
use tracing::{debug, info};

use crate::persistence::SaveReport;
use crate::{EntityStore, StoreError, keys};

const MIN_CREDENTIAL_LEN: usize = 3;

impl<S: KeyValueStore> EntityStore<S> {
    /// Registers a new user and logs them in.
    pub fn signup(&mut self, form: &SignupForm) -> Result<User, StoreError> {
        let name = form.name.trim();
        let email = form.email.trim();

        if name.is_empty()
            || email.len() < MIN_CREDENTIAL_LEN
            || form.password.len() < MIN_CREDENTIAL_LEN
        {
            return Err(StoreError::InvalidSignup);
        }
        if form.password != form.confirm_password {
            return Err(StoreError::PasswordMismatch);
        }
        if self.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let password = hash_password(&self.hasher, &form.password)?;

        let user = User {
            id: self.ids.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            password,
            photo_url: None,
        };

        self.session = Some(user.clone());
        let user = self.append(user);

        info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Finds the user with exactly this email whose password verifies.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email == email && verify_password(password, &u.password))
    }

    pub fn login(&mut self, form: &LoginForm) -> Result<User, StoreError> {
        let user = self
            .authenticate(&form.email, &form.password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;

        self.session = Some(user.clone());
        self.save();

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Ends the session. Collections are left untouched.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.remove_key(keys::SESSION_USER, &mut SaveReport::default());
    }

    /// Sets the session user's photo, mirrored into the user collection.
    pub fn update_profile_photo(&mut self, uri: &str) -> Result<User, StoreError> {
        let session = self.session.as_mut().ok_or(StoreError::NotLoggedIn)?;
        session.photo_url = Some(uri.to_string());
        let updated = session.clone();

        if let Some(user) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *user = updated.clone();
        }
        self.save();

        Ok(updated)
    }

    /// Everyone the session user can start a conversation with.
    pub fn chat_partners(&self) -> Result<Vec<&User>, StoreError> {
        let me = self.require_session()?;
        Ok(self.users.iter().filter(|u| u.id != me.id).collect())
    }
}

fn hash_password(hasher: &Argon2<'static>, password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| StoreError::PasswordHash(e.to_string()))
}

/// Accepts Argon2 PHC strings and, for records written before hashing, an
/// exact plaintext match.
fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => {
            debug!("Stored password is not a PHC string, comparing as plaintext");
            !stored.is_empty() && stored == password
        }
    }
}
