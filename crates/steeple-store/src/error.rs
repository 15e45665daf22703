use thiserror::Error;

/// Rejections raised by form submissions. None of them change store state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("name, email, and password must be valid (at least 3 characters)")]
    InvalidSignup,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("a user with that email already exists")]
    DuplicateEmail,

    #[error("invalid credentials or user does not exist")]
    InvalidCredentials,

    #[error("must be logged in")]
    NotLoggedIn,

    #[error("failed to hash password: {0}")]
    PasswordHash(String),
}
