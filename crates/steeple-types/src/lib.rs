pub mod api;
pub mod models;

pub use api::{LoginForm, NewChatMessage, NewEvent, NewMinistry, NewService, SignupForm};
pub use models::{ChatMessage, EventItem, Ministry, ServiceItem, User};
