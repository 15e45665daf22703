//! Storage keys. Legacy names (`@user_credentials`, `@ministries_list`,
//! `@events_list`, `@app_data`) are never read.

pub const USERS: &str = "@all_users";
pub const MINISTRIES: &str = "@all_ministries";
pub const EVENTS: &str = "@all_events";
pub const SERVICES: &str = "@all_services";
pub const CHAT_MESSAGES: &str = "@all_chatMessages";
pub const SESSION_USER: &str = "@logged_in_user";

pub const ALL: [&str; 6] = [USERS, MINISTRIES, EVENTS, SERVICES, CHAT_MESSAGES, SESSION_USER];
