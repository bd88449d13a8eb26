//! Admin session: bearer token plus the user descriptor, persisted in
//! browser local storage so a reload keeps the admin signed in. The session
//! is created on login, attached to every API call, and destroyed on logout
//! or token invalidation. Components never touch storage directly; they go
//! through `load` / `store` / `clear` so the lifecycle stays in one place
//! and the gate decision stays a pure function.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use common::model::user::AdminUser;

const STORAGE_KEY: &str = "admin_session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AdminUser,
}

pub fn load() -> Option<Session> {
    LocalStorage::get(STORAGE_KEY).ok()
}

pub fn store(session: &Session) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, session) {
        gloo_console::error!("failed to persist session:", err.to_string());
    }
}

pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}

/// What the auth gate does with a resolved session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    RedirectHome,
}

/// Session presence strictly gates the admin tree: no session means a
/// redirect to the public home route, whatever admin path was requested.
pub fn gate(session: Option<&Session>) -> Gate {
    match session {
        Some(_) => Gate::Allow,
        None => Gate::RedirectHome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: AdminUser {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    #[test]
    fn missing_session_redirects() {
        assert_eq!(gate(None), Gate::RedirectHome);
    }

    #[test]
    fn present_session_allows() {
        assert_eq!(gate(Some(&some_session())), Gate::Allow);
    }
}
