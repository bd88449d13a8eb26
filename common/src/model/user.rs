use serde::{Deserialize, Serialize};

/// Minimal descriptor of the authenticated back-office user, persisted
/// alongside the bearer token for the life of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}
