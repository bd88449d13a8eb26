use serde::{Deserialize, Serialize};

/// A legal/policy document (terms of service, privacy policy, disclaimers).
/// `content` is rich HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub title: String,
    pub content: String,
}
