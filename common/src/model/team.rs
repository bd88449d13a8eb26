use serde::{Deserialize, Serialize};

/// An attorney or staff profile. `bio` is rich HTML; `education` is an
/// ordered sub-list of degree entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub position: String,
    pub bio: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
