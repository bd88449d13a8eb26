use serde::{Deserialize, Serialize};

/// A legal service the firm offers ("Corporate Law", "Family Law", ...).
///
/// `content` is admin-authored rich HTML rendered verbatim on the public
/// detail page. `features` is an ordered sub-list of short bullet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeArea {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}
