use serde::{Deserialize, Serialize};

/// Aggregate payload backing all four About-Us tabs. The public page
/// re-fetches the whole record on every tab switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPage {
    pub id: u64,
    pub mission: String,
    pub vision: String,
    pub history: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}
