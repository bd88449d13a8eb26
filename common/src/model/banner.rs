use serde::{Deserialize, Serialize};

/// Home-page hero banner. `image` is a server-relative upload path; the
/// client resolves it against the configured base URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub status: BannerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    Inactive,
}

impl BannerStatus {
    pub fn flipped(self) -> Self {
        match self {
            BannerStatus::Active => BannerStatus::Inactive,
            BannerStatus::Inactive => BannerStatus::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BannerStatus::Active => "Active",
            BannerStatus::Inactive => "Inactive",
        }
    }
}
