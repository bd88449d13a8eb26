use serde::{Deserialize, Serialize};

/// Site-wide settings, edited as a single record in the back office and
/// fetched once on public app boot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub id: u64,
    pub site_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    pub footer_text: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Outbound-mail configuration used by the API for booking and contact
/// notifications. Edited as a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub id: u64,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_name: String,
    pub from_email: String,
}
