use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form. Admins can only
/// read, mark handled, and delete these; there is no create/edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
}

impl MessageStatus {
    pub fn flipped(self) -> Self {
        match self {
            MessageStatus::New => MessageStatus::Read,
            MessageStatus::Read => MessageStatus::New,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageStatus::New => "New",
            MessageStatus::Read => "Read",
        }
    }
}
