use serde::{Deserialize, Serialize};

/// A consultation appointment. Date and time stay in the API's wire
/// spelling (`YYYY-MM-DD`, `HH:MM`); the client never reinterprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub client_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: String,
    pub time: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Cancelled,
    Rescheduled,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Accepted => "Accepted",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Rescheduled => "Rescheduled",
        }
    }
}
