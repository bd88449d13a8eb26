use serde::{Deserialize, Serialize};

/// An open position on the careers page. `brochure` is a server-relative
/// path to an uploaded PDF with the full role description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub brochure: Option<String>,
    pub status: VacancyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    Open,
    Closed,
}

impl VacancyStatus {
    pub fn flipped(self) -> Self {
        match self {
            VacancyStatus::Open => VacancyStatus::Closed,
            VacancyStatus::Closed => VacancyStatus::Open,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VacancyStatus::Open => "Open",
            VacancyStatus::Closed => "Closed",
        }
    }
}
