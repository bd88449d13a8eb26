//! Vacancy administration: typed draft and manager wiring. The brochure
//! attachment is a PDF, so it runs under the document upload rules.

use std::rc::Rc;

use serde_json::json;
use yew::prelude::*;

use common::model::vacancy::{Vacancy, VacancyStatus};

use crate::components::manager::{
    attachment_field, rows_field, select_field, text_field, textarea_field, FieldErrors,
    FormHandle, ManagedResource, ResourceDraft, Rows, Setter, Slot, Toggle,
};
use crate::forms::{self, Attachment, UploadKind};

#[derive(Clone, PartialEq)]
pub struct VacancyDraft {
    pub title: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub status: VacancyStatus,
    pub brochure: Attachment,
    pub remove_brochure: bool,
}

impl Default for VacancyDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            employment_type: String::new(),
            description: String::new(),
            requirements: vec![String::new()],
            status: VacancyStatus::Open,
            brochure: Attachment::Unset,
            remove_brochure: false,
        }
    }
}

impl ResourceDraft for VacancyDraft {
    fn validate(&self) -> Result<(), String> {
        forms::required("Title", &self.title)?;
        forms::required("Location", &self.location)?;
        forms::required("Employment type", &self.employment_type)?;
        forms::required("Description", &self.description)
    }

    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "title": self.title.trim(),
            "location": self.location.trim(),
            "employment_type": self.employment_type.trim(),
            "description": self.description,
            "requirements": forms::pruned(&self.requirements),
            "status": self.status,
        });
        if self.remove_brochure {
            body["remove_brochure"] = json!(true);
        }
        body
    }

    fn files(&self) -> Vec<(&'static str, Option<web_sys::File>)> {
        vec![("brochure", self.brochure.upload())]
    }
}

impl ManagedResource for Vacancy {
    type Draft = VacancyDraft;

    fn endpoint() -> &'static str {
        "vacancies"
    }

    fn name() -> &'static str {
        "Vacancy"
    }

    fn title() -> &'static str {
        "Vacancies"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> VacancyDraft {
        let mut requirements = self.requirements.clone();
        forms::ensure_slot(&mut requirements);
        VacancyDraft {
            title: self.title.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            description: self.description.clone(),
            requirements,
            status: self.status,
            brochure: Attachment::from_path(&self.brochure),
            remove_brochure: false,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Location", "Type", "Status"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.title.clone() } },
            html! { { self.location.clone() } },
            html! { { self.employment_type.clone() } },
            html! { { self.status.label() } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.employment_type.to_lowercase().contains(needle)
    }

    fn toggle(&self) -> Option<Toggle> {
        Some(Toggle {
            label: self.status.label(),
            path: format!("vacancies/status/{}", self.id),
        })
    }

    fn form(draft: &VacancyDraft, errors: &FieldErrors, handle: &FormHandle<Self>) -> Html {
        let requirements: Rows<Self> = Rc::new(|d: &mut VacancyDraft| &mut d.requirements);
        let brochure: Slot<Self> = Rc::new(|d: &mut VacancyDraft| &mut d.brochure);
        let remove_brochure: Setter<Self> = Rc::new(|d: &mut VacancyDraft| {
            d.brochure = Attachment::Unset;
            d.remove_brochure = true;
        });
        html! {
            <>
                { text_field("Title", &draft.title, handle.setter(|d, v| d.title = v)) }
                { text_field("Location", &draft.location, handle.setter(|d, v| d.location = v)) }
                { text_field("Employment type", &draft.employment_type, handle.setter(|d, v| d.employment_type = v)) }
                { textarea_field("Description", &draft.description, 8, handle.setter(|d, v| d.description = v)) }
                { rows_field(handle, "Requirement", &draft.requirements, requirements) }
                {
                    select_field(
                        "Status",
                        &[("open", "Open"), ("closed", "Closed")],
                        status_value(draft.status),
                        handle.setter(|d, v| d.status = parse_status(&v)),
                    )
                }
                {
                    attachment_field(
                        handle,
                        "Brochure",
                        UploadKind::Document,
                        &draft.brochure,
                        brochure,
                        remove_brochure,
                        errors.get("Brochure"),
                    )
                }
            </>
        }
    }
}

fn status_value(status: VacancyStatus) -> &'static str {
    match status {
        VacancyStatus::Open => "open",
        VacancyStatus::Closed => "closed",
    }
}

fn parse_status(value: &str) -> VacancyStatus {
    match value {
        "closed" => VacancyStatus::Closed,
        _ => VacancyStatus::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vacancy {
        Vacancy {
            id: 4,
            title: "Associate Attorney".to_string(),
            location: "Portland, OR".to_string(),
            employment_type: "Full-time".to_string(),
            description: "<p>Join our litigation group.</p>".to_string(),
            requirements: vec!["JD degree".to_string(), "Bar admission".to_string()],
            brochure: Some("uploads/vacancies/associate.pdf".to_string()),
            status: VacancyStatus::Open,
        }
    }

    #[test]
    fn edit_draft_round_trips_fields() {
        let body = sample().draft().body();
        assert_eq!(body["title"], "Associate Attorney");
        assert_eq!(body["status"], "open");
        assert_eq!(body["requirements"], json!(["JD degree", "Bar admission"]));
    }

    #[test]
    fn requirement_slots_are_pruned_at_submit() {
        let mut draft = sample().draft();
        draft.requirements = vec!["a".to_string(), " ".to_string(), "b".to_string()];
        assert_eq!(draft.body()["requirements"], json!(["a", "b"]));
    }

    #[test]
    fn untouched_brochure_sends_no_clearing_instruction() {
        let draft = sample().draft();
        assert_eq!(
            draft.brochure,
            Attachment::Existing("uploads/vacancies/associate.pdf".to_string())
        );
        assert!(draft.body().get("remove_brochure").is_none());
        assert!(draft.files().iter().all(|(_, file)| file.is_none()));
    }
}
