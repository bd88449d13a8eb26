//! Team-member administration: typed draft and manager wiring.

use std::rc::Rc;

use serde_json::json;
use yew::prelude::*;

use common::model::team::TeamMember;

use crate::components::manager::{
    attachment_field, rows_field, text_field, textarea_field, FieldErrors, FormHandle,
    ManagedResource, ResourceDraft, Rows, Setter, Slot,
};
use crate::forms::{self, Attachment, UploadKind};

#[derive(Clone, PartialEq)]
pub struct TeamMemberDraft {
    pub name: String,
    pub slug: String,
    pub position: String,
    pub bio: String,
    pub education: Vec<String>,
    pub email: String,
    pub phone: String,
    pub photo: Attachment,
    pub remove_photo: bool,
}

impl Default for TeamMemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            position: String::new(),
            bio: String::new(),
            education: vec![String::new()],
            email: String::new(),
            phone: String::new(),
            photo: Attachment::Unset,
            remove_photo: false,
        }
    }
}

impl ResourceDraft for TeamMemberDraft {
    fn validate(&self) -> Result<(), String> {
        forms::required("Name", &self.name)?;
        forms::required("Slug", &self.slug)?;
        forms::required("Position", &self.position)?;
        forms::required("Bio", &self.bio)?;
        if !self.email.trim().is_empty() && !forms::valid_email(&self.email) {
            return Err("Email must be a valid address".to_string());
        }
        Ok(())
    }

    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "name": self.name.trim(),
            "slug": self.slug.trim(),
            "position": self.position.trim(),
            "bio": self.bio,
            "education": forms::pruned(&self.education),
            "email": self.email.trim(),
            "phone": self.phone.trim(),
        });
        if self.remove_photo {
            body["remove_photo"] = json!(true);
        }
        body
    }

    fn files(&self) -> Vec<(&'static str, Option<web_sys::File>)> {
        vec![("photo", self.photo.upload())]
    }
}

impl ManagedResource for TeamMember {
    type Draft = TeamMemberDraft;

    fn endpoint() -> &'static str {
        "team-members"
    }

    fn name() -> &'static str {
        "Team member"
    }

    fn title() -> &'static str {
        "Team Members"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> TeamMemberDraft {
        let mut education = self.education.clone();
        forms::ensure_slot(&mut education);
        TeamMemberDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            position: self.position.clone(),
            bio: self.bio.clone(),
            education,
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            photo: Attachment::from_path(&self.photo),
            remove_photo: false,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Position", "Email"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.name.clone() } },
            html! { { self.position.clone() } },
            html! { { self.email.clone().unwrap_or_default() } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
    }

    fn form(draft: &TeamMemberDraft, errors: &FieldErrors, handle: &FormHandle<Self>) -> Html {
        let education: Rows<Self> = Rc::new(|d: &mut TeamMemberDraft| &mut d.education);
        let photo: Slot<Self> = Rc::new(|d: &mut TeamMemberDraft| &mut d.photo);
        let remove_photo: Setter<Self> = Rc::new(|d: &mut TeamMemberDraft| {
            d.photo = Attachment::Unset;
            d.remove_photo = true;
        });
        html! {
            <>
                { text_field("Name", &draft.name, handle.setter(|d, v| d.name = v)) }
                { text_field("Slug", &draft.slug, handle.setter(|d, v| d.slug = v)) }
                { text_field("Position", &draft.position, handle.setter(|d, v| d.position = v)) }
                { textarea_field("Bio", &draft.bio, 8, handle.setter(|d, v| d.bio = v)) }
                { rows_field(handle, "Education", &draft.education, education) }
                { text_field("Email", &draft.email, handle.setter(|d, v| d.email = v)) }
                { text_field("Phone", &draft.phone, handle.setter(|d, v| d.phone = v)) }
                {
                    attachment_field(
                        handle,
                        "Photo",
                        UploadKind::Image,
                        &draft.photo,
                        photo,
                        remove_photo,
                        errors.get("Photo"),
                    )
                }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TeamMember {
        TeamMember {
            id: 11,
            name: "Miriam Okafor".to_string(),
            slug: "miriam-okafor".to_string(),
            position: "Senior Partner".to_string(),
            bio: "<p>Twenty years of litigation experience.</p>".to_string(),
            photo: Some("uploads/team/okafor.jpg".to_string()),
            education: vec!["JD, Columbia".to_string()],
            email: Some("m.okafor@example.com".to_string()),
            phone: None,
        }
    }

    #[test]
    fn edit_draft_round_trips_fields() {
        let body = sample().draft().body();
        assert_eq!(body["name"], "Miriam Okafor");
        assert_eq!(body["position"], "Senior Partner");
        assert_eq!(body["education"], json!(["JD, Columbia"]));
        assert_eq!(body["phone"], "");
    }

    #[test]
    fn untouched_photo_sends_no_clearing_instruction() {
        let draft = sample().draft();
        assert!(draft.body().get("remove_photo").is_none());
        assert!(draft.files().iter().all(|(_, file)| file.is_none()));
    }

    #[test]
    fn bad_optional_email_is_rejected() {
        let mut draft = sample().draft();
        draft.email = "not-an-email".to_string();
        assert!(draft.validate().is_err());
        draft.email = String::new();
        assert!(draft.validate().is_ok());
    }
}
