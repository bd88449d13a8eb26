//! Practice-area administration: typed draft and manager wiring.

use std::rc::Rc;

use serde_json::json;
use yew::prelude::*;

use common::model::practice_area::PracticeArea;

use crate::components::manager::{
    attachment_field, rows_field, text_field, textarea_field, FieldErrors, FormHandle,
    ManagedResource, ResourceDraft, Rows, Setter, Slot,
};
use crate::forms::{self, Attachment, UploadKind};
use crate::resources::excerpt;

#[derive(Clone, PartialEq)]
pub struct PracticeAreaDraft {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub features: Vec<String>,
    pub image: Attachment,
    pub remove_image: bool,
}

impl Default for PracticeAreaDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            summary: String::new(),
            content: String::new(),
            features: vec![String::new()],
            image: Attachment::Unset,
            remove_image: false,
        }
    }
}

impl ResourceDraft for PracticeAreaDraft {
    fn validate(&self) -> Result<(), String> {
        forms::required("Title", &self.title)?;
        forms::required("Slug", &self.slug)?;
        forms::required("Summary", &self.summary)?;
        forms::required("Content", &self.content)
    }

    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "title": self.title.trim(),
            "slug": self.slug.trim(),
            "summary": self.summary.trim(),
            "content": self.content,
            "features": forms::pruned(&self.features),
        });
        if self.remove_image {
            body["remove_image"] = json!(true);
        }
        body
    }

    fn files(&self) -> Vec<(&'static str, Option<web_sys::File>)> {
        vec![("image", self.image.upload())]
    }
}

impl ManagedResource for PracticeArea {
    type Draft = PracticeAreaDraft;

    fn endpoint() -> &'static str {
        "practice-areas"
    }

    fn name() -> &'static str {
        "Practice area"
    }

    fn title() -> &'static str {
        "Practice Areas"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> PracticeAreaDraft {
        let mut features = self.features.clone();
        forms::ensure_slot(&mut features);
        PracticeAreaDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            features,
            image: Attachment::from_path(&self.image),
            remove_image: false,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Slug", "Summary"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.title.clone() } },
            html! { { self.slug.clone() } },
            html! { { excerpt(&self.summary, 60) } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.slug.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }

    fn form(draft: &PracticeAreaDraft, errors: &FieldErrors, handle: &FormHandle<Self>) -> Html {
        let features: Rows<Self> = Rc::new(|d: &mut PracticeAreaDraft| &mut d.features);
        let image: Slot<Self> = Rc::new(|d: &mut PracticeAreaDraft| &mut d.image);
        let remove_image: Setter<Self> = Rc::new(|d: &mut PracticeAreaDraft| {
            d.image = Attachment::Unset;
            d.remove_image = true;
        });
        html! {
            <>
                { text_field("Title", &draft.title, handle.setter(|d, v| d.title = v)) }
                { text_field("Slug", &draft.slug, handle.setter(|d, v| d.slug = v)) }
                { textarea_field("Summary", &draft.summary, 3, handle.setter(|d, v| d.summary = v)) }
                { textarea_field("Content", &draft.content, 10, handle.setter(|d, v| d.content = v)) }
                { rows_field(handle, "Feature", &draft.features, features) }
                {
                    attachment_field(
                        handle,
                        "Image",
                        UploadKind::Image,
                        &draft.image,
                        image,
                        remove_image,
                        errors.get("Image"),
                    )
                }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PracticeArea {
        PracticeArea {
            id: 3,
            title: "Corporate Law".to_string(),
            slug: "corporate-law".to_string(),
            summary: "Counsel for businesses of every size.".to_string(),
            content: "<p>Full-service corporate representation.</p>".to_string(),
            image: None,
            features: vec!["Mergers".to_string(), "Contracts".to_string()],
        }
    }

    #[test]
    fn edit_draft_round_trips_fields() {
        let body = sample().draft().body();
        assert_eq!(body["title"], "Corporate Law");
        assert_eq!(body["slug"], "corporate-law");
        assert_eq!(body["features"], json!(["Mergers", "Contracts"]));
    }

    #[test]
    fn empty_feature_slots_are_pruned_at_submit() {
        let mut draft = sample().draft();
        draft.features = vec![
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
            "".to_string(),
        ];
        assert_eq!(draft.body()["features"], json!(["a", "b"]));
    }

    #[test]
    fn draft_of_featureless_area_keeps_one_slot() {
        let mut area = sample();
        area.features.clear();
        assert_eq!(area.draft().features, vec![String::new()]);
    }

    #[test]
    fn validation_requires_core_fields() {
        assert!(PracticeAreaDraft::default().validate().is_err());
        assert!(sample().draft().validate().is_ok());
    }
}
