//! Banner administration: typed draft and manager wiring.

use std::rc::Rc;

use serde_json::json;
use yew::prelude::*;

use common::model::banner::{Banner, BannerStatus};

use crate::components::manager::{
    attachment_field, select_field, text_field, FieldErrors, FormHandle, ManagedResource,
    ResourceDraft, Setter, Slot, Toggle,
};
use crate::forms::{self, Attachment, UploadKind};

#[derive(Clone, PartialEq)]
pub struct BannerDraft {
    pub title: String,
    pub subtitle: String,
    pub link: String,
    pub status: BannerStatus,
    pub image: Attachment,
    pub remove_image: bool,
}

impl Default for BannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            link: String::new(),
            status: BannerStatus::Active,
            image: Attachment::Unset,
            remove_image: false,
        }
    }
}

impl ResourceDraft for BannerDraft {
    fn validate(&self) -> Result<(), String> {
        forms::required("Title", &self.title)?;
        forms::required("Subtitle", &self.subtitle)
    }

    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "title": self.title.trim(),
            "subtitle": self.subtitle.trim(),
            "link": self.link.trim(),
            "status": self.status,
        });
        // The clearing flag only exists when the user pressed "Remove".
        if self.remove_image {
            body["remove_image"] = json!(true);
        }
        body
    }

    fn files(&self) -> Vec<(&'static str, Option<web_sys::File>)> {
        vec![("image", self.image.upload())]
    }
}

impl ManagedResource for Banner {
    type Draft = BannerDraft;

    fn endpoint() -> &'static str {
        "banners"
    }

    fn name() -> &'static str {
        "Banner"
    }

    fn title() -> &'static str {
        "Banners"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> BannerDraft {
        BannerDraft {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            link: self.link.clone().unwrap_or_default(),
            status: self.status,
            image: Attachment::from_path(&self.image),
            remove_image: false,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Subtitle", "Status"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.title.clone() } },
            html! { { self.subtitle.clone() } },
            html! { { self.status.label() } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.subtitle.to_lowercase().contains(needle)
    }

    fn toggle(&self) -> Option<Toggle> {
        Some(Toggle {
            label: self.status.label(),
            path: format!("banners/status/{}", self.id),
        })
    }

    fn form(draft: &BannerDraft, errors: &FieldErrors, handle: &FormHandle<Self>) -> Html {
        let image: Slot<Self> = Rc::new(|d: &mut BannerDraft| &mut d.image);
        let remove_image: Setter<Self> = Rc::new(|d: &mut BannerDraft| {
            d.image = Attachment::Unset;
            d.remove_image = true;
        });
        html! {
            <>
                { text_field("Title", &draft.title, handle.setter(|d, v| d.title = v)) }
                { text_field("Subtitle", &draft.subtitle, handle.setter(|d, v| d.subtitle = v)) }
                { text_field("Link", &draft.link, handle.setter(|d, v| d.link = v)) }
                {
                    select_field(
                        "Status",
                        &[("active", "Active"), ("inactive", "Inactive")],
                        status_value(draft.status),
                        handle.setter(|d, v| d.status = parse_status(&v)),
                    )
                }
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

fn status_value(status: BannerStatus) -> &'static str {
    match status {
        BannerStatus::Active => "active",
        BannerStatus::Inactive => "inactive",
    }
}

fn parse_status(value: &str) -> BannerStatus {
    match value {
        "inactive" => BannerStatus::Inactive,
        _ => BannerStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Banner {
        Banner {
            id: 7,
            title: "Defending what matters".to_string(),
            subtitle: "Trusted counsel since 1987".to_string(),
            link: Some("/contact".to_string()),
            image: Some("uploads/banners/hero.jpg".to_string()),
            status: BannerStatus::Active,
        }
    }

    #[test]
    fn edit_draft_round_trips_scalar_fields() {
        let body = sample().draft().body();
        assert_eq!(body["title"], "Defending what matters");
        assert_eq!(body["subtitle"], "Trusted counsel since 1987");
        assert_eq!(body["link"], "/contact");
        assert_eq!(body["status"], "active");
    }

    #[test]
    fn untouched_attachment_sends_no_clearing_instruction() {
        let draft = sample().draft();
        assert_eq!(
            draft.image,
            Attachment::Existing("uploads/banners/hero.jpg".to_string())
        );
        assert!(draft.body().get("remove_image").is_none());
        assert!(draft.files().iter().all(|(_, file)| file.is_none()));
    }

    #[test]
    fn explicit_remove_sets_the_flag() {
        let mut draft = sample().draft();
        draft.image = Attachment::Unset;
        draft.remove_image = true;
        assert_eq!(draft.body()["remove_image"], json!(true));
    }

    #[test]
    fn empty_draft_fails_required_validation() {
        assert!(BannerDraft::default().validate().is_err());
    }

    #[test]
    fn status_flip_is_an_involution() {
        assert_eq!(BannerStatus::Active.flipped(), BannerStatus::Inactive);
        assert_eq!(BannerStatus::Active.flipped().flipped(), BannerStatus::Active);
    }
}
