//! Terms administration: legal/policy documents with rich-text content.

use serde_json::json;
use yew::prelude::*;

use common::model::term::Term;

use crate::components::manager::{
    text_field, textarea_field, FieldErrors, FormHandle, ManagedResource, ResourceDraft,
};
use crate::forms;
use crate::resources::excerpt;

#[derive(Clone, PartialEq, Default)]
pub struct TermDraft {
    pub title: String,
    pub content: String,
}

impl ResourceDraft for TermDraft {
    fn validate(&self) -> Result<(), String> {
        forms::required("Title", &self.title)?;
        forms::required("Content", &self.content)
    }

    fn body(&self) -> serde_json::Value {
        json!({
            "title": self.title.trim(),
            "content": self.content,
        })
    }
}

impl ManagedResource for Term {
    type Draft = TermDraft;

    fn endpoint() -> &'static str {
        "terms"
    }

    fn name() -> &'static str {
        "Term"
    }

    fn title() -> &'static str {
        "Terms & Policies"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> TermDraft {
        TermDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Title", "Content"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.title.clone() } },
            html! { { excerpt(&self.content, 80) } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    fn form(draft: &TermDraft, _errors: &FieldErrors, handle: &FormHandle<Self>) -> Html {
        html! {
            <>
                { text_field("Title", &draft.title, handle.setter(|d, v| d.title = v)) }
                { textarea_field("Content", &draft.content, 12, handle.setter(|d, v| d.content = v)) }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_draft_round_trips_fields() {
        let term = Term {
            id: 2,
            title: "Privacy Policy".to_string(),
            content: "<p>We respect your privacy.</p>".to_string(),
        };
        let body = term.draft().body();
        assert_eq!(body["title"], "Privacy Policy");
        assert_eq!(body["content"], "<p>We respect your privacy.</p>");
    }

    #[test]
    fn validation_requires_both_fields() {
        assert!(TermDraft::default().validate().is_err());
    }
}
