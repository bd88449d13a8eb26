//! Contact-message administration. Messages arrive through the public
//! form, so the back office only lists, marks handled, and deletes them.

use yew::prelude::*;

use common::model::contact::ContactMessage;

use crate::components::manager::{FieldErrors, FormHandle, ManagedResource, Toggle};
use crate::resources::{excerpt, NoDraft};

impl ManagedResource for ContactMessage {
    type Draft = NoDraft;

    fn endpoint() -> &'static str {
        "contacts"
    }

    fn name() -> &'static str {
        "Message"
    }

    fn title() -> &'static str {
        "Contact Messages"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> NoDraft {
        NoDraft
    }

    fn columns() -> &'static [&'static str] {
        &["From", "Email", "Subject", "Message", "Status"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.name.clone() } },
            html! { { self.email.clone() } },
            html! { { self.subject.clone() } },
            html! { { excerpt(&self.message, 80) } },
            html! { { self.status.label() } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.subject.to_lowercase().contains(needle)
            || self.message.to_lowercase().contains(needle)
    }

    fn can_create() -> bool {
        false
    }

    fn can_edit() -> bool {
        false
    }

    fn toggle(&self) -> Option<Toggle> {
        Some(Toggle {
            label: self.status.label(),
            path: format!("contacts/status/{}", self.id),
        })
    }

    fn form(_draft: &NoDraft, _errors: &FieldErrors, _handle: &FormHandle<Self>) -> Html {
        html! {}
    }
}
