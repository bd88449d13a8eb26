//! Booking administration: appointments are created through the public
//! pipeline and acted on via emailed links, so the back office only lists
//! and deletes them.

use yew::prelude::*;

use common::model::booking::Booking;

use crate::components::manager::{FieldErrors, FormHandle, ManagedResource};
use crate::resources::NoDraft;

impl ManagedResource for Booking {
    type Draft = NoDraft;

    fn endpoint() -> &'static str {
        "appointments"
    }

    fn name() -> &'static str {
        "Booking"
    }

    fn title() -> &'static str {
        "Bookings"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn draft(&self) -> NoDraft {
        NoDraft
    }

    fn columns() -> &'static [&'static str] {
        &["Client", "Email", "Date", "Time", "Status"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.client_name.clone() } },
            html! { { self.email.clone() } },
            html! { { self.date.clone() } },
            html! { { self.time.clone() } },
            html! { { self.status.label() } },
        ]
    }

    fn matches(&self, needle: &str) -> bool {
        self.client_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.date.contains(needle)
    }

    fn can_create() -> bool {
        false
    }

    fn can_edit() -> bool {
        false
    }

    fn form(_draft: &NoDraft, _errors: &FieldErrors, _handle: &FormHandle<Self>) -> Html {
        html! {}
    }
}
