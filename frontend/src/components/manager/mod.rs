//! Generic back-office resource manager: list view, create/edit form,
//! delete with confirmation, and an optional status toggle, instantiated
//! once per resource type.
//!
//! The repeated CRUD pattern lives here exactly once. A resource plugs in
//! through two traits: [`ManagedResource`] describes the collection
//! (endpoint, list columns, capability flags, the form body) and its
//! [`ResourceDraft`] describes the client-local editable copy (defaults,
//! required-field validation, payload assembly). The state machine —
//! loading, idle, form open, submitting, error — plus filtering,
//! pagination, attachment handling and dirty tracking are shared.

use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use yew::html::Scope;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use helpers::{attachment_field, rows_field, select_field, text_field, textarea_field};
pub use messages::Msg;
pub use state::{FormState, ResourceManager};

use crate::forms::Attachment;

/// Field-level error messages keyed by field label.
pub type FieldErrors = HashMap<&'static str, String>;

/// A typed edit applied to the open draft.
pub type Setter<R> = Rc<dyn Fn(&mut <R as ManagedResource>::Draft)>;

/// Accessor for one of the draft's sub-list fields.
pub type Rows<R> = Rc<dyn Fn(&mut <R as ManagedResource>::Draft) -> &mut Vec<String>>;

/// Accessor for one of the draft's attachment fields.
pub type Slot<R> = Rc<dyn Fn(&mut <R as ManagedResource>::Draft) -> &mut Attachment>;

/// Status toggle control for resources that have one.
pub struct Toggle {
    /// Current status, shown on the toggle button.
    pub label: &'static str,
    /// Dedicated status endpoint, e.g. `banners/status/3`.
    pub path: String,
}

/// Per-collection configuration of the manager.
pub trait ManagedResource: Clone + PartialEq + DeserializeOwned + 'static {
    type Draft: ResourceDraft;

    /// Collection path under `/api`, e.g. `banners`.
    fn endpoint() -> &'static str;
    /// Singular name used in buttons, toasts and confirmations.
    fn name() -> &'static str;
    /// Page heading.
    fn title() -> &'static str;
    /// Server-assigned identifier; the client never fabricates one.
    fn id(&self) -> u64;
    /// Copies every field into a draft, verbatim.
    fn draft(&self) -> Self::Draft;
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<Html>;
    /// Client-side filter over the fetched list.
    fn matches(&self, needle: &str) -> bool;
    fn can_create() -> bool {
        true
    }
    fn can_edit() -> bool {
        true
    }
    fn toggle(&self) -> Option<Toggle> {
        None
    }
    /// Form body only; chrome, buttons and banners belong to the manager.
    fn form(draft: &Self::Draft, errors: &FieldErrors, handle: &FormHandle<Self>) -> Html;
}

/// The client-local, uncommitted copy of a resource's fields.
pub trait ResourceDraft: Clone + PartialEq + Default + 'static {
    /// Required-field presence, checked before any network call.
    fn validate(&self) -> Result<(), String>;
    /// JSON body with sub-list slots already pruned.
    fn body(&self) -> serde_json::Value;
    /// File parts keyed by field name; `None` entries are not sent.
    fn files(&self) -> Vec<(&'static str, Option<web_sys::File>)> {
        Vec::new()
    }
}

/// Typed handle the per-resource form body uses to reach the manager.
pub struct FormHandle<R: ManagedResource> {
    pub(crate) link: Scope<ResourceManager<R>>,
}

impl<R: ManagedResource> FormHandle<R> {
    /// Callback that writes a text value into the draft.
    pub fn setter(&self, set: impl Fn(&mut R::Draft, String) + 'static) -> Callback<String> {
        let link = self.link.clone();
        let set = Rc::new(set);
        Callback::from(move |value: String| {
            let set = set.clone();
            link.send_message(Msg::Patch(Rc::new(move |draft: &mut R::Draft| {
                set(draft, value.clone())
            })));
        })
    }

    pub(crate) fn scope(&self) -> &Scope<ResourceManager<R>> {
        &self.link
    }
}

impl<R: ManagedResource> Component for ResourceManager<R> {
    type Message = Msg<R>;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ResourceManager::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::refetch(ctx.link());
        }
    }
}
