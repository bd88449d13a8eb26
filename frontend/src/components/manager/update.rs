//! Update function for the generic resource manager.
//!
//! Elm-style: receives the page state, the component context and a message,
//! mutates state, returns whether to re-render. Every network operation is
//! dispatched from here via `spawn_local` and comes back as another message
//! carrying a `Result`; a failed request never escapes the component — it
//! is logged by the API layer and surfaced as a toast or a form error.
//! Nothing is retried, and in-flight requests are not cancelled: a response
//! resolving after navigation sends its message to a dead scope, which Yew
//! drops.

use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::{FormState, ManagedResource, Msg, ResourceDraft, ResourceManager};
use crate::api;
use crate::components::toast::show_toast;
use crate::forms::{self, Attachment, LocalFile, UploadKind};

/// Re-runs the list fetch. Called on mount and after every successful
/// mutation; the list is only ever replaced by what the server returns.
pub fn refetch<R: ManagedResource>(link: &Scope<ResourceManager<R>>) {
    let link = link.clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(api::get::<Vec<R>>(R::endpoint()).await));
    });
}

pub fn update<R: ManagedResource>(
    mgr: &mut ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Loaded(Ok(list)) => {
            mgr.loading = false;
            mgr.list = list;
            true
        }
        Msg::Loaded(Err(err)) => {
            // Keep whatever list we had; only tell the user.
            mgr.loading = false;
            show_toast(&err.to_string());
            true
        }
        Msg::Refresh => {
            refetch(ctx.link());
            false
        }
        Msg::SetFilter(filter) => {
            mgr.filter = filter;
            mgr.page = 0;
            true
        }
        Msg::SetPage(page) => {
            mgr.page = page;
            true
        }
        Msg::OpenCreate => {
            mgr.form = Some(FormState::open(None, R::Draft::default()));
            true
        }
        Msg::OpenEdit(id) => {
            if let Some(resource) = mgr.list.iter().find(|r| r.id() == id) {
                mgr.form = Some(FormState::open(Some(id), resource.draft()));
            }
            true
        }
        Msg::RequestClose => {
            let dirty = mgr.form.as_ref().map(FormState::dirty).unwrap_or(false);
            if !dirty || confirm("Discard unsaved changes?") {
                mgr.form = None;
                true
            } else {
                false
            }
        }
        Msg::CloseForm => {
            mgr.form = None;
            true
        }
        Msg::Patch(set) => {
            if let Some(form) = mgr.form.as_mut() {
                set(&mut form.draft);
                true
            } else {
                false
            }
        }
        Msg::RowAdd(rows) => {
            if let Some(form) = mgr.form.as_mut() {
                forms::add_row(rows(&mut form.draft));
                true
            } else {
                false
            }
        }
        Msg::RowRemove(rows, index) => {
            if let Some(form) = mgr.form.as_mut() {
                forms::remove_row(rows(&mut form.draft), index);
                true
            } else {
                false
            }
        }
        Msg::RowEdit(rows, index, value) => {
            if let Some(form) = mgr.form.as_mut() {
                forms::set_row(rows(&mut form.draft), index, value);
                true
            } else {
                false
            }
        }
        Msg::FileChosen {
            kind,
            label,
            slot,
            file,
        } => {
            let Some(form) = mgr.form.as_mut() else {
                return false;
            };
            let mime = file.type_();
            let size = file.size() as u64;
            match kind.check(&mime, size) {
                Err(message) => {
                    // Rejected file: the attachment keeps its prior state.
                    form.field_errors.insert(label, message);
                }
                Ok(()) => {
                    form.field_errors.remove(label);
                    *slot(&mut form.draft) = Attachment::Replacement(LocalFile {
                        file: file.clone(),
                        name: file.name(),
                        mime: mime.clone(),
                        size,
                        preview: None,
                    });
                    if kind == UploadKind::Image {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let blob = gloo_file::Blob::from(file);
                            if let Ok(bytes) = gloo_file::futures::read_as_bytes(&blob).await {
                                link.send_message(Msg::PreviewReady {
                                    slot,
                                    preview: forms::data_url(&mime, &bytes),
                                });
                            }
                        });
                    }
                }
            }
            true
        }
        Msg::PreviewReady { slot, preview } => {
            if let Some(form) = mgr.form.as_mut() {
                if let Attachment::Replacement(local) = slot(&mut form.draft) {
                    local.preview = Some(preview);
                    return true;
                }
            }
            false
        }
        Msg::Submit => {
            let Some(form) = mgr.form.as_mut() else {
                return false;
            };
            if form.submitting {
                return false;
            }
            // Validation failures block submission before any network call.
            if let Err(message) = form.draft.validate() {
                form.error = Some(message);
                return true;
            }
            form.error = None;
            form.submitting = true;
            let payload = forms::payload(form.draft.body(), form.draft.files());
            let path = match form.origin {
                None => R::endpoint().to_string(),
                Some(id) => format!("{}/update/{}", R::endpoint(), id),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Submitted(api::send_payload(&path, payload).await));
            });
            true
        }
        Msg::Submitted(Ok(())) => {
            mgr.form = None;
            show_toast(&format!("{} saved", R::name()));
            refetch(ctx.link());
            true
        }
        Msg::Submitted(Err(err)) => {
            // The form stays open with the entered data intact.
            if let Some(form) = mgr.form.as_mut() {
                form.submitting = false;
                form.error = Some(err.to_string());
            }
            true
        }
        Msg::AskDelete(id) => {
            mgr.pending_delete = Some(id);
            true
        }
        Msg::CancelDelete => {
            mgr.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = mgr.pending_delete else {
                return false;
            };
            if mgr.deleting {
                return false;
            }
            mgr.deleting = true;
            let path = format!("{}/{}", R::endpoint(), id);
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Deleted(api::delete(&path).await));
            });
            true
        }
        Msg::Deleted(Ok(())) => {
            mgr.deleting = false;
            mgr.pending_delete = None;
            show_toast(&format!("{} deleted", R::name()));
            refetch(ctx.link());
            true
        }
        Msg::Deleted(Err(err)) => {
            mgr.deleting = false;
            mgr.pending_delete = None;
            show_toast(&err.to_string());
            true
        }
        Msg::ToggleStatus(id) => {
            let toggle = mgr
                .list
                .iter()
                .find(|r| r.id() == id)
                .and_then(|r| r.toggle());
            if let Some(toggle) = toggle {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Toggled(
                        api::post_ok(&toggle.path, &serde_json::json!({})).await,
                    ));
                });
            }
            false
        }
        Msg::Toggled(Ok(())) => {
            // No optimistic update; the refetch carries the confirmed state.
            refetch(ctx.link());
            false
        }
        Msg::Toggled(Err(err)) => {
            show_toast(&err.to_string());
            false
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
