//! View rendering for the generic resource manager: heading with the
//! create button, filter box, list table with per-row actions, pagination,
//! and the form/delete dialogs. The per-resource form body comes from
//! `ManagedResource::form`; everything else is shared chrome.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::state::page_bounds;
use super::{FormHandle, FormState, ManagedResource, Msg, ResourceManager};

pub fn view<R: ManagedResource>(
    mgr: &ResourceManager<R>,
    ctx: &Context<ResourceManager<R>>,
) -> Html {
    let link = ctx.link();
    html! {
        <div class="resource-page">
            <div class="page-head">
                <h1>{ R::title() }</h1>
                {
                    if R::can_create() {
                        html! {
                            <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                                { format!("New {}", R::name()) }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <input
                class="filter"
                type="search"
                placeholder="Filter…"
                value={mgr.filter.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetFilter(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            {
                if mgr.loading {
                    html! { <p class="muted">{"Loading…"}</p> }
                } else {
                    build_table(mgr, link)
                }
            }
            { build_pagination(mgr, link) }
            {
                match &mgr.form {
                    Some(form) => build_form(form, link),
                    None => html! {},
                }
            }
            { build_delete_confirm(mgr, link) }
        </div>
    }
}

fn build_table<R: ManagedResource>(
    mgr: &ResourceManager<R>,
    link: &Scope<ResourceManager<R>>,
) -> Html {
    let filtered = mgr.filtered();
    if filtered.is_empty() {
        return html! { <p class="muted">{ format!("No {} to show.", R::title().to_lowercase()) }</p> };
    }
    let (start, end) = page_bounds(filtered.len(), mgr.page);
    let rows = filtered[start..end]
        .iter()
        .map(|resource| build_row(*resource, link))
        .collect::<Html>();

    html! {
        <table class="list">
            <thead>
                <tr>
                    { for R::columns().iter().map(|column| html! { <th>{ *column }</th> }) }
                    <th class="actions-col"></th>
                </tr>
            </thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}

fn build_row<R: ManagedResource>(resource: &R, link: &Scope<ResourceManager<R>>) -> Html {
    let id = resource.id();
    html! {
        <tr>
            { for resource.cells().into_iter().map(|cell| html! { <td>{ cell }</td> }) }
            <td class="actions">
                {
                    match resource.toggle() {
                        Some(toggle) => html! {
                            <button
                                class="btn small"
                                title="Toggle status"
                                onclick={link.callback(move |_| Msg::ToggleStatus(id))}
                            >
                                { toggle.label }
                            </button>
                        },
                        None => html! {},
                    }
                }
                {
                    if R::can_edit() {
                        html! {
                            <button class="btn small" onclick={link.callback(move |_| Msg::OpenEdit(id))}>
                                {"Edit"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="btn small danger" onclick={link.callback(move |_| Msg::AskDelete(id))}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

fn build_pagination<R: ManagedResource>(
    mgr: &ResourceManager<R>,
    link: &Scope<ResourceManager<R>>,
) -> Html {
    let pages = mgr.page_count();
    if pages <= 1 {
        return html! {};
    }
    let page = mgr.page.min(pages - 1);
    let prev = page.saturating_sub(1);
    let next = (page + 1).min(pages - 1);
    html! {
        <div class="pagination">
            <button
                class="btn small"
                disabled={page == 0}
                onclick={link.callback(move |_| Msg::SetPage(prev))}
            >
                {"Previous"}
            </button>
            <span class="muted">{ format!("Page {} of {}", page + 1, pages) }</span>
            <button
                class="btn small"
                disabled={page + 1 >= pages}
                onclick={link.callback(move |_| Msg::SetPage(next))}
            >
                {"Next"}
            </button>
        </div>
    }
}

fn build_form<R: ManagedResource>(form: &FormState<R>, link: &Scope<ResourceManager<R>>) -> Html {
    let heading = match form.origin {
        None => format!("New {}", R::name()),
        Some(_) => format!("Edit {}", R::name()),
    };
    let handle = FormHandle { link: link.clone() };
    html! {
        <div class="overlay">
            <div class="dialog">
                <div class="dialog-head">
                    <h2>
                        { heading }
                        {
                            if form.dirty() {
                                html! { <span class="dirty-dot" title="Unsaved changes" /> }
                            } else {
                                html! {}
                            }
                        }
                    </h2>
                    <button class="btn icon" onclick={link.callback(|_| Msg::RequestClose)}>{"✕"}</button>
                </div>
                <div class="dialog-body">
                    { R::form(&form.draft, &form.field_errors, &handle) }
                </div>
                {
                    match &form.error {
                        Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                        None => html! {},
                    }
                }
                <div class="dialog-foot">
                    <button class="btn" onclick={link.callback(|_| Msg::RequestClose)}>{"Cancel"}</button>
                    <button
                        class="btn primary"
                        disabled={form.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if form.submitting { "Saving…" } else { "Save" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn build_delete_confirm<R: ManagedResource>(
    mgr: &ResourceManager<R>,
    link: &Scope<ResourceManager<R>>,
) -> Html {
    if mgr.pending_delete.is_none() {
        return html! {};
    }
    html! {
        <div class="overlay">
            <div class="dialog narrow">
                <div class="dialog-head">
                    <h2>{ format!("Delete {}?", R::name().to_lowercase()) }</h2>
                </div>
                <div class="dialog-body">
                    <p>{ "This cannot be undone." }</p>
                </div>
                <div class="dialog-foot">
                    <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
                    <button
                        class="btn danger"
                        disabled={mgr.deleting}
                        onclick={link.callback(|_| Msg::ConfirmDelete)}
                    >
                        { if mgr.deleting { "Deleting…" } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
