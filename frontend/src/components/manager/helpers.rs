//! Form field builders shared by every resource form body and by the
//! singleton settings editors. The text-ish builders are plain functions
//! over a `Callback<String>`; the sub-list and attachment builders are
//! generic over the resource so their events can carry typed accessors
//! back into the manager's update loop.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{FormHandle, ManagedResource, Msg, Rows, Setter, Slot};
use crate::forms::{Attachment, UploadKind};

pub fn text_field(label: &'static str, value: &str, onchange: Callback<String>) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input type="text" value={value.to_string()} oninput={forward_input(onchange)} />
        </div>
    }
}

pub fn textarea_field(
    label: &'static str,
    value: &str,
    rows: u32,
    onchange: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        onchange.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    html! {
        <div class="field">
            <label>{ label }</label>
            <textarea value={value.to_string()} rows={rows.to_string()} {oninput} />
        </div>
    }
}

pub fn select_field(
    label: &'static str,
    options: &[(&'static str, &'static str)],
    value: &str,
    onchange: Callback<String>,
) -> Html {
    let on_select = Callback::from(move |e: Event| {
        onchange.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    html! {
        <div class="field">
            <label>{ label }</label>
            <select onchange={on_select}>
                {
                    for options.iter().map(|(option_value, text)| {
                        html! {
                            <option value={*option_value} selected={value == *option_value}>
                                { *text }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}

/// Editable sub-list: one input per slot, remove buttons that refuse to
/// empty the list, and an add button. Empty slots survive here and are
/// pruned at submit time.
pub fn rows_field<R: ManagedResource>(
    handle: &FormHandle<R>,
    label: &'static str,
    rows: &[String],
    access: Rows<R>,
) -> Html {
    let link = handle.scope().clone();
    let single = rows.len() == 1;
    let slots = rows
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let edit = {
                let link = link.clone();
                let access = access.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    link.send_message(Msg::RowEdit(access.clone(), index, value));
                })
            };
            let remove = {
                let link = link.clone();
                let access = access.clone();
                Callback::from(move |_| link.send_message(Msg::RowRemove(access.clone(), index)))
            };
            html! {
                <div class="row-slot">
                    <input type="text" value={slot.clone()} oninput={edit} />
                    <button class="btn small" type="button" disabled={single} onclick={remove}>
                        {"−"}
                    </button>
                </div>
            }
        })
        .collect::<Html>();

    let add = {
        let link = link.clone();
        let access = access.clone();
        Callback::from(move |_| link.send_message(Msg::RowAdd(access.clone())))
    };
    html! {
        <div class="field">
            <label>{ label }</label>
            { slots }
            <button class="btn small" type="button" onclick={add}>{ format!("Add {}", label.to_lowercase()) }</button>
        </div>
    }
}

/// File field rendering the attachment tri-state: nothing, the resource's
/// existing upload, or the freshly chosen replacement with its local
/// preview. Removal goes through the explicit `on_remove` edit so the
/// server file is only ever cleared on purpose.
pub fn attachment_field<R: ManagedResource>(
    handle: &FormHandle<R>,
    label: &'static str,
    kind: UploadKind,
    value: &Attachment,
    slot: Slot<R>,
    on_remove: Setter<R>,
    error: Option<&String>,
) -> Html {
    let link = handle.scope().clone();
    let choose = {
        let link = link.clone();
        let slot = slot.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                link.send_message(Msg::FileChosen {
                    kind,
                    label,
                    slot: slot.clone(),
                    file,
                });
            }
        })
    };
    let remove = {
        let link = link.clone();
        let on_remove = on_remove.clone();
        Callback::from(move |_| link.send_message(Msg::Patch(on_remove.clone())))
    };

    let preview = match (kind, value.view_url(), value.file_name()) {
        (UploadKind::Image, Some(url), _) => html! { <img class="thumb" src={url} alt={label} /> },
        (_, _, Some(name)) => html! { <span class="file-chip">{ name }</span> },
        _ => html! {},
    };

    html! {
        <div class="field">
            <label>{ label }</label>
            { preview }
            <input type="file" accept={kind.accept()} onchange={choose} />
            {
                if value.is_set() {
                    html! { <button class="btn small" type="button" onclick={remove}>{"Remove"}</button> }
                } else {
                    html! {}
                }
            }
            {
                match error {
                    Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn forward_input(onchange: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        onchange.emit(e.target_unchecked_into::<HtmlInputElement>().value())
    })
}
