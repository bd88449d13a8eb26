//! Email-settings editor: the SMTP configuration behind booking and
//! contact notifications, edited as a single record.

use std::rc::Rc;

use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::model::settings::EmailSettings;

use crate::api::{self, ApiError};
use crate::components::manager::text_field;
use crate::components::toast::show_toast;
use crate::forms;

#[derive(Clone, PartialEq, Default)]
pub struct EmailDraft {
    pub smtp_host: String,
    pub smtp_port: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_name: String,
    pub from_email: String,
}

impl EmailDraft {
    fn from_record(settings: &EmailSettings) -> Self {
        Self {
            smtp_host: settings.smtp_host.clone(),
            smtp_port: settings.smtp_port.to_string(),
            smtp_username: settings.smtp_username.clone(),
            smtp_password: settings.smtp_password.clone(),
            from_name: settings.from_name.clone(),
            from_email: settings.from_email.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        forms::required("SMTP host", &self.smtp_host)?;
        self.port()?;
        forms::required("From name", &self.from_name)?;
        forms::required("From email", &self.from_email)?;
        if !forms::valid_email(&self.from_email) {
            return Err("From email must be a valid address".to_string());
        }
        Ok(())
    }

    fn port(&self) -> Result<u16, String> {
        self.smtp_port
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|port| *port > 0)
            .ok_or_else(|| "SMTP port must be a number between 1 and 65535".to_string())
    }

    fn body(&self) -> Result<serde_json::Value, String> {
        Ok(json!({
            "smtp_host": self.smtp_host.trim(),
            "smtp_port": self.port()?,
            "smtp_username": self.smtp_username.trim(),
            "smtp_password": self.smtp_password,
            "from_name": self.from_name.trim(),
            "from_email": self.from_email.trim(),
        }))
    }
}

pub struct EmailSettingsEditor {
    draft: EmailDraft,
    loading: bool,
    saving: bool,
    error: Option<String>,
}

pub enum Msg {
    Loaded(Result<EmailSettings, ApiError>),
    Edit(Rc<dyn Fn(&mut EmailDraft)>),
    Submit,
    Saved(Result<(), ApiError>),
}

impl Component for EmailSettingsEditor {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: EmailDraft::default(),
            loading: true,
            saving: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(settings)) => {
                self.loading = false;
                self.draft = EmailDraft::from_record(&settings);
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                show_toast(&err.to_string());
                true
            }
            Msg::Edit(set) => {
                set(&mut self.draft);
                true
            }
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                let body = match self.draft.validate().and_then(|_| self.draft.body()) {
                    Ok(body) => body,
                    Err(message) => {
                        self.error = Some(message);
                        return true;
                    }
                };
                self.error = None;
                self.saving = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Saved(
                        api::post_ok("email-settings/update", &body).await,
                    ));
                });
                true
            }
            Msg::Saved(Ok(())) => {
                self.saving = false;
                show_toast("Email settings saved");
                true
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="muted">{"Loading…"}</p> };
        }
        let link = ctx.link();
        html! {
            <div class="settings-page">
                <h1>{"Email Settings"}</h1>
                <div class="form">
                    { text_field("SMTP host", &self.draft.smtp_host, setter(link, |d, v| d.smtp_host = v)) }
                    { text_field("SMTP port", &self.draft.smtp_port, setter(link, |d, v| d.smtp_port = v)) }
                    { text_field("SMTP username", &self.draft.smtp_username, setter(link, |d, v| d.smtp_username = v)) }
                    { password_field("SMTP password", &self.draft.smtp_password, setter(link, |d, v| d.smtp_password = v)) }
                    { text_field("From name", &self.draft.from_name, setter(link, |d, v| d.from_name = v)) }
                    { text_field("From email", &self.draft.from_email, setter(link, |d, v| d.from_email = v)) }
                    {
                        match &self.error {
                            Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                            None => html! {},
                        }
                    }
                    <button
                        class="btn primary"
                        disabled={self.saving}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.saving { "Saving…" } else { "Save settings" } }
                    </button>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::get::<EmailSettings>("email-settings").await));
            });
        }
    }
}

fn setter(
    link: &Scope<EmailSettingsEditor>,
    set: impl Fn(&mut EmailDraft, String) + 'static,
) -> Callback<String> {
    let link = link.clone();
    let set = Rc::new(set);
    Callback::from(move |value: String| {
        let set = set.clone();
        link.send_message(Msg::Edit(Rc::new(move |draft: &mut EmailDraft| {
            set(draft, value.clone())
        })));
    })
}

fn password_field(label: &'static str, value: &str, onchange: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        onchange.emit(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
    });
    html! {
        <div class="field">
            <label>{ label }</label>
            <input type="password" value={value.to_string()} {oninput} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmailSettings {
        EmailSettings {
            id: 1,
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "mailer".to_string(),
            smtp_password: "secret".to_string(),
            from_name: "Sterling & Vale".to_string(),
            from_email: "no-reply@example.com".to_string(),
        }
    }

    #[test]
    fn draft_round_trips_record_fields() {
        let body = EmailDraft::from_record(&sample()).body().unwrap();
        assert_eq!(body["smtp_host"], "smtp.example.com");
        assert_eq!(body["smtp_port"], 587);
        assert_eq!(body["from_email"], "no-reply@example.com");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let mut draft = EmailDraft::from_record(&sample());
        draft.smtp_port = "smtp".to_string();
        assert!(draft.validate().is_err());
        draft.smtp_port = "0".to_string();
        assert!(draft.validate().is_err());
        draft.smtp_port = "2525".to_string();
        assert!(draft.validate().is_ok());
    }
}
