//! Site-settings editor. Settings are a single record, so this page shares
//! the draft/payload machinery with the resource managers but skips the
//! list chrome: fetch once, edit the draft, POST the singleton update path.

use std::rc::Rc;

use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::model::settings::SiteSettings;

use crate::api::{self, ApiError};
use crate::components::manager::{text_field, textarea_field};
use crate::components::toast::show_toast;
use crate::forms::{self, Attachment, LocalFile, UploadKind};

#[derive(Clone, PartialEq, Default)]
pub struct SettingsDraft {
    pub site_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub facebook: String,
    pub linkedin: String,
    pub twitter: String,
    pub footer_text: String,
    pub logo: Attachment,
    pub remove_logo: bool,
}

impl SettingsDraft {
    fn from_record(settings: &SiteSettings) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            tagline: settings.tagline.clone(),
            email: settings.email.clone(),
            phone: settings.phone.clone(),
            address: settings.address.clone(),
            facebook: settings.facebook.clone().unwrap_or_default(),
            linkedin: settings.linkedin.clone().unwrap_or_default(),
            twitter: settings.twitter.clone().unwrap_or_default(),
            footer_text: settings.footer_text.clone(),
            logo: Attachment::from_path(&settings.logo),
            remove_logo: false,
        }
    }

    fn validate(&self) -> Result<(), String> {
        forms::required("Site name", &self.site_name)?;
        forms::required("Email", &self.email)?;
        if !forms::valid_email(&self.email) {
            return Err("Email must be a valid address".to_string());
        }
        forms::required("Phone", &self.phone)
    }

    fn body(&self) -> serde_json::Value {
        let mut body = json!({
            "site_name": self.site_name.trim(),
            "tagline": self.tagline.trim(),
            "email": self.email.trim(),
            "phone": self.phone.trim(),
            "address": self.address.trim(),
            "facebook": self.facebook.trim(),
            "linkedin": self.linkedin.trim(),
            "twitter": self.twitter.trim(),
            "footer_text": self.footer_text.trim(),
        });
        if self.remove_logo {
            body["remove_logo"] = json!(true);
        }
        body
    }
}

pub struct SettingsEditor {
    draft: SettingsDraft,
    loading: bool,
    saving: bool,
    error: Option<String>,
    logo_error: Option<String>,
}

pub enum Msg {
    Loaded(Result<SiteSettings, ApiError>),
    Edit(Rc<dyn Fn(&mut SettingsDraft)>),
    LogoChosen(web_sys::File),
    LogoPreview(String),
    RemoveLogo,
    Submit,
    Saved(Result<(), ApiError>),
}

impl Component for SettingsEditor {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: SettingsDraft::default(),
            loading: true,
            saving: false,
            error: None,
            logo_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(settings)) => {
                self.loading = false;
                self.draft = SettingsDraft::from_record(&settings);
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
            Msg::LogoChosen(file) => {
                let mime = file.type_();
                let size = file.size() as u64;
                match UploadKind::Image.check(&mime, size) {
                    Err(message) => self.logo_error = Some(message),
                    Ok(()) => {
                        self.logo_error = None;
                        self.draft.logo = Attachment::Replacement(LocalFile {
                            file: file.clone(),
                            name: file.name(),
                            mime: mime.clone(),
                            size,
                            preview: None,
                        });
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let blob = gloo_file::Blob::from(file);
                            if let Ok(bytes) = gloo_file::futures::read_as_bytes(&blob).await {
                                link.send_message(Msg::LogoPreview(forms::data_url(&mime, &bytes)));
                            }
                        });
                    }
                }
                true
            }
            Msg::LogoPreview(preview) => {
                if let Attachment::Replacement(local) = &mut self.draft.logo {
                    local.preview = Some(preview);
                    return true;
                }
                false
            }
            Msg::RemoveLogo => {
                self.draft.logo = Attachment::Unset;
                self.draft.remove_logo = true;
                true
            }
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                if let Err(message) = self.draft.validate() {
                    self.error = Some(message);
                    return true;
                }
                self.error = None;
                self.saving = true;
                let payload =
                    forms::payload(self.draft.body(), vec![("logo", self.draft.logo.upload())]);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Saved(
                        api::send_payload("settings/update", payload).await,
                    ));
                });
                true
            }
            Msg::Saved(Ok(())) => {
                self.saving = false;
                show_toast("Settings saved");
                load(ctx.link());
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
                <h1>{"Site Settings"}</h1>
                <div class="form">
                    { text_field("Site name", &self.draft.site_name, setter(link, |d, v| d.site_name = v)) }
                    { text_field("Tagline", &self.draft.tagline, setter(link, |d, v| d.tagline = v)) }
                    { text_field("Email", &self.draft.email, setter(link, |d, v| d.email = v)) }
                    { text_field("Phone", &self.draft.phone, setter(link, |d, v| d.phone = v)) }
                    { textarea_field("Address", &self.draft.address, 3, setter(link, |d, v| d.address = v)) }
                    { text_field("Facebook", &self.draft.facebook, setter(link, |d, v| d.facebook = v)) }
                    { text_field("LinkedIn", &self.draft.linkedin, setter(link, |d, v| d.linkedin = v)) }
                    { text_field("Twitter", &self.draft.twitter, setter(link, |d, v| d.twitter = v)) }
                    { textarea_field("Footer text", &self.draft.footer_text, 2, setter(link, |d, v| d.footer_text = v)) }
                    { self.build_logo_field(ctx) }
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
            load(ctx.link());
        }
    }
}

impl SettingsEditor {
    fn build_logo_field(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let choose = link.batch_callback(|e: Event| {
            let input = e.target_unchecked_into::<web_sys::HtmlInputElement>();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::LogoChosen)
        });
        html! {
            <div class="field">
                <label>{"Logo"}</label>
                {
                    match self.draft.logo.view_url() {
                        Some(url) => html! { <img class="thumb" src={url} alt="Logo" /> },
                        None => html! {},
                    }
                }
                <input type="file" accept={UploadKind::Image.accept()} onchange={choose} />
                {
                    if self.draft.logo.is_set() {
                        html! {
                            <button class="btn small" type="button" onclick={link.callback(|_| Msg::RemoveLogo)}>
                                {"Remove"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    match &self.logo_error {
                        Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
        }
    }
}

fn load(link: &Scope<SettingsEditor>) {
    let link = link.clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(api::get::<SiteSettings>("settings").await));
    });
}

fn setter(
    link: &Scope<SettingsEditor>,
    set: impl Fn(&mut SettingsDraft, String) + 'static,
) -> Callback<String> {
    let link = link.clone();
    let set = Rc::new(set);
    Callback::from(move |value: String| {
        let set = set.clone();
        link.send_message(Msg::Edit(Rc::new(move |draft: &mut SettingsDraft| {
            set(draft, value.clone())
        })));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteSettings {
        SiteSettings {
            id: 1,
            site_name: "Sterling & Vale".to_string(),
            tagline: "Counsel you can trust".to_string(),
            email: "office@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            address: "12 Harbor Street".to_string(),
            facebook: None,
            linkedin: Some("https://linkedin.com/company/sv".to_string()),
            twitter: None,
            footer_text: "© Sterling & Vale".to_string(),
            logo: Some("uploads/logo.png".to_string()),
        }
    }

    #[test]
    fn draft_round_trips_record_fields() {
        let draft = SettingsDraft::from_record(&sample());
        let body = draft.body();
        assert_eq!(body["site_name"], "Sterling & Vale");
        assert_eq!(body["linkedin"], "https://linkedin.com/company/sv");
        assert_eq!(body["facebook"], "");
        assert!(body.get("remove_logo").is_none());
        assert_eq!(draft.logo, Attachment::Existing("uploads/logo.png".to_string()));
    }

    #[test]
    fn explicit_logo_removal_sets_the_flag() {
        let mut draft = SettingsDraft::from_record(&sample());
        draft.logo = Attachment::Unset;
        draft.remove_logo = true;
        assert_eq!(draft.body()["remove_logo"], json!(true));
    }

    #[test]
    fn validation_requires_contact_details() {
        assert!(SettingsDraft::default().validate().is_err());
        assert!(SettingsDraft::from_record(&sample()).validate().is_ok());
    }
}
