//! Public contact form. Validation runs locally before any network call;
//! a successful submission clears the form and thanks the sender.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::requests::ContactRequest;

use crate::api::{self, ApiError};
use crate::components::manager::{text_field, textarea_field};
use crate::components::toast::show_toast;
use crate::forms;

#[derive(Default)]
pub struct ContactPage {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    error: Option<String>,
    sending: bool,
}

pub enum Msg {
    Name(String),
    Email(String),
    Phone(String),
    Subject(String),
    Message(String),
    Submit,
    Sent(Result<(), ApiError>),
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Name(v) => {
                self.name = v;
                false
            }
            Msg::Email(v) => {
                self.email = v;
                false
            }
            Msg::Phone(v) => {
                self.phone = v;
                false
            }
            Msg::Subject(v) => {
                self.subject = v;
                false
            }
            Msg::Message(v) => {
                self.message = v;
                false
            }
            Msg::Submit => {
                if self.sending {
                    return false;
                }
                if let Err(message) = self.validate() {
                    self.error = Some(message);
                    return true;
                }
                self.error = None;
                self.sending = true;
                let request = ContactRequest {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    phone: Some(self.phone.trim().to_string()).filter(|p| !p.is_empty()),
                    subject: self.subject.trim().to_string(),
                    message: self.message.trim().to_string(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Sent(api::post_ok("contacts", &request).await));
                });
                true
            }
            Msg::Sent(Ok(())) => {
                self.sending = false;
                *self = Self::default();
                show_toast("Thank you — we will be in touch shortly.");
                true
            }
            Msg::Sent(Err(err)) => {
                self.sending = false;
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="contact-page">
                <h1>{"Contact Us"}</h1>
                <div class="form">
                    { text_field("Name", &self.name, link.callback(Msg::Name)) }
                    { text_field("Email", &self.email, link.callback(Msg::Email)) }
                    { text_field("Phone", &self.phone, link.callback(Msg::Phone)) }
                    { text_field("Subject", &self.subject, link.callback(Msg::Subject)) }
                    { textarea_field("Message", &self.message, 6, link.callback(Msg::Message)) }
                    {
                        match &self.error {
                            Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                            None => html! {},
                        }
                    }
                    <button
                        class="btn primary"
                        disabled={self.sending}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.sending { "Sending…" } else { "Send message" } }
                    </button>
                </div>
            </div>
        }
    }
}

impl ContactPage {
    fn validate(&self) -> Result<(), String> {
        forms::required("Name", &self.name)?;
        forms::required("Email", &self.email)?;
        if !forms::valid_email(&self.email) {
            return Err("Email must be a valid address".to_string());
        }
        forms::required("Subject", &self.subject)?;
        forms::required("Message", &self.message)
    }
}
