//! Password-reset wizard: three linear steps sequenced by server-issued
//! tokens — request a code by email, verify it, set the new password.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::requests::{ForgotPasswordRequest, ResetPasswordRequest, ResetToken, VerifyCodeRequest};

use crate::api::{self, ApiError};
use crate::components::manager::text_field;
use crate::forms;
use crate::routes::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Email,
    Code,
    Password,
    Done,
}

pub struct ForgotPasswordPage {
    step: Step,
    email: String,
    code: String,
    token: String,
    password: String,
    confirm: String,
    error: Option<String>,
    busy: bool,
}

pub enum Msg {
    Email(String),
    Code(String),
    Password(String),
    Confirm(String),
    Submit,
    CodeRequested(Result<(), ApiError>),
    CodeVerified(Result<ResetToken, ApiError>),
    PasswordSet(Result<(), ApiError>),
}

impl Component for ForgotPasswordPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            step: Step::Email,
            email: String::new(),
            code: String::new(),
            token: String::new(),
            password: String::new(),
            confirm: String::new(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Email(v) => {
                self.email = v;
                false
            }
            Msg::Code(v) => {
                self.code = v;
                false
            }
            Msg::Password(v) => {
                self.password = v;
                false
            }
            Msg::Confirm(v) => {
                self.confirm = v;
                false
            }
            Msg::Submit => self.submit(ctx),
            Msg::CodeRequested(Ok(())) => {
                self.busy = false;
                self.error = None;
                self.step = Step::Code;
                true
            }
            Msg::CodeVerified(Ok(token)) => {
                self.busy = false;
                self.error = None;
                self.token = token.token;
                self.step = Step::Password;
                true
            }
            Msg::PasswordSet(Ok(())) => {
                self.busy = false;
                self.error = None;
                self.step = Step::Done;
                true
            }
            Msg::CodeRequested(Err(err))
            | Msg::PasswordSet(Err(err)) => {
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::CodeVerified(Err(err)) => {
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="auth-page">
                <div class="auth-card">
                    <h1>{"Reset Password"}</h1>
                    { self.build_step(ctx) }
                    {
                        match &self.error {
                            Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                            None => html! {},
                        }
                    }
                    {
                        if self.step == Step::Done {
                            html! {}
                        } else {
                            html! {
                                <button
                                    class="btn primary"
                                    disabled={self.busy}
                                    onclick={link.callback(|_| Msg::Submit)}
                                >
                                    { if self.busy { "Please wait…" } else { self.submit_label() } }
                                </button>
                            }
                        }
                    }
                    <Link<Route> classes="muted" to={Route::Login}>{"Back to login"}</Link<Route>>
                </div>
            </div>
        }
    }
}

impl ForgotPasswordPage {
    fn submit_label(&self) -> &'static str {
        match self.step {
            Step::Email => "Send reset code",
            Step::Code => "Verify code",
            Step::Password => "Set new password",
            Step::Done => "",
        }
    }

    fn build_step(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.step {
            Step::Email => html! {
                <>
                    <p class="muted">{"Enter your account email and we will send a reset code."}</p>
                    { text_field("Email", &self.email, link.callback(Msg::Email)) }
                </>
            },
            Step::Code => html! {
                <>
                    <p class="muted">{ format!("We sent a code to {}.", self.email.trim()) }</p>
                    { text_field("Code", &self.code, link.callback(Msg::Code)) }
                </>
            },
            Step::Password => html! {
                <>
                    { password_field("New password", &self.password, link.callback(Msg::Password)) }
                    { password_field("Confirm password", &self.confirm, link.callback(Msg::Confirm)) }
                </>
            },
            Step::Done => html! {
                <p>{"Your password has been updated. You can sign in with it now."}</p>
            },
        }
    }

    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.busy {
            return false;
        }
        match self.step {
            Step::Email => {
                if !forms::valid_email(&self.email) {
                    self.error = Some("Email must be a valid address".to_string());
                    return true;
                }
                self.start(ctx, StepRequest::Code);
            }
            Step::Code => {
                if let Err(message) = forms::required("Code", &self.code) {
                    self.error = Some(message);
                    return true;
                }
                self.start(ctx, StepRequest::Verify);
            }
            Step::Password => {
                if self.password.len() < 8 {
                    self.error = Some("Password must be at least 8 characters".to_string());
                    return true;
                }
                if self.password != self.confirm {
                    self.error = Some("Passwords do not match".to_string());
                    return true;
                }
                self.start(ctx, StepRequest::Reset);
            }
            Step::Done => return false,
        }
        true
    }

    fn start(&mut self, ctx: &Context<Self>, request: StepRequest) {
        self.error = None;
        self.busy = true;
        let link = ctx.link().clone();
        match request {
            StepRequest::Code => {
                let body = ForgotPasswordRequest {
                    email: self.email.trim().to_string(),
                };
                spawn_local(async move {
                    link.send_message(Msg::CodeRequested(
                        api::post_ok("auth/forgot-password", &body).await,
                    ));
                });
            }
            StepRequest::Verify => {
                let body = VerifyCodeRequest {
                    email: self.email.trim().to_string(),
                    code: self.code.trim().to_string(),
                };
                spawn_local(async move {
                    link.send_message(Msg::CodeVerified(
                        api::post::<ResetToken, _>("auth/verify-code", &body).await,
                    ));
                });
            }
            StepRequest::Reset => {
                let body = ResetPasswordRequest {
                    token: self.token.clone(),
                    password: self.password.clone(),
                };
                spawn_local(async move {
                    link.send_message(Msg::PasswordSet(
                        api::post_ok("auth/reset-password", &body).await,
                    ));
                });
            }
        }
    }
}

enum StepRequest {
    Code,
    Verify,
    Reset,
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
