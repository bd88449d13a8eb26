//! Back-office login. A successful login stores the session and moves to
//! the admin dashboard; failures stay on the form with an inline message.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::requests::{LoginData, LoginRequest};

use crate::api::{self, ApiError};
use crate::components::manager::text_field;
use crate::forms;
use crate::routes::Route;
use crate::session::{self, Session};

#[derive(Default)]
pub struct LoginPage {
    email: String,
    password: String,
    error: Option<String>,
    busy: bool,
}

pub enum Msg {
    Email(String),
    Password(String),
    Submit,
    Done(Result<LoginData, ApiError>),
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Email(v) => {
                self.email = v;
                false
            }
            Msg::Password(v) => {
                self.password = v;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if let Err(message) = self.validate() {
                    self.error = Some(message);
                    return true;
                }
                self.error = None;
                self.busy = true;
                let request = LoginRequest {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Done(
                        api::post::<LoginData, _>("auth/login", &request).await,
                    ));
                });
                true
            }
            Msg::Done(Ok(data)) => {
                self.busy = false;
                session::store(&Session {
                    token: data.token,
                    user: data.user,
                });
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Admin);
                }
                true
            }
            Msg::Done(Err(err)) => {
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
                    <h1>{"Admin Login"}</h1>
                    { text_field("Email", &self.email, link.callback(Msg::Email)) }
                    <div class="field">
                        <label>{"Password"}</label>
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::Password(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    {
                        match &self.error {
                            Some(message) => html! { <p class="form-error">{ message.clone() }</p> },
                            None => html! {},
                        }
                    }
                    <button
                        class="btn primary"
                        disabled={self.busy}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.busy { "Signing in…" } else { "Sign in" } }
                    </button>
                    <Link<Route> classes="muted" to={Route::ForgotPassword}>
                        {"Forgot your password?"}
                    </Link<Route>>
                </div>
            </div>
        }
    }
}

impl LoginPage {
    fn validate(&self) -> Result<(), String> {
        forms::required("Email", &self.email)?;
        if !forms::valid_email(&self.email) {
            return Err("Email must be a valid address".to_string());
        }
        forms::required("Password", &self.password)
    }
}
