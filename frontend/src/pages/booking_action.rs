//! Emailed booking-action flows: accept, cancel, reschedule.
//!
//! The route carries the appointment identifier and the action verb; the
//! identifier is the only access control (a gap owned by the API, not
//! masked here). Any failure to resolve the appointment renders the
//! dedicated not-found screen with a link home. A successful reschedule
//! shows its confirmation and then redirects home after a fixed delay.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::booking::Booking;
use common::requests::RescheduleRequest;

use crate::api::{self, ApiError};
use crate::components::toast::show_toast;
use crate::forms;
use crate::routes::Route;

/// Action verb encoded in the emailed link's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Accept,
    Cancel,
    Reschedule,
}

impl Verb {
    pub fn parse(value: &str) -> Option<Verb> {
        match value {
            "accept" => Some(Verb::Accept),
            "cancel" => Some(Verb::Cancel),
            "reschedule" => Some(Verb::Reschedule),
            _ => None,
        }
    }

    pub fn segment(self) -> &'static str {
        match self {
            Verb::Accept => "accept",
            Verb::Cancel => "cancel",
            Verb::Reschedule => "reschedule",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Verb::Accept => "Appointment Confirmed",
            Verb::Cancel => "Appointment Cancelled",
            Verb::Reschedule => "Reschedule Appointment",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Verb::Accept => "Thank you — this appointment is confirmed.",
            Verb::Cancel => "This appointment has been cancelled.",
            Verb::Reschedule => "Pick a new date and time for this appointment.",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub action: String,
    pub id: u64,
}

pub enum Phase {
    Loading,
    NotFound,
    Ready(Booking),
    Rescheduled,
}

pub struct BookingActionPage {
    verb: Option<Verb>,
    phase: Phase,
    date: String,
    time: String,
    error: Option<String>,
    busy: bool,
}

pub enum Msg {
    Loaded(Result<Booking, ApiError>),
    Date(String),
    Time(String),
    Submit,
    Submitted(Result<(), ApiError>),
    GoHome,
}

impl Component for BookingActionPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let verb = Verb::parse(&ctx.props().action);
        Self {
            verb,
            // An unknown verb is a dead link; treat it as not found.
            phase: match verb {
                Some(_) => Phase::Loading,
                None => Phase::NotFound,
            },
            date: String::new(),
            time: String::new(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(booking)) => {
                self.date = booking.date.clone();
                self.time = booking.time.clone();
                self.phase = Phase::Ready(booking);
                true
            }
            Msg::Loaded(Err(_)) => {
                self.phase = Phase::NotFound;
                true
            }
            Msg::Date(v) => {
                self.date = v;
                false
            }
            Msg::Time(v) => {
                self.time = v;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if forms::required("Date", &self.date).is_err()
                    || forms::required("Time", &self.time).is_err()
                {
                    self.error = Some("Pick both a date and a time".to_string());
                    return true;
                }
                self.error = None;
                self.busy = true;
                let body = RescheduleRequest {
                    date: self.date.trim().to_string(),
                    time: self.time.trim().to_string(),
                };
                let path = format!("appointments/reschedule/{}", ctx.props().id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(api::post_ok(&path, &body).await));
                });
                true
            }
            Msg::Submitted(Ok(())) => {
                self.busy = false;
                self.phase = Phase::Rescheduled;
                show_toast("Appointment rescheduled.");
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    link.send_message(Msg::GoHome);
                });
                true
            }
            Msg::Submitted(Err(err)) => {
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::GoHome => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(verb) = self.verb else {
            return build_not_found();
        };
        match &self.phase {
            Phase::Loading => html! { <p class="muted">{"Loading…"}</p> },
            Phase::NotFound => build_not_found(),
            Phase::Rescheduled => html! {
                <div class="booking-card">
                    <h1>{"Appointment Rescheduled"}</h1>
                    <p>{"We have updated your appointment. Taking you back home…"}</p>
                </div>
            },
            Phase::Ready(booking) => html! {
                <div class="booking-card">
                    <h1>{ verb.heading() }</h1>
                    <p>{ verb.blurb() }</p>
                    { build_details(booking) }
                    {
                        if verb == Verb::Reschedule {
                            self.build_reschedule_form(ctx)
                        } else {
                            html! {
                                <Link<Route> classes="btn" to={Route::Home}>{"Back to home"}</Link<Route>>
                            }
                        }
                    }
                </div>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(verb) = self.verb {
                let path = format!("appointments/{}/{}", verb.segment(), ctx.props().id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api::get::<Booking>(&path).await));
                });
            }
        }
    }
}

impl BookingActionPage {
    fn build_reschedule_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="form">
                <div class="field">
                    <label>{"New date"}</label>
                    <input
                        type="date"
                        value={self.date.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Date(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div class="field">
                    <label>{"New time"}</label>
                    <input
                        type="time"
                        value={self.time.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Time(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
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
                    { if self.busy { "Saving…" } else { "Reschedule" } }
                </button>
            </div>
        }
    }
}

fn build_details(booking: &Booking) -> Html {
    html! {
        <dl class="booking-details">
            <dt>{"Client"}</dt>
            <dd>{ booking.client_name.clone() }</dd>
            <dt>{"Date"}</dt>
            <dd>{ booking.date.clone() }</dd>
            <dt>{"Time"}</dt>
            <dd>{ booking.time.clone() }</dd>
            <dt>{"Status"}</dt>
            <dd>{ booking.status.label() }</dd>
        </dl>
    }
}

fn build_not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Appointment Not Found"}</h1>
            <p>{"This link is no longer valid, or the appointment does not exist."}</p>
            <Link<Route> classes="btn" to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Verb;

    #[test]
    fn verbs_parse_from_path_segments() {
        assert_eq!(Verb::parse("accept"), Some(Verb::Accept));
        assert_eq!(Verb::parse("cancel"), Some(Verb::Cancel));
        assert_eq!(Verb::parse("reschedule"), Some(Verb::Reschedule));
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert_eq!(Verb::parse("confirm"), None);
        assert_eq!(Verb::parse(""), None);
        assert_eq!(Verb::parse("Accept"), None);
    }
}
