//! Gatekeeper for the admin route tree.
//!
//! A boolean predicate over session state: with a session the protected
//! subtree renders, without one the user is redirected to the public home
//! route. Resolution is synchronous (local storage), so there is no
//! in-between frame. No token refresh, no expiry countdown.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::{self, Gate};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

pub struct AuthGate;

impl Component for AuthGate {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match session::gate(session::load().as_ref()) {
            Gate::Allow => ctx.props().children.clone(),
            Gate::RedirectHome => html! { <Redirect<Route> to={Route::Home} /> },
        }
    }
}
