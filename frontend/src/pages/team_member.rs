//! Public attorney profile page, fetched by slug.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::team::TeamMember;

use crate::api::{self, ApiError};
use crate::components::rich_text::rich_text;
use crate::config;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub slug: String,
}

pub enum Phase {
    Loading,
    NotFound,
    Ready(TeamMember),
}

pub struct TeamMemberPage {
    phase: Phase,
}

pub enum Msg {
    Loaded(Result<TeamMember, ApiError>),
}

impl Component for TeamMemberPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            phase: Phase::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(member)) => {
                self.phase = Phase::Ready(member);
                true
            }
            Msg::Loaded(Err(_)) => {
                self.phase = Phase::NotFound;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.phase {
            Phase::Loading => html! { <p class="muted">{"Loading…"}</p> },
            Phase::NotFound => html! {
                <div class="not-found">
                    <h1>{"Profile Not Found"}</h1>
                    <Link<Route> classes="btn" to={Route::About}>{"Meet the team"}</Link<Route>>
                </div>
            },
            Phase::Ready(member) => html! {
                <article class="member-profile">
                    {
                        match &member.photo {
                            Some(path) => html! { <img class="portrait" src={config::asset_url(path)} alt={member.name.clone()} /> },
                            None => html! {},
                        }
                    }
                    <h1>{ member.name.clone() }</h1>
                    <p class="muted">{ member.position.clone() }</p>
                    { rich_text(&member.bio) }
                    {
                        if member.education.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <>
                                    <h2>{"Education"}</h2>
                                    <ul>
                                        { for member.education.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
                                    </ul>
                                </>
                            }
                        }
                    }
                    <div class="member-contact">
                        {
                            match &member.email {
                                Some(email) => html! { <p>{ email.clone() }</p> },
                                None => html! {},
                            }
                        }
                        {
                            match &member.phone {
                                Some(phone) => html! { <p>{ phone.clone() }</p> },
                                None => html! {},
                            }
                        }
                    </div>
                </article>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let slug = ctx.props().slug.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(
                    api::get::<TeamMember>(&format!("team-members/{slug}")).await,
                ));
            });
        }
    }
}
