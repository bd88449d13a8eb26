//! About-Us page: four tabs over one aggregate payload plus the team grid.
//!
//! The about record and the team list are fetched in parallel and joined —
//! if either fails the page reports a single combined error. Switching a
//! tab navigates (so the `?tab=` query stays shareable), re-fetches the
//! aggregate, and a location listener resyncs the active tab when the user
//! navigates with history buttons.

use futures_util::join;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;

use common::model::about::AboutPage as AboutContent;
use common::model::team::TeamMember;

use crate::api::{self, ApiError};
use crate::components::rich_text::rich_text;
use crate::config;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Mission,
    Vision,
    History,
    Values,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Mission, Tab::Vision, Tab::History, Tab::Values];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Mission => "mission",
            Tab::Vision => "vision",
            Tab::History => "history",
            Tab::Values => "values",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Mission => "Our Mission",
            Tab::Vision => "Our Vision",
            Tab::History => "Our History",
            Tab::Values => "Our Values",
        }
    }

    /// Resolves the active tab from a URL query string; unknown or missing
    /// values fall back to the first tab.
    pub fn from_query(query: &str) -> Tab {
        query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("tab="))
            .and_then(|value| Tab::ALL.into_iter().find(|tab| tab.key() == value))
            .unwrap_or(Tab::Mission)
    }
}

pub struct AboutUsState {
    tab: Tab,
    content: Option<(AboutContent, Vec<TeamMember>)>,
    error: Option<String>,
    loading: bool,
    _listener: Option<LocationHandle>,
}

pub enum Msg {
    Loaded(Result<(AboutContent, Vec<TeamMember>), ApiError>),
    SelectTab(Tab),
    LocationChanged,
}

pub struct AboutPage {
    state: AboutUsState,
}

impl Component for AboutPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let listener = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));
        Self {
            state: AboutUsState {
                tab: current_tab(ctx.link()),
                content: None,
                error: None,
                loading: true,
                _listener: listener,
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(content)) => {
                self.state.loading = false;
                self.state.error = None;
                self.state.content = Some(content);
                true
            }
            Msg::Loaded(Err(err)) => {
                self.state.loading = false;
                self.state.error = Some(err.to_string());
                true
            }
            Msg::SelectTab(tab) => {
                if let Some(navigator) = ctx.link().navigator() {
                    let _ = navigator.push_with_query(&Route::About, &[("tab", tab.key())]);
                }
                self.state.tab = tab;
                // Tab switches re-fetch the aggregate rather than caching it.
                load(ctx.link());
                true
            }
            Msg::LocationChanged => {
                let tab = current_tab(ctx.link());
                if tab != self.state.tab {
                    self.state.tab = tab;
                    load(ctx.link());
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="about-page">
                <h1>{"About Us"}</h1>
                <div class="tab-bar">
                    {
                        for Tab::ALL.into_iter().map(|tab| {
                            let active = tab == self.state.tab;
                            html! {
                                <button
                                    class={classes!("tab-btn", active.then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SelectTab(tab))}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                </div>
                { self.build_body() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load(ctx.link());
        }
    }
}

impl AboutPage {
    fn build_body(&self) -> Html {
        if self.state.loading {
            return html! { <p class="muted">{"Loading…"}</p> };
        }
        if let Some(error) = &self.state.error {
            return html! { <p class="form-error">{ error.clone() }</p> };
        }
        let Some((about, team)) = &self.state.content else {
            return html! {};
        };
        html! {
            <>
                <div class="tab-pane">
                    {
                        match self.state.tab {
                            Tab::Mission => rich_text(&about.mission),
                            Tab::Vision => rich_text(&about.vision),
                            Tab::History => rich_text(&about.history),
                            Tab::Values => html! {
                                <ul class="values">
                                    { for about.values.iter().map(|value| html! { <li>{ value.clone() }</li> }) }
                                </ul>
                            },
                        }
                    }
                </div>
                <section class="team">
                    <h2>{"Our Team"}</h2>
                    <div class="card-grid">
                        { for team.iter().map(build_member_card) }
                    </div>
                </section>
            </>
        }
    }
}

fn current_tab(link: &Scope<AboutPage>) -> Tab {
    link.location()
        .map(|location| Tab::from_query(location.query_str()))
        .unwrap_or(Tab::Mission)
}

/// Parallel fetch of the two independent resources behind this page; both
/// must succeed before anything renders.
fn load(link: &Scope<AboutPage>) {
    let link = link.clone();
    spawn_local(async move {
        let (about, team) = join!(
            api::get::<AboutContent>("about"),
            api::get::<Vec<TeamMember>>("team-members")
        );
        link.send_message(Msg::Loaded(
            about.and_then(|about| team.map(|team| (about, team))),
        ));
    });
}

fn build_member_card(member: &TeamMember) -> Html {
    html! {
        <div class="card member">
            {
                match &member.photo {
                    Some(path) => html! { <img class="portrait" src={config::asset_url(path)} alt={member.name.clone()} /> },
                    None => html! {},
                }
            }
            <h3>{ member.name.clone() }</h3>
            <p class="muted">{ member.position.clone() }</p>
            <Link<Route> to={Route::TeamMemberDetail { slug: member.slug.clone() }}>
                {"View profile"}
            </Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn tab_resolves_from_query_string() {
        assert_eq!(Tab::from_query("?tab=vision"), Tab::Vision);
        assert_eq!(Tab::from_query("tab=history"), Tab::History);
        assert_eq!(Tab::from_query("?foo=1&tab=values"), Tab::Values);
    }

    #[test]
    fn unknown_or_missing_tab_falls_back() {
        assert_eq!(Tab::from_query(""), Tab::Mission);
        assert_eq!(Tab::from_query("?tab=bogus"), Tab::Mission);
        assert_eq!(Tab::from_query("?other=x"), Tab::Mission);
    }
}
