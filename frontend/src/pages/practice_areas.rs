//! Public practice-area pages: the listing grid and the detail view.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::practice_area::PracticeArea;

use crate::api::{self, ApiError};
use crate::components::rich_text::rich_text;
use crate::components::toast::show_toast;
use crate::config;
use crate::routes::Route;

pub struct PracticeAreasPage {
    areas: Vec<PracticeArea>,
    loading: bool,
}

pub enum ListMsg {
    Loaded(Result<Vec<PracticeArea>, ApiError>),
}

impl Component for PracticeAreasPage {
    type Message = ListMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            areas: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ListMsg::Loaded(Ok(areas)) => {
                self.loading = false;
                self.areas = areas;
                true
            }
            ListMsg::Loaded(Err(err)) => {
                self.loading = false;
                show_toast(&err.to_string());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="areas-page">
                <h1>{"Practice Areas"}</h1>
                {
                    if self.loading {
                        html! { <p class="muted">{"Loading…"}</p> }
                    } else {
                        html! {
                            <div class="card-grid">
                                { for self.areas.iter().map(build_card) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(ListMsg::Loaded(
                    api::get::<Vec<PracticeArea>>("practice-areas").await,
                ));
            });
        }
    }
}

fn build_card(area: &PracticeArea) -> Html {
    html! {
        <div class="card">
            {
                match &area.image {
                    Some(path) => html! { <img src={config::asset_url(path)} alt={area.title.clone()} /> },
                    None => html! {},
                }
            }
            <h3>{ area.title.clone() }</h3>
            <p>{ area.summary.clone() }</p>
            <Link<Route> to={Route::PracticeAreaDetail { slug: area.slug.clone() }}>
                {"Read more"}
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub slug: String,
}

pub enum DetailPhase {
    Loading,
    NotFound,
    Ready(PracticeArea),
}

pub struct PracticeAreaDetailPage {
    phase: DetailPhase,
}

pub enum DetailMsg {
    Loaded(Result<PracticeArea, ApiError>),
}

impl Component for PracticeAreaDetailPage {
    type Message = DetailMsg;
    type Properties = DetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            phase: DetailPhase::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DetailMsg::Loaded(Ok(area)) => {
                self.phase = DetailPhase::Ready(area);
                true
            }
            DetailMsg::Loaded(Err(_)) => {
                self.phase = DetailPhase::NotFound;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.phase {
            DetailPhase::Loading => html! { <p class="muted">{"Loading…"}</p> },
            DetailPhase::NotFound => html! {
                <div class="not-found">
                    <h1>{"Page Not Found"}</h1>
                    <p>{"The practice area you are looking for does not exist."}</p>
                    <Link<Route> classes="btn" to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            },
            DetailPhase::Ready(area) => html! {
                <article class="area-detail">
                    <h1>{ area.title.clone() }</h1>
                    {
                        match &area.image {
                            Some(path) => html! { <img class="banner-image" src={config::asset_url(path)} alt={area.title.clone()} /> },
                            None => html! {},
                        }
                    }
                    { rich_text(&area.content) }
                    {
                        if area.features.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <>
                                    <h2>{"What we offer"}</h2>
                                    <ul>
                                        { for area.features.iter().map(|f| html! { <li>{ f.clone() }</li> }) }
                                    </ul>
                                </>
                            }
                        }
                    }
                </article>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let slug = ctx.props().slug.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(DetailMsg::Loaded(
                    api::get::<PracticeArea>(&format!("practice-areas/{slug}")).await,
                ));
            });
        }
    }
}
