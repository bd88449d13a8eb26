//! Public home page: hero banners plus a practice-area teaser. Banners and
//! areas are fetched independently on mount; each failure surfaces a toast
//! and leaves the section empty.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::banner::{Banner, BannerStatus};
use common::model::practice_area::PracticeArea;

use crate::api::{self, ApiError};
use crate::components::toast::show_toast;
use crate::config;
use crate::routes::Route;

pub struct HomePage {
    banners: Vec<Banner>,
    areas: Vec<PracticeArea>,
}

pub enum Msg {
    Banners(Result<Vec<Banner>, ApiError>),
    Areas(Result<Vec<PracticeArea>, ApiError>),
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            banners: Vec::new(),
            areas: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Banners(Ok(banners)) => {
                self.banners = banners;
                true
            }
            Msg::Areas(Ok(areas)) => {
                self.areas = areas;
                true
            }
            Msg::Banners(Err(err)) | Msg::Areas(Err(err)) => {
                show_toast(&err.to_string());
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let active: Vec<&Banner> = self
            .banners
            .iter()
            .filter(|b| b.status == BannerStatus::Active)
            .collect();
        html! {
            <>
                <section class="hero">
                    {
                        match active.first() {
                            Some(banner) => build_hero(banner),
                            None => html! {},
                        }
                    }
                </section>
                <section class="teaser">
                    <h2>{"Practice Areas"}</h2>
                    <div class="card-grid">
                        { for self.areas.iter().map(build_area_card) }
                    </div>
                </section>
                <section class="cta">
                    <h2>{"Need legal advice?"}</h2>
                    <Link<Route> classes="btn primary" to={Route::Contact}>{"Get in touch"}</Link<Route>>
                </section>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Banners(api::get::<Vec<Banner>>("banners").await));
            });
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Areas(
                    api::get::<Vec<PracticeArea>>("practice-areas").await,
                ));
            });
        }
    }
}

fn build_hero(banner: &Banner) -> Html {
    html! {
        <div class="hero-banner">
            {
                match &banner.image {
                    Some(path) => html! { <img class="hero-image" src={config::asset_url(path)} alt={banner.title.clone()} /> },
                    None => html! {},
                }
            }
            <h1>{ banner.title.clone() }</h1>
            <p>{ banner.subtitle.clone() }</p>
            {
                match &banner.link {
                    Some(link) if !link.is_empty() => {
                        html! { <a class="btn primary" href={link.clone()}>{"Learn more"}</a> }
                    }
                    _ => html! {},
                }
            }
        </div>
    }
}

fn build_area_card(area: &PracticeArea) -> Html {
    html! {
        <div class="card">
            <h3>{ area.title.clone() }</h3>
            <p>{ area.summary.clone() }</p>
            <Link<Route> to={Route::PracticeAreaDetail { slug: area.slug.clone() }}>
                {"Read more"}
            </Link<Route>>
        </div>
    }
}
