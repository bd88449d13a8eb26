//! Careers page: open vacancies with requirements and the PDF brochure.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::model::vacancy::{Vacancy, VacancyStatus};

use crate::api::{self, ApiError};
use crate::components::rich_text::rich_text;
use crate::components::toast::show_toast;
use crate::config;

pub struct CareersPage {
    vacancies: Vec<Vacancy>,
    loading: bool,
}

pub enum Msg {
    Loaded(Result<Vec<Vacancy>, ApiError>),
}

impl Component for CareersPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            vacancies: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(vacancies)) => {
                self.loading = false;
                self.vacancies = vacancies;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                show_toast(&err.to_string());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        // Closed roles stay hidden; the filter is client-side over the page.
        let open: Vec<&Vacancy> = self
            .vacancies
            .iter()
            .filter(|v| v.status == VacancyStatus::Open)
            .collect();
        html! {
            <div class="careers-page">
                <h1>{"Careers"}</h1>
                {
                    if self.loading {
                        html! { <p class="muted">{"Loading…"}</p> }
                    } else if open.is_empty() {
                        html! { <p class="muted">{"There are no open positions right now."}</p> }
                    } else {
                        html! { <div class="vacancy-list">{ for open.iter().map(|v| build_vacancy(v)) }</div> }
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::get::<Vec<Vacancy>>("vacancies").await));
            });
        }
    }
}

fn build_vacancy(vacancy: &Vacancy) -> Html {
    html! {
        <article class="card vacancy">
            <h2>{ vacancy.title.clone() }</h2>
            <p class="muted">
                { format!("{} · {}", vacancy.location, vacancy.employment_type) }
            </p>
            { rich_text(&vacancy.description) }
            {
                if vacancy.requirements.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Requirements"}</h3>
                            <ul>
                                { for vacancy.requirements.iter().map(|r| html! { <li>{ r.clone() }</li> }) }
                            </ul>
                        </>
                    }
                }
            }
            {
                match &vacancy.brochure {
                    Some(path) => html! {
                        <a class="btn" href={config::asset_url(path)} target="_blank" rel="noreferrer">
                            {"Download role description (PDF)"}
                        </a>
                    },
                    None => html! {},
                }
            }
        </article>
    }
}
