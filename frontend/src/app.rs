//! Root component: router, settings context, and the route switch.
//!
//! On boot the app fetches the site settings once and provides them to the
//! public chrome through a context; nothing blocks on that fetch — pages
//! render with fallbacks until it resolves, and a failure only costs the
//! footer its contact details.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::banner::Banner;
use common::model::booking::Booking;
use common::model::contact::ContactMessage;
use common::model::practice_area::PracticeArea;
use common::model::settings::SiteSettings;
use common::model::team::TeamMember;
use common::model::term::Term;
use common::model::vacancy::Vacancy;

use crate::api::{self, ApiError};
use crate::components::auth_gate::AuthGate;
use crate::components::layout::PublicLayout;
use crate::components::manager::ResourceManager;
use crate::pages;
use crate::routes::Route;

pub type SettingsCtx = Option<Rc<SiteSettings>>;

pub struct App {
    settings: Option<Rc<SiteSettings>>,
}

pub enum AppMsg {
    SettingsLoaded(Result<SiteSettings, ApiError>),
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { settings: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SettingsLoaded(Ok(settings)) => {
                self.settings = Some(Rc::new(settings));
                true
            }
            // Already logged by the API layer; the chrome keeps fallbacks.
            AppMsg::SettingsLoaded(Err(_)) => false,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <ContextProvider<SettingsCtx> context={self.settings.clone()}>
                    <Switch<Route> render={switch} />
                </ContextProvider<SettingsCtx>>
            </BrowserRouter>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(AppMsg::SettingsLoaded(
                    api::get::<SiteSettings>("settings").await,
                ));
            });
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => public(html! { <pages::home::HomePage /> }),
        Route::About => public(html! { <pages::about::AboutPage /> }),
        Route::PracticeAreas => public(html! { <pages::practice_areas::PracticeAreasPage /> }),
        Route::PracticeAreaDetail { slug } => {
            public(html! { <pages::practice_areas::PracticeAreaDetailPage {slug} /> })
        }
        Route::Careers => public(html! { <pages::careers::CareersPage /> }),
        Route::Contact => public(html! { <pages::contact::ContactPage /> }),
        Route::TeamMemberDetail { slug } => {
            public(html! { <pages::team_member::TeamMemberPage {slug} /> })
        }
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::ForgotPassword => html! { <pages::forgot_password::ForgotPasswordPage /> },
        Route::BookingAction { action, id } => {
            public(html! { <pages::booking_action::BookingActionPage {action} {id} /> })
        }
        Route::Admin => admin(html! { <pages::admin::Dashboard /> }),
        Route::AdminBanners => admin(html! { <ResourceManager<Banner> /> }),
        Route::AdminPracticeAreas => admin(html! { <ResourceManager<PracticeArea> /> }),
        Route::AdminTeam => admin(html! { <ResourceManager<TeamMember> /> }),
        Route::AdminVacancies => admin(html! { <ResourceManager<Vacancy> /> }),
        Route::AdminMessages => admin(html! { <ResourceManager<ContactMessage> /> }),
        Route::AdminTerms => admin(html! { <ResourceManager<Term> /> }),
        Route::AdminBookings => admin(html! { <ResourceManager<Booking> /> }),
        Route::AdminSettings => admin(html! { <pages::admin::settings::SettingsEditor /> }),
        Route::AdminEmailSettings => {
            admin(html! { <pages::admin::email_settings::EmailSettingsEditor /> })
        }
        Route::NotFound => public(html! { <pages::not_found::NotFoundPage /> }),
    }
}

fn public(inner: Html) -> Html {
    html! { <PublicLayout>{ inner }</PublicLayout> }
}

fn admin(inner: Html) -> Html {
    html! {
        <AuthGate>
            <pages::admin::AdminLayout>{ inner }</pages::admin::AdminLayout>
        </AuthGate>
    }
}
