//! Back-office chrome and dashboard. Every admin route renders inside
//! `AdminLayout`, which itself only exists behind the auth gate.

pub mod email_settings;
pub mod settings;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct AdminLayout;

pub enum LayoutMsg {
    Logout,
}

impl Component for AdminLayout {
    type Message = LayoutMsg;
    type Properties = LayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LayoutMsg::Logout => {
                session::clear();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let user = session::load().map(|s| s.user);
        html! {
            <div class="admin">
                <aside class="admin-nav">
                    <p class="brand">{"Back Office"}</p>
                    <nav>
                        <Link<Route> to={Route::Admin}>{"Dashboard"}</Link<Route>>
                        <Link<Route> to={Route::AdminBanners}>{"Banners"}</Link<Route>>
                        <Link<Route> to={Route::AdminPracticeAreas}>{"Practice Areas"}</Link<Route>>
                        <Link<Route> to={Route::AdminTeam}>{"Team Members"}</Link<Route>>
                        <Link<Route> to={Route::AdminVacancies}>{"Vacancies"}</Link<Route>>
                        <Link<Route> to={Route::AdminMessages}>{"Messages"}</Link<Route>>
                        <Link<Route> to={Route::AdminBookings}>{"Bookings"}</Link<Route>>
                        <Link<Route> to={Route::AdminTerms}>{"Terms"}</Link<Route>>
                        <Link<Route> to={Route::AdminSettings}>{"Site Settings"}</Link<Route>>
                        <Link<Route> to={Route::AdminEmailSettings}>{"Email Settings"}</Link<Route>>
                    </nav>
                </aside>
                <div class="admin-main">
                    <header class="admin-topbar">
                        {
                            match &user {
                                Some(user) => html! {
                                    <span class="muted">{ format!("{} ({})", user.name, user.role) }</span>
                                },
                                None => html! {},
                            }
                        }
                        <Link<Route> to={Route::Home}>{"View site"}</Link<Route>>
                        <button class="btn small" onclick={link.callback(|_| LayoutMsg::Logout)}>
                            {"Log out"}
                        </button>
                    </header>
                    <main class="admin-content">
                        { ctx.props().children.clone() }
                    </main>
                </div>
            </div>
        }
    }
}

pub struct Dashboard;

impl Component for Dashboard {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let greeting = session::load()
            .map(|s| format!("Welcome back, {}.", s.user.name))
            .unwrap_or_else(|| "Welcome back.".to_string());
        html! {
            <div class="dashboard">
                <h1>{"Dashboard"}</h1>
                <p>{ greeting }</p>
                <div class="card-grid">
                    { dashboard_card("Banners", "Hero banners on the home page", Route::AdminBanners) }
                    { dashboard_card("Practice Areas", "Services the firm offers", Route::AdminPracticeAreas) }
                    { dashboard_card("Team Members", "Attorney and staff profiles", Route::AdminTeam) }
                    { dashboard_card("Vacancies", "Open positions on the careers page", Route::AdminVacancies) }
                    { dashboard_card("Messages", "Contact form submissions", Route::AdminMessages) }
                    { dashboard_card("Bookings", "Consultation appointments", Route::AdminBookings) }
                    { dashboard_card("Terms", "Legal and policy documents", Route::AdminTerms) }
                    { dashboard_card("Site Settings", "Contact details and branding", Route::AdminSettings) }
                </div>
            </div>
        }
    }
}

fn dashboard_card(title: &'static str, blurb: &'static str, route: Route) -> Html {
    html! {
        <Link<Route> classes="card" to={route}>
            <h3>{ title }</h3>
            <p class="muted">{ blurb }</p>
        </Link<Route>>
    }
}
