//! Public site chrome: header with the main navigation and a footer fed by
//! the site settings fetched at app boot. Pages render inside it.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use common::model::settings::SiteSettings;

use crate::app::SettingsCtx;
use crate::routes::Route;

/// Shown until the settings fetch resolves (and if it fails).
const FALLBACK_NAME: &str = "Sterling & Vale";

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

pub struct PublicLayout;

impl Component for PublicLayout {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let settings: Option<Rc<SiteSettings>> = ctx
            .link()
            .context::<SettingsCtx>(Callback::noop())
            .and_then(|(value, _)| value);
        let site_name = settings
            .as_ref()
            .map(|s| s.site_name.clone())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());

        html! {
            <div class="site">
                <header class="topbar">
                    <Link<Route> classes="brand" to={Route::Home}>{ site_name.clone() }</Link<Route>>
                    <nav class="nav">
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                        <Link<Route> to={Route::PracticeAreas}>{"Practice Areas"}</Link<Route>>
                        <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                        <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    </nav>
                </header>
                <main class="content">
                    { ctx.props().children.clone() }
                </main>
                { build_footer(&site_name, settings.as_deref()) }
            </div>
        }
    }
}

fn build_footer(site_name: &str, settings: Option<&SiteSettings>) -> Html {
    html! {
        <footer class="footer">
            <div class="footer-brand">
                <strong>{ site_name.to_string() }</strong>
                {
                    match settings {
                        Some(s) => html! { <p class="muted">{ s.tagline.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
            {
                match settings {
                    Some(s) => html! {
                        <div class="footer-contact">
                            <p>{ s.address.clone() }</p>
                            <p>{ s.phone.clone() }</p>
                            <p>{ s.email.clone() }</p>
                            <div class="social">
                                { social_link("Facebook", s.facebook.as_deref()) }
                                { social_link("LinkedIn", s.linkedin.as_deref()) }
                                { social_link("Twitter", s.twitter.as_deref()) }
                            </div>
                            <p class="muted">{ s.footer_text.clone() }</p>
                        </div>
                    },
                    None => html! {},
                }
            }
        </footer>
    }
}

fn social_link(label: &'static str, url: Option<&str>) -> Html {
    match url {
        Some(url) if !url.is_empty() => {
            html! { <a href={url.to_string()} target="_blank" rel="noreferrer">{ label }</a> }
        }
        _ => html! {},
    }
}
