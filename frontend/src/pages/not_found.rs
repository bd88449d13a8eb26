use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> classes="btn" to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        }
    }
}
