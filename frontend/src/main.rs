use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact {
    pub mod draft;
    pub mod mailer;
}
mod utils {
    pub mod liveness;
    pub mod scroll_lock;
}
mod components {
    pub mod analytics;
    pub mod contact_form;
    pub mod contact_modal;
    pub mod fade_in;
    pub mod floating_cta;
    pub mod overlay;
    pub mod service_modal;
}
mod pages {
    pub mod content;
    pub mod home;
    pub mod not_found;
}

use components::analytics::Analytics;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Analytics />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
