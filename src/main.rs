use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod animate;
mod bindings;
mod config;
mod observer;
mod service_worker;
mod submission;
mod controller {
    pub mod count_up;
    pub mod form;
    pub mod keyboard;
    pub mod navigation;
    pub mod notify;
    pub mod page;
    pub mod reveal;
    pub mod sections;
    pub mod throttle;
}
mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod notification;
    pub mod stat_counter;
    pub mod truck;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    service_worker::register_on_load();
    yew::Renderer::<App>::new().render();
}
