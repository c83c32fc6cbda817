use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod bot_link;
    pub mod card;
    pub mod footer;
    pub mod header;
    pub mod reveal;
    pub mod section_title;
    pub mod testimonial;
}
mod pages {
    pub mod landing;
}
#[cfg(test)]
mod testing;

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
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(Route::recognize("/pricing").map_or(false, |route| route == Route::NotFound));
    }

    #[test]
    fn home_is_served_from_root() {
        assert_eq!(Route::Home.to_path(), "/");
    }
}
