use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod legal;
pub mod pages;
pub mod state;

use pages::{landing::Landing, not_found::NotFound, privacy::Privacy, terms::Terms};

#[derive(Clone, Copy, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("rendering {:?}", route);
    match route {
        Route::Home => html! { <Landing /> },
        Route::Privacy => html! { <Privacy /> },
        Route::Terms => html! { <Terms /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Privacy.to_path(), "/privacy");
        assert_eq!(Route::Terms.to_path(), "/terms");
    }

    #[test]
    fn known_paths_are_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
