use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::BUTTON_CSS;
use crate::pages::use_page_setup;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_setup("Page not found - Chapterly");
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off the shelf."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
            <style>{BUTTON_CSS}</style>
            <style>{r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                    padding: 0 1rem;
                }
                .not-found h1 {
                    font-size: 4rem;
                    font-weight: 700;
                }
                .not-found p {
                    color: #64748b;
                }
            "#}</style>
        </div>
    }
}
