use yew::prelude::*;

use crate::components::legal_view::LegalView;
use crate::legal::TERMS_OF_SERVICE;
use crate::pages::use_page_setup;

#[function_component(Terms)]
pub fn terms() -> Html {
    use_page_setup(TERMS_OF_SERVICE.page_title);
    html! { <LegalView document={&TERMS_OF_SERVICE} /> }
}
