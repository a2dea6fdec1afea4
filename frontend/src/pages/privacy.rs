use yew::prelude::*;

use crate::components::legal_view::LegalView;
use crate::legal::PRIVACY_POLICY;
use crate::pages::use_page_setup;

#[function_component(Privacy)]
pub fn privacy() -> Html {
    use_page_setup(PRIVACY_POLICY.page_title);
    html! { <LegalView document={&PRIVACY_POLICY} /> }
}
