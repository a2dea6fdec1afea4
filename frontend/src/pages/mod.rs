pub mod landing;
pub mod not_found;
pub mod privacy;
pub mod terms;

use yew::prelude::*;

use crate::dom;

/// Scrolls to the top and retitles the tab when a page mounts.
#[hook]
pub fn use_page_setup(title: &'static str) {
    use_effect_with_deps(
        move |_| {
            if let Err(e) = dom::scroll_to_top().and_then(|_| dom::set_title(title)) {
                log::warn!("page setup for {:?} failed: {}", title, e);
            }
            || ()
        },
        title,
    );
}
