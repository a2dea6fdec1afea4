use yew::prelude::*;

use crate::dom::{self, WindowListener};

/// Share of the viewport an element's top has to cross before it reveals.
const REVEAL_THRESHOLD: f64 = 0.9;

pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children up the first time they scroll into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let is_revealed_dep = *revealed;
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |is_revealed| {
                let listener = if *is_revealed {
                    None
                } else {
                    let check = move || {
                        let Some(element) = node.cast::<web_sys::Element>() else {
                            return;
                        };
                        match dom::viewport_height() {
                            Ok(height) => {
                                if should_reveal(element.get_bounding_client_rect().top(), height) {
                                    revealed.set(true);
                                }
                            }
                            Err(e) => {
                                log::warn!("scroll reveal skipped: {}", e);
                                revealed.set(true);
                            }
                        }
                    };
                    check();
                    WindowListener::new("scroll", move |_| check())
                        .map_err(|e| log::warn!("scroll reveal listener failed: {}", e))
                        .ok()
                };
                move || drop(listener)
            },
            is_revealed_dep,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("is-visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const SCROLL_REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1),
            transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_top_crosses_ninety_percent() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(-300.0, 800.0));
        assert!(!should_reveal(720.0, 800.0));
        assert!(!should_reveal(1500.0, 800.0));
    }
}
