use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::dom::{self, WindowListener};

#[derive(Properties, PartialEq)]
pub struct WaitlistModalProps {
    pub on_close: Callback<()>,
}

/// Confirmation overlay for the web waitlist. The backdrop, the close button
/// and Escape all dismiss it; clicks on the dialog itself do not.
#[function_component(WaitlistModal)]
pub fn waitlist_modal(props: &WaitlistModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = dom::lock_body_scroll(true) {
                    log::warn!("could not lock page scroll: {}", e);
                }
                let listener = WindowListener::new("keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |key| key.key() == "Escape");
                    if escape {
                        on_close.emit(());
                    }
                })
                .map_err(|e| log::warn!("escape listener failed: {}", e))
                .ok();
                move || {
                    drop(listener);
                    if let Err(e) = dom::lock_body_scroll(false) {
                        log::warn!("could not unlock page scroll: {}", e);
                    }
                }
            },
            (),
        );
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class="modal-card"
                role="dialog"
                aria-modal="true"
                aria-labelledby="waitlist-title"
                onclick={keep_open}
            >
                <button type="button" class="modal-close" aria-label="Close" onclick={close}>
                    { Icon::X.view("modal-close-icon") }
                </button>

                <h3 id="waitlist-title">{"You're on the list!"}</h3>

                <div class="modal-confirmation">
                    <div class="modal-check">
                        { Icon::Check.view("modal-check-icon") }
                    </div>
                    <span>{"You're already on the waitlist!"}</span>
                </div>

                <p>{"We'll notify you as soon as the web version is ready."}</p>
            </div>
            <style>{WAITLIST_MODAL_CSS}</style>
        </div>
    }
}

const WAITLIST_MODAL_CSS: &str = r#"
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
        animation: backdrop-in 200ms ease-out;
    }
    .modal-card {
        position: relative;
        width: 100%;
        max-width: 28rem;
        padding: 2rem;
        background: #fff;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        animation: card-in 200ms ease-out;
    }
    .modal-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
        color: #0f172a;
    }
    .modal-card p {
        color: #64748b;
        line-height: 1.625;
    }
    .modal-close {
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
        border: none;
        background: transparent;
        color: #94a3b8;
        cursor: pointer;
        transition: color 200ms ease;
    }
    .modal-close:hover {
        color: #0f172a;
    }
    .modal-close-icon {
        width: 1.5rem;
        height: 1.5rem;
    }
    .modal-confirmation {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem;
        margin-bottom: 1.5rem;
        border-radius: 0.75rem;
        background: #f0fdf4;
        color: #15803d;
        font-weight: 500;
    }
    .modal-check {
        display: flex;
        padding: 0.25rem;
        border-radius: 9999px;
        background: #22c55e;
        color: #fff;
    }
    .modal-check-icon {
        width: 1rem;
        height: 1rem;
    }
    @keyframes backdrop-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes card-in {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
"#;
