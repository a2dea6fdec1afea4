#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::prelude::*;

use chapterly_site::components::feature_tabs::FeatureTabs;
use chapterly_site::components::scroll_reveal::{ScrollReveal, ScrollRevealProps};
use chapterly_site::components::waitlist_modal::{WaitlistModal, WaitlistModalProps};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> Element {
    let document = document();
    let root = document.create_element("div").expect("create root");
    document
        .body()
        .expect("document body")
        .append_child(&root)
        .expect("attach root");
    root
}

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

/// Lets the scheduler render and run pending effects.
async fn settle() {
    TimeoutFuture::new(20).await;
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{} is rendered", selector))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn text_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .expect("valid selector")
        .and_then(|e| e.text_content())
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[wasm_bindgen_test]
async fn waitlist_modal_closes_only_from_backdrop_button_and_escape() {
    let root = mount_root();
    let closes = Rc::new(Cell::new(0u32));
    let on_close = {
        let closes = closes.clone();
        Callback::from(move |_: ()| closes.set(closes.get() + 1))
    };
    yew::Renderer::<WaitlistModal>::with_root_and_props(root.clone(), WaitlistModalProps { on_close })
        .render();
    settle().await;

    click(&root, ".modal-card");
    click(&root, "#waitlist-title");
    settle().await;
    assert_eq!(closes.get(), 0, "clicks inside the dialog keep it open");

    click(&root, ".modal-backdrop");
    settle().await;
    assert_eq!(closes.get(), 1);

    click(&root, ".modal-close");
    settle().await;
    assert_eq!(closes.get(), 2);

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown event");
    web_sys::window()
        .expect("window")
        .dispatch_event(&escape)
        .expect("dispatch escape");
    settle().await;
    assert_eq!(closes.get(), 3);
}

#[wasm_bindgen_test]
async fn feature_tabs_switch_panel_on_click() {
    let root = mount_root();
    yew::Renderer::<FeatureTabs>::with_root(root.clone()).render();
    settle().await;

    assert_eq!(text_of(&root, ".tab-button.active"), "Library");
    assert_eq!(text_of(&root, ".feature-copy h3"), "Your collection, organized.");

    click(&root, ".tab-button:nth-child(3)");
    settle().await;

    assert_eq!(text_of(&root, ".tab-button.active"), "Wisdom");
    assert_eq!(text_of(&root, ".feature-copy h3"), "Capture thoughts.");
    let src = root
        .query_selector(".feature-shot")
        .expect("valid selector")
        .and_then(|img| img.get_attribute("src"));
    assert_eq!(src.as_deref(), Some("/feature-notes-1.png"));
    let active = root
        .query_selector_all(".tab-button.active")
        .expect("valid selector")
        .length();
    assert_eq!(active, 1);
}

#[wasm_bindgen_test]
async fn scroll_reveal_stays_visible_after_scrolling() {
    let root = mount_root();
    let props = ScrollRevealProps {
        class: classes!("section-inner"),
        children: Children::default(),
    };
    yew::Renderer::<ScrollReveal>::with_root_and_props(root.clone(), props).render();
    settle().await;
    assert!(root.query_selector(".reveal.is-visible").expect("valid selector").is_some());

    let window = web_sys::window().expect("window");
    window.scroll_to_with_x_and_y(0.0, 5000.0);
    let scroll = web_sys::Event::new("scroll").expect("scroll event");
    window.dispatch_event(&scroll).expect("dispatch scroll");
    settle().await;
    assert!(root.query_selector(".reveal.is-visible").expect("valid selector").is_some());
}
