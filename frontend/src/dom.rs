use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn set_title(title: &str) -> Result<(), DomError> {
    document()?.set_title(title);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), DomError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

pub fn viewport_height() -> Result<f64, DomError> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}

/// Stops the page behind an overlay from scrolling.
pub fn lock_body_scroll(locked: bool) -> Result<(), DomError> {
    let body = document()?.body().ok_or(DomError::NoBody)?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

/// Current horizontal scroll position and how far it can go.
pub fn horizontal_extent(element: &Element) -> (f64, f64) {
    let offset = f64::from(element.scroll_left());
    let max = f64::from((element.scroll_width() - element.client_width()).max(0));
    (offset, max)
}

pub fn smooth_scroll_left(element: &Element, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

/// An event listener on `window` that is removed again when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        window()?.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("could not remove {} listener: {}", self.event, DomError::from(e));
            }
        }
    }
}
