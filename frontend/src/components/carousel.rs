use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::CAROUSEL_CARDS;
use crate::dom;
use crate::error::DomError;
use crate::state::{CarouselAction, CarouselScroll, Direction};

#[function_component(PotentialCarousel)]
pub fn potential_carousel() -> Html {
    let track = use_node_ref();
    let scroll = use_reducer(CarouselScroll::default);

    // Only arrow presses drive the track; swipes are left to the browser.
    {
        let track = track.clone();
        let offset = scroll.offset;
        use_effect_with_deps(
            move |nudges| {
                if *nudges > 0 {
                    match track.cast::<web_sys::Element>() {
                        Some(element) => dom::smooth_scroll_left(&element, offset),
                        None => log::warn!("{}", DomError::MissingElement("carousel track")),
                    }
                }
                || ()
            },
            scroll.nudges,
        );
    }

    let nudge = |direction: Direction| {
        let track = track.clone();
        let scroll = scroll.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = track.cast::<web_sys::Element>() {
                let (offset, max_offset) = dom::horizontal_extent(&element);
                scroll.dispatch(CarouselAction::Sync { offset, max_offset });
            }
            scroll.dispatch(CarouselAction::Nudge(direction));
        })
    };

    html! {
        <div class="carousel">
            <div ref={track.clone()} class="carousel-track">
                { for CAROUSEL_CARDS.iter().map(|card| html! {
                    <div key={card.title} class="carousel-card">
                        <div class={classes!("carousel-frame", card.tone.class())}>
                            <img src={card.image} alt={card.title} />
                        </div>
                        <div class="carousel-caption">
                            <h3>{ card.title }</h3>
                            <p>{ card.description }</p>
                        </div>
                    </div>
                }) }
            </div>

            <div class="carousel-nav">
                <button type="button" aria-label="Scroll left" onclick={nudge(Direction::Left)}>
                    { Icon::ChevronLeft.view("nav-icon") }
                </button>
                <button type="button" aria-label="Scroll right" onclick={nudge(Direction::Right)}>
                    { Icon::ChevronRight.view("nav-icon") }
                </button>
            </div>
            <style>{CAROUSEL_CSS}</style>
        </div>
    }
}

const CAROUSEL_CSS: &str = r#"
    .carousel {
        position: relative;
    }
    .carousel-track {
        display: flex;
        gap: 1rem;
        overflow-x: auto;
        padding: 0 1.5rem 2rem;
        scroll-snap-type: x mandatory;
        touch-action: pan-x;
        scrollbar-width: none;
        -ms-overflow-style: none;
    }
    .carousel-track::-webkit-scrollbar {
        display: none;
    }
    .carousel-card {
        min-width: 85vw;
        scroll-snap-align: center;
        transition: transform 200ms ease;
    }
    .carousel-card:hover {
        transform: translateY(-5px);
    }
    .carousel-frame {
        height: 400px;
        border-radius: 2rem;
        overflow: hidden;
        border: 1px solid #f1f5f9;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .carousel-frame img {
        height: 85%;
        width: auto;
        object-fit: contain;
        border-radius: 1rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        transform: rotate(-2deg);
        transition: transform 500ms ease;
    }
    .carousel-frame img:hover {
        transform: rotate(0deg);
    }
    .tone-sky { background: #f0f9ff; }
    .tone-purple { background: #faf5ff; }
    .tone-green { background: #f0fdf4; }
    .tone-orange { background: #fff7ed; }
    .carousel-caption {
        text-align: left;
        padding: 0 0.5rem;
    }
    .carousel-caption h3 {
        font-weight: 700;
        font-size: 1.25rem;
        margin-bottom: 0.5rem;
        color: #0f172a;
    }
    .carousel-caption p {
        color: #64748b;
        line-height: 1.625;
    }
    .carousel-nav {
        display: flex;
        justify-content: center;
        gap: 1rem;
        padding: 0 3rem;
        margin-top: 1rem;
    }
    .carousel-nav button {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        border: 1px solid #e2e8f0;
        background: transparent;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        transition: background-color 200ms ease, color 200ms ease;
    }
    .carousel-nav button:hover {
        background: #0f172a;
        color: #fff;
    }
    .nav-icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    @media (min-width: 768px) {
        .carousel-track { gap: 1.5rem; padding: 0 3rem 3rem; }
        .carousel-card { min-width: 350px; }
        .carousel-frame { height: 450px; }
        .carousel-nav { justify-content: flex-end; }
    }
"#;
