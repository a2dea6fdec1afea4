use yew::prelude::*;

use crate::content::MARQUEE;

#[function_component(LogoMarquee)]
pub fn logo_marquee() -> Html {
    // The names are rendered twice so the -100% keyframe lands on a copy.
    let names = MARQUEE.iter().chain(MARQUEE.iter()).map(|(name, style)| {
        html! { <h3 class={classes!("marquee-name", style.class())}>{ *name }</h3> }
    });

    html! {
        <div class="marquee">
            <div class="marquee-caption">{"Trusted by readers from"}</div>
            <div class="marquee-window">
                <div class="marquee-strip">
                    { for names }
                </div>
            </div>
            <style>{MARQUEE_CSS}</style>
        </div>
    }
}

const MARQUEE_CSS: &str = r#"
    .marquee {
        width: 100%;
        overflow: hidden;
        padding: 3rem 0;
        background: #fff;
    }
    .marquee-caption {
        text-align: center;
        margin-bottom: 2rem;
        font-size: 10px;
        font-weight: 700;
        color: #94a3b8;
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .marquee-window {
        position: relative;
        display: flex;
        overflow: hidden;
        user-select: none;
    }
    .marquee-strip {
        display: flex;
        gap: 3rem;
        min-width: 100%;
        justify-content: space-around;
        align-items: center;
        padding: 0 1rem;
        opacity: 0.4;
        filter: grayscale(1);
        animation: marquee-scroll 30s linear infinite;
    }
    .marquee-name {
        font-size: 1.5rem;
        white-space: nowrap;
    }
    .marquee-serif { font-family: Georgia, serif; font-weight: 700; }
    .marquee-heavy { font-weight: 900; letter-spacing: -0.05em; }
    .marquee-italic { font-family: Georgia, serif; font-style: italic; }
    .marquee-mono { font-family: ui-monospace, monospace; font-weight: 700; }
    .marquee-sans { font-weight: 700; }
    @keyframes marquee-scroll {
        from { transform: translateX(0%); }
        to { transform: translateX(-100%); }
    }
    @media (min-width: 768px) {
        .marquee { padding: 4rem 0; }
        .marquee-caption { font-size: 0.75rem; margin-bottom: 2.5rem; }
        .marquee-strip { gap: 5rem; }
        .marquee-name { font-size: 1.875rem; }
    }
"#;
