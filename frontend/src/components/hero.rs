use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config::{self, images};
use crate::content::{HeroPhone, PhoneSlot, HERO_PHONES, HERO_SUBTITLE, HERO_TITLE};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_join_waitlist: Callback<()>,
}

fn phone(phone: &HeroPhone) -> Html {
    let slot = match phone.slot {
        PhoneSlot::Left => "phone-left",
        PhoneSlot::Center => "phone-center",
        PhoneSlot::Right => "phone-right",
    };
    let timing = format!(
        "animation-delay: {}s; animation-duration: {}s;",
        phone.delay, phone.duration
    );
    html! {
        <div class={classes!("hero-phone", slot)} style={timing}>
            <div class="hero-phone-frame">
                <img src={phone.image} alt={phone.alt} />
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let join = props.on_join_waitlist.reform(|_: MouseEvent| ());

    html! {
        <section class="hero">
            <div class="hero-blobs">
                <div class="hero-blob blob-sky"></div>
                <div class="hero-blob blob-purple"></div>
            </div>

            <div class="hero-content">
                <img class="hero-logo rise" src={config::LOGO} alt="Chapterly Logo" />
                <h1 class="hero-title rise" style="animation-delay: 0.1s;">{ HERO_TITLE }</h1>
                <p class="hero-subtitle rise" style="animation-delay: 0.2s;">{ HERO_SUBTITLE }</p>
                <div class="hero-ctas rise" style="animation-delay: 0.3s;">
                    <Button href={AttrValue::from(config::get_app_store_url())} external=true class="cta-ios">
                        <img src={images::APPLE_BADGE} alt="Apple Logo" />
                        {"Download on iOS"}
                    </Button>
                    <Button variant={ButtonVariant::Secondary} onclick={join}>
                        {"Join the web waitlist"}
                    </Button>
                </div>

                <div class="hero-stage">
                    { for HERO_PHONES.iter().map(phone) }
                </div>
            </div>
            <style>{HERO_CSS}</style>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        background: #F0F8FF;
        padding: 3rem 0 5rem;
        overflow: hidden;
    }
    .hero-blobs {
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    }
    .hero-blob {
        position: absolute;
        width: 300px;
        height: 300px;
        border-radius: 9999px;
        filter: blur(64px);
    }
    .blob-sky {
        top: -10%;
        right: -20%;
        background: rgba(186, 230, 253, 0.4);
    }
    .blob-purple {
        bottom: 10%;
        left: -20%;
        background: rgba(233, 213, 255, 0.4);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 0 1rem;
    }
    .rise {
        opacity: 0;
        animation: rise 0.6s ease-out forwards;
    }
    .hero-logo {
        width: 4rem;
        height: 4rem;
        object-fit: contain;
        margin-bottom: 1.5rem;
    }
    .hero-title {
        font-size: 2.25rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        margin-bottom: 1rem;
        background: linear-gradient(to bottom right, #0f172a, #475569);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        max-width: 36rem;
        font-size: 1rem;
        color: #475569;
        line-height: 1.625;
        margin-bottom: 2rem;
        padding: 0 1rem;
    }
    .hero-ctas {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        width: 100%;
        max-width: 20rem;
        margin-bottom: 2rem;
    }
    .hero-ctas .btn {
        width: 100%;
    }
    .cta-ios {
        background: #0ea5e9;
        font-size: 1.125rem;
    }
    .hero-stage {
        position: relative;
        width: 100%;
        max-width: 64rem;
        height: 320px;
        display: flex;
        justify-content: center;
        align-items: flex-end;
        margin-top: 2rem;
        perspective: 1000px;
    }
    .hero-phone {
        opacity: 0;
        animation-fill-mode: forwards;
        animation-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .phone-left,
    .phone-right {
        position: absolute;
        bottom: 0;
        width: 160px;
        z-index: 10;
    }
    .phone-left {
        transform-origin: bottom right;
        animation-name: phone-left;
    }
    .phone-right {
        transform-origin: bottom left;
        animation-name: phone-right;
    }
    .phone-center {
        position: relative;
        width: 180px;
        z-index: 20;
        animation-name: phone-center;
    }
    .hero-phone-frame {
        border-radius: 2rem;
        overflow: hidden;
        border: 4px solid #fff;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .hero-phone-frame img {
        display: block;
        width: 100%;
    }
    @keyframes rise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: none; }
    }
    @keyframes phone-left {
        from { opacity: 0; transform: translate(0, 100px) rotate(0deg); }
        to { opacity: 1; transform: translate(-45%, 40px) rotate(-12deg); }
    }
    @keyframes phone-right {
        from { opacity: 0; transform: translate(0, 100px) rotate(0deg); }
        to { opacity: 1; transform: translate(45%, 40px) rotate(12deg); }
    }
    @keyframes phone-center {
        from { opacity: 0; transform: translateY(100px); }
        to { opacity: 1; transform: none; }
    }
    @media (min-width: 768px) {
        .hero { padding: 5rem 0 8rem; }
        .hero-blob { width: 500px; height: 500px; }
        .hero-logo { width: 5rem; height: 5rem; margin-bottom: 2rem; }
        .hero-title { font-size: 4.5rem; margin-bottom: 1.5rem; }
        .hero-subtitle { max-width: 42rem; font-size: 1.25rem; margin-bottom: 2.5rem; }
        .hero-ctas { flex-direction: row; justify-content: center; max-width: none; gap: 1.5rem; }
        .hero-ctas .btn { width: auto; }
        .hero-stage { height: 650px; margin-top: 3rem; }
        .phone-left, .phone-right { width: 300px; }
        .phone-center { width: 320px; }
        .hero-phone-frame { border-radius: 3rem; border-width: 8px; }
    }
"#;
