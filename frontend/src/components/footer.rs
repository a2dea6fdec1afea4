use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::Button;
use crate::config::{self, images};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-cta">
                <h2>{"Ready to read?"}</h2>
                <p>{"Join thousands of readers organizing their intellectual life."}</p>
                <Button href={AttrValue::from(config::get_app_store_url())} external=true class="cta-store">
                    <img src={images::APPLE_BADGE_DARK} alt="Apple Logo" />
                    {"Download on App Store"}
                </Button>
            </div>

            <div class="footer-bar">
                <div class="footer-brand">
                    <img src={config::LOGO} alt="Chapterly Logo" />
                    <span>{ config::BRAND }</span>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <a href={config::TWITTER_URL} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                </div>
                <div>{ config::COPYRIGHT }</div>
            </div>
            <style>{FOOTER_CSS}</style>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #111;
        color: #fff;
        padding: 4rem 1rem;
        margin-top: 2rem;
        border-radius: 2rem 2rem 0 0;
        text-align: center;
    }
    .footer-cta {
        max-width: 42rem;
        margin: 0 auto;
    }
    .footer-cta h2 {
        font-size: 1.875rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        margin-bottom: 1.5rem;
    }
    .footer-cta p {
        color: #9ca3af;
        font-size: 1rem;
        margin-bottom: 2.5rem;
        padding: 0 1rem;
    }
    .cta-store {
        width: 100%;
        height: 4rem;
        padding: 0 2.5rem;
        background: #fff;
        color: #000;
        font-size: 1.125rem;
        border-radius: 1rem;
    }
    .cta-store:hover {
        background: #e5e7eb;
    }
    .footer-bar {
        margin-top: 4rem;
        padding-top: 3rem;
        border-top: 1px solid #1f2937;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        color: #6b7280;
        font-size: 0.875rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .footer-brand img {
        width: 1.5rem;
        height: 1.5rem;
        object-fit: contain;
    }
    .footer-brand span {
        color: #fff;
        font-weight: 700;
        font-size: 1rem;
    }
    .footer-links {
        display: flex;
        gap: 1.5rem;
    }
    .footer-links a {
        color: inherit;
        text-decoration: none;
        transition: color 200ms ease;
    }
    .footer-links a:hover {
        color: #fff;
    }
    @media (min-width: 768px) {
        .site-footer { padding: 6rem 1rem; margin-top: 3rem; border-radius: 3rem 3rem 0 0; }
        .footer-cta h2 { font-size: 4.5rem; margin-bottom: 2rem; }
        .footer-cta p { font-size: 1.25rem; margin-bottom: 3rem; }
        .cta-store { width: auto; }
        .footer-bar { margin-top: 6rem; flex-direction: row; justify-content: space-between; gap: 0; }
        .footer-links { gap: 2rem; }
    }
"#;
