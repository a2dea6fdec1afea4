use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::config;
use crate::legal::{Block, Inline, LegalDocument};
use crate::Route;

fn inline(part: &Inline) -> Html {
    match part {
        Inline::Text(text) => html! { { *text } },
        Inline::Strong(text) => html! { <strong>{ *text }</strong> },
        Inline::Link { label, route } => html! {
            <Link<Route> to={*route} classes="legal-link">{ *label }</Link<Route>>
        },
    }
}

fn inlines(parts: &[Inline]) -> Html {
    parts.iter().map(inline).collect::<Html>()
}

fn block(block: &Block) -> Html {
    match block {
        Block::Paragraph(parts) => html! { <p>{ inlines(parts) }</p> },
        Block::List(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{ inlines(item) }</li> }) }
            </ul>
        },
        Block::Callout(parts) => html! { <p class="legal-callout">{ inlines(parts) }</p> },
        Block::ContactLink => html! {
            <a class="legal-contact" href={config::contact_mailto()}>
                { Icon::Mail.view("legal-contact-icon") }
                { config::get_contact_email() }
            </a>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalViewProps {
    pub document: &'static LegalDocument,
}

/// Shared layout for the privacy and terms pages.
#[function_component(LegalView)]
pub fn legal_view(props: &LegalViewProps) -> Html {
    let doc = props.document;
    let last = doc.sections.len().saturating_sub(1);

    html! {
        <div class={classes!("legal-page", doc.slug)}>
            <nav class="legal-nav">
                <div class="legal-nav-inner">
                    <Link<Route> to={Route::Home} classes="legal-back">
                        { Icon::ArrowLeft.view("legal-back-icon") }
                        <span>{"Back to Home"}</span>
                    </Link<Route>>
                    <div class="legal-brand">
                        <img src={config::LOGO} alt="Chapterly Logo" />
                        <span>{ config::BRAND }</span>
                    </div>
                </div>
            </nav>

            <main class="legal-main">
                <div class="legal-card">
                    <header class="legal-header">
                        <img src={config::LOGO} alt={doc.title} />
                        <h1>{ doc.title }</h1>
                        <p>{ format!("Last updated: {}", doc.last_updated) }</p>
                    </header>

                    <div class="legal-body">
                        <section>
                            <p class="legal-greeting">{ inlines(doc.greeting) }</p>
                            <p>{ inlines(doc.intro) }</p>
                        </section>
                        { for doc.sections.iter().enumerate().map(|(index, section)| html! {
                            <section class={classes!((index == last).then_some("legal-closing"))}>
                                <h2>{ section.heading }</h2>
                                { for section.blocks.iter().map(block) }
                            </section>
                        }) }
                    </div>
                </div>

                <footer class="legal-footer">
                    <p>{ format!("{} All rights reserved.", config::COPYRIGHT) }</p>
                </footer>
            </main>
            <style>{LEGAL_CSS}</style>
        </div>
    }
}

const LEGAL_CSS: &str = r#"
    .legal-page {
        min-height: 100vh;
        background: #f8fafc;
        color: #0f172a;
    }
    .legal-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 4rem;
        z-index: 50;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #e2e8f0;
    }
    .legal-nav-inner {
        max-width: 56rem;
        height: 100%;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .legal-back {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #475569;
        font-size: 0.875rem;
        font-weight: 500;
        text-decoration: none;
    }
    .legal-back:hover {
        color: #0f172a;
    }
    .legal-back-icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    .legal-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        font-size: 1.125rem;
    }
    .legal-brand img {
        width: 2rem;
        height: 2rem;
        object-fit: contain;
    }
    .legal-main {
        max-width: 48rem;
        margin: 0 auto;
        padding: 6rem 1rem 4rem;
        animation: legal-in 0.5s ease-out;
    }
    .legal-card {
        background: #fff;
        border-radius: 1.5rem;
        border: 1px solid #f1f5f9;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        padding: 2rem;
    }
    .legal-header {
        margin-bottom: 2.5rem;
        padding-bottom: 2rem;
        border-bottom: 1px solid #f1f5f9;
    }
    .legal-header img {
        width: 4rem;
        height: 4rem;
        object-fit: contain;
        margin-bottom: 1.5rem;
    }
    .legal-header h1 {
        font-size: 1.875rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .legal-header p {
        color: #64748b;
        font-weight: 500;
    }
    .legal-body {
        display: flex;
        flex-direction: column;
        gap: 2.5rem;
        color: #475569;
        line-height: 1.625;
    }
    .legal-body h2 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 1rem;
    }
    .legal-body p + p,
    .legal-body p + ul,
    .legal-body ul + p {
        margin-top: 1rem;
    }
    .legal-body strong {
        color: #0f172a;
    }
    .legal-body ul {
        list-style: disc;
        padding-left: 1.25rem;
    }
    .legal-body li + li {
        margin-top: 0.5rem;
    }
    .legal-body li::marker {
        color: #0ea5e9;
    }
    .legal-greeting {
        font-size: 1.125rem;
    }
    .legal-callout {
        padding: 1rem;
        background: #f8fafc;
        border: 1px solid #f1f5f9;
        border-radius: 0.75rem;
        font-size: 0.875rem;
    }
    .legal-link {
        color: #0284c7;
        text-decoration: underline;
    }
    .legal-link:hover {
        color: #075985;
    }
    .legal-closing {
        padding-top: 2rem;
        border-top: 1px solid #f1f5f9;
    }
    .legal-contact {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 1rem;
        padding: 0.75rem 1.5rem;
        background: #0f172a;
        color: #fff;
        border-radius: 9999px;
        font-weight: 500;
        text-decoration: none;
        transition: background-color 200ms ease;
    }
    .legal-contact:hover {
        background: #1e293b;
    }
    .legal-contact-icon {
        width: 1rem;
        height: 1rem;
    }
    .legal-footer {
        margin-top: 2rem;
        text-align: center;
        color: #94a3b8;
        font-size: 0.875rem;
    }
    @keyframes legal-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: none; }
    }
    @media (min-width: 768px) {
        .legal-card { padding: 3rem; }
        .legal-header h1 { font-size: 2.25rem; }
    }
"#;
