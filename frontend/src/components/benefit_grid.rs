use yew::prelude::*;

use crate::content::BENEFITS;

#[function_component(BenefitGrid)]
pub fn benefit_grid() -> Html {
    html! {
        <div class="benefit-grid">
            { for BENEFITS.iter().map(|benefit| html! {
                <div key={benefit.title} class="benefit-card">
                    <div class="benefit-icon">
                        { benefit.icon.view("benefit-glyph") }
                    </div>
                    <h3>{ benefit.title }</h3>
                    <p>{ benefit.description }</p>
                </div>
            }) }
            <style>{BENEFIT_GRID_CSS}</style>
        </div>
    }
}

const BENEFIT_GRID_CSS: &str = r#"
    .benefit-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 0.5rem;
    }
    .benefit-card {
        background: #fff;
        padding: 1.5rem;
        border-radius: 2rem;
        border: 1px solid #f1f5f9;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .benefit-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 1rem;
        background: #f8fafc;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }
    .benefit-glyph {
        width: 1.25rem;
        height: 1.25rem;
        color: #0f172a;
    }
    .benefit-card h3 {
        font-size: 1.125rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
        color: #0f172a;
    }
    .benefit-card p {
        color: #64748b;
        line-height: 1.625;
        font-size: 0.875rem;
    }
    @media (min-width: 768px) {
        .benefit-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
        .benefit-card { padding: 2rem; }
        .benefit-icon { width: 3rem; height: 3rem; margin-bottom: 1.5rem; }
        .benefit-glyph { width: 1.5rem; height: 1.5rem; }
    }
    @media (min-width: 1024px) {
        .benefit-grid { grid-template-columns: repeat(3, 1fr); }
    }
"#;
