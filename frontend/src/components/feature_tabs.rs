use yew::prelude::*;

use crate::content::FEATURE_TABS;
use crate::state::{TabAction, TabSelector};

#[function_component(FeatureTabs)]
pub fn feature_tabs() -> Html {
    let tabs = use_reducer(|| TabSelector::new(FEATURE_TABS.len()));
    let active = FEATURE_TABS[tabs.active];

    html! {
        <div class="feature-tabs">
            <div class="tab-strip-scroll">
                <div class="tab-strip" role="tablist">
                    { for FEATURE_TABS.iter().enumerate().map(|(index, tab)| {
                        let onclick = {
                            let tabs = tabs.clone();
                            Callback::from(move |_: MouseEvent| tabs.dispatch(TabAction::Select(index)))
                        };
                        html! {
                            <button
                                key={tab.id}
                                type="button"
                                role="tab"
                                aria-selected={tabs.is_active(index).to_string()}
                                class={classes!("tab-button", tabs.is_active(index).then_some("active"))}
                                {onclick}
                            >
                                { tab.icon.view("tab-icon") }
                                { tab.label }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="feature-panel">
                <div key="phone" class="feature-phone">
                    <div class="phone-frame">
                        <img key={active.image} class="feature-shot" src={active.image} alt={active.label} />
                    </div>
                    <div class="feature-glow"></div>
                </div>
                <div key={active.id} class="feature-copy">
                    <h3>{ active.title }</h3>
                    <p>{ active.text }</p>
                </div>
            </div>
            <style>{FEATURE_TABS_CSS}</style>
        </div>
    }
}

const FEATURE_TABS_CSS: &str = r#"
    .feature-tabs {
        display: flex;
        flex-direction: column;
        align-items: center;
        width: 100%;
    }
    .tab-strip-scroll {
        width: 100%;
        overflow-x: auto;
        padding-bottom: 1rem;
        display: flex;
        justify-content: center;
        scrollbar-width: none;
    }
    .tab-strip {
        display: flex;
        flex-wrap: nowrap;
        gap: 0.5rem;
        margin: 0 1rem 2rem;
        padding: 0.375rem;
        background: rgba(241, 245, 249, 0.8);
        border-radius: 9999px;
        backdrop-filter: blur(4px);
    }
    .tab-button {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        white-space: nowrap;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: #64748b;
        font-size: 0.875rem;
        font-weight: 700;
        cursor: pointer;
        touch-action: manipulation;
        transition: all 200ms ease;
    }
    .tab-button:hover {
        color: #334155;
    }
    .tab-button.active {
        background: #fff;
        color: #0f172a;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 0 0 1px #e2e8f0;
    }
    .tab-icon {
        width: 1rem;
        height: 1rem;
    }
    .feature-panel {
        display: grid;
        gap: 2rem;
        align-items: center;
        width: 100%;
        max-width: 64rem;
        margin: 0 auto;
    }
    .feature-phone {
        position: relative;
        display: flex;
        justify-content: center;
        height: 450px;
    }
    .phone-frame {
        position: relative;
        z-index: 1;
        width: 220px;
        height: 100%;
        border-radius: 2.5rem;
        border: 6px solid #0f172a;
        background: #0f172a;
        overflow: hidden;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .feature-shot {
        width: 100%;
        height: 100%;
        object-fit: cover;
        animation: shot-in 0.3s ease-out;
    }
    .feature-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top right, rgba(125, 211, 252, 0.3), rgba(216, 180, 254, 0.3));
        filter: blur(64px);
        border-radius: 9999px;
        transform: scale(1.25);
    }
    .feature-copy {
        text-align: center;
        padding: 0 1.5rem 2rem;
        animation: copy-in 0.3s ease-out;
    }
    .feature-copy h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
        color: #0f172a;
    }
    .feature-copy p {
        color: #475569;
        font-size: 1rem;
        line-height: 1.625;
    }
    @keyframes shot-in {
        from { opacity: 0; transform: scale(1.05); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes copy-in {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: none; }
    }
    @media (min-width: 768px) {
        .tab-strip { margin-bottom: 3rem; }
        .tab-button { padding: 0.75rem 1.5rem; }
        .feature-panel { grid-template-columns: 1fr 1fr; gap: 3rem; }
        .feature-phone { height: 580px; }
        .phone-frame { width: 280px; border-radius: 3rem; border-width: 8px; }
        .feature-copy { text-align: left; padding-bottom: 0; }
        .feature-copy h3 { font-size: 1.875rem; }
        .feature-copy p { font-size: 1.125rem; }
    }
"#;
