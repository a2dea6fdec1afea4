use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::FaqEntry;
use crate::state::{FaqAccordion, FaqAction};

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_reducer(FaqAccordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(FaqAction::Toggle(index));
                    })
                };
                let answer_id = format!("faq-answer-{}", index);
                html! {
                    <div key={index} class={classes!("faq-item", is_open.then_some("open"))}>
                        <button
                            type="button"
                            class="faq-question"
                            aria-expanded={is_open.to_string()}
                            aria-controls={answer_id.clone()}
                            onclick={toggle}
                        >
                            <span class="faq-question-text">
                                { entry.icon.map(|icon| icon.view("faq-icon")).unwrap_or_default() }
                                { entry.question }
                            </span>
                            { Icon::ChevronDown.view("faq-chevron") }
                        </button>
                        if is_open {
                            <div id={answer_id} class="faq-answer">
                                <p>{ entry.answer }</p>
                            </div>
                        }
                    </div>
                }
            }) }
            <style>{FAQ_CSS}</style>
        </div>
    }
}

const FAQ_CSS: &str = r#"
    .faq-list {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .faq-item {
        border: 1px solid #f1f5f9;
        border-radius: 1rem;
        overflow: hidden;
    }
    .faq-question {
        display: flex;
        align-items: center;
        justify-content: space-between;
        width: 100%;
        padding: 1.25rem;
        border: none;
        background: #fff;
        text-align: left;
        font-size: 1rem;
        font-weight: 500;
        color: #0f172a;
        cursor: pointer;
        transition: background-color 200ms ease;
    }
    .faq-question:hover {
        background: #f8fafc;
    }
    .faq-question:active {
        background: #f1f5f9;
    }
    .faq-question-text {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .faq-icon {
        width: 1.125rem;
        height: 1.125rem;
        color: #0ea5e9;
    }
    .faq-chevron {
        width: 1.5rem;
        height: 1.5rem;
        flex-shrink: 0;
        color: #94a3b8;
        transition: transform 300ms ease;
    }
    .faq-item.open .faq-chevron {
        transform: rotate(180deg);
    }
    .faq-answer {
        background: rgba(248, 250, 252, 0.5);
        animation: faq-open 250ms ease-out;
        overflow: hidden;
    }
    .faq-answer p {
        padding: 0 1.25rem 1.25rem;
        color: #64748b;
        line-height: 1.625;
        font-size: 0.875rem;
    }
    @keyframes faq-open {
        from { max-height: 0; opacity: 0; }
        to { max-height: 20rem; opacity: 1; }
    }
    @media (min-width: 768px) {
        .faq-list { gap: 1rem; }
        .faq-question { padding: 1.5rem; font-size: 1.125rem; }
        .faq-answer p { padding: 0 1.5rem 1.5rem; font-size: 1rem; }
    }
"#;
