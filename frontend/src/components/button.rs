use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Renders an anchor instead of a button when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    /// Opens `href` in a new tab.
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!("btn", props.variant.class(), props.class.clone());

    match &props.href {
        Some(href) => {
            let (target, rel) = if props.external {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a {class} href={href.clone()} {target} {rel} onclick={props.onclick.clone()}>
                    { for props.children.iter() }
                </a>
            }
        }
        None => html! {
            <button {class} type="button" onclick={props.onclick.clone()}>
                { for props.children.iter() }
            </button>
        },
    }
}

pub const BUTTON_CSS: &str = r#"
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        border-radius: 9999px;
        font-weight: 500;
        border: none;
        cursor: pointer;
        text-decoration: none;
        transition: all 200ms ease;
    }
    .btn:active {
        transform: scale(0.95);
    }
    .btn img {
        width: 1.5rem;
        height: 1.5rem;
        object-fit: contain;
    }
    .btn-primary {
        background: #0f172a;
        color: #fff;
        height: 3.5rem;
        padding: 0.5rem 2rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .btn-primary:hover {
        background: #1e293b;
        transform: translateY(-2px);
    }
    .btn-secondary {
        background: #fff;
        color: #0f172a;
        border: 1px solid #e2e8f0;
        height: 3.5rem;
        padding: 0 2rem;
    }
    .btn-secondary:hover {
        background: #f8fafc;
    }
"#;
