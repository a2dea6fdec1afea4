use yew::prelude::*;

/// Stroke icons drawn inline so no icon font has to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    LayoutGrid,
    FileText,
    Quote,
    Mic,
    Timer,
    Target,
    Library,
    Zap,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    X,
    Check,
    ArrowLeft,
    Mail,
}

impl Icon {
    fn shapes(self) -> Html {
        match self {
            Icon::LayoutGrid => html! {
                <>
                    <rect x="3" y="3" width="7" height="7" rx="1" />
                    <rect x="14" y="3" width="7" height="7" rx="1" />
                    <rect x="14" y="14" width="7" height="7" rx="1" />
                    <rect x="3" y="14" width="7" height="7" rx="1" />
                </>
            },
            Icon::FileText => html! {
                <>
                    <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
                    <path d="M14 2v4a2 2 0 0 0 2 2h4" />
                    <path d="M16 13H8" />
                    <path d="M16 17H8" />
                </>
            },
            Icon::Quote => html! {
                <>
                    <path d="M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6Z" />
                    <path d="M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6Z" />
                </>
            },
            Icon::Mic => html! {
                <>
                    <path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z" />
                    <path d="M19 10v2a7 7 0 0 1-14 0v-2" />
                    <line x1="12" x2="12" y1="19" y2="22" />
                </>
            },
            Icon::Timer => html! {
                <>
                    <line x1="10" x2="14" y1="2" y2="2" />
                    <line x1="12" x2="15" y1="14" y2="11" />
                    <circle cx="12" cy="14" r="8" />
                </>
            },
            Icon::Target => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
            Icon::Library => html! {
                <>
                    <path d="m16 6 4 14" />
                    <path d="M12 6v14" />
                    <path d="M8 8v12" />
                    <path d="M4 4v16" />
                </>
            },
            Icon::Zap => html! {
                <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14Z" />
            },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::ChevronLeft => html! { <path d="m15 18-6-6 6-6" /> },
            Icon::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
            Icon::X => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
            Icon::Check => html! { <path d="M20 6 9 17l-5-5" /> },
            Icon::ArrowLeft => html! {
                <>
                    <path d="m12 19-7-7 7-7" />
                    <path d="M19 12H5" />
                </>
            },
            Icon::Mail => html! {
                <>
                    <rect width="20" height="16" x="2" y="4" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
        }
    }

    pub fn view(self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", class)}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { self.shapes() }
            </svg>
        }
    }
}
