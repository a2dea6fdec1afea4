pub mod benefit_grid;
pub mod button;
pub mod carousel;
pub mod faq;
pub mod feature_tabs;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod legal_view;
pub mod logo_marquee;
pub mod scroll_reveal;
pub mod waitlist_modal;
