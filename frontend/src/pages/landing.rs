use yew::prelude::*;

use crate::components::benefit_grid::BenefitGrid;
use crate::components::button::BUTTON_CSS;
use crate::components::carousel::PotentialCarousel;
use crate::components::faq::FaqList;
use crate::components::feature_tabs::FeatureTabs;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::logo_marquee::LogoMarquee;
use crate::components::scroll_reveal::{ScrollReveal, SCROLL_REVEAL_CSS};
use crate::components::waitlist_modal::WaitlistModal;
use crate::content::{FAQS, PAGE_TITLE};
use crate::pages::use_page_setup;
use crate::state::{ModalAction, ModalVisibility};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_page_setup(PAGE_TITLE);
    let modal = use_reducer(ModalVisibility::default);

    let open_waitlist = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Open))
    };
    let close_waitlist = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    html! {
        <div class="landing-page">
            if modal.open {
                <WaitlistModal on_close={close_waitlist} />
            }

            <main>
                <Hero on_join_waitlist={open_waitlist} />

                <LogoMarquee />

                <section class="landing-section">
                    <ScrollReveal class="section-inner">
                        <div class="section-heading">
                            <h2>{"Built for readers"}</h2>
                            <p>{"Tap to see how Chapterly adapts to your reading style."}</p>
                        </div>
                        <FeatureTabs />
                    </ScrollReveal>
                </section>

                <section class="landing-section tinted">
                    <ScrollReveal class="section-inner">
                        <div class="section-heading">
                            <span class="eyebrow eyebrow-green">{"Benefits"}</span>
                            <h2 class="display">{"Why Chapterly?"}</h2>
                        </div>
                        <BenefitGrid />
                    </ScrollReveal>
                </section>

                <section class="landing-section clipped">
                    <ScrollReveal class="section-inner flush">
                        <div class="section-heading">
                            <span class="eyebrow eyebrow-orange">{"Potential"}</span>
                            <h2>{"Unlock your reading potential"}</h2>
                        </div>
                        <PotentialCarousel />
                    </ScrollReveal>
                </section>

                <section class="landing-section ruled">
                    <ScrollReveal class="section-inner narrow">
                        <div class="section-heading">
                            <h2>{"Common Questions"}</h2>
                        </div>
                        <FaqList entries={FAQS} />
                    </ScrollReveal>
                </section>

                <Footer />
            </main>
            <style>{BUTTON_CSS}</style>
            <style>{SCROLL_REVEAL_CSS}</style>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #fff;
        color: #0f172a;
        overflow-x: hidden;
    }
    .landing-page ::selection {
        background: #bae6fd;
    }
    .landing-section {
        padding: 5rem 0;
        background: #fff;
    }
    .landing-section.tinted {
        background: #f8fafc;
    }
    .landing-section.clipped {
        overflow: hidden;
    }
    .landing-section.ruled {
        border-top: 1px solid #f8fafc;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section-inner.flush {
        padding: 0;
    }
    .section-inner.narrow {
        max-width: 48rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 3rem;
        padding: 0 1rem;
    }
    .section-heading h2 {
        font-size: 1.875rem;
        font-weight: 700;
        line-height: 1.25;
        margin-bottom: 1rem;
        color: #0f172a;
    }
    .section-heading p {
        max-width: 36rem;
        margin: 0 auto;
        color: #475569;
        font-size: 1rem;
    }
    .eyebrow {
        display: block;
        font-weight: 700;
        letter-spacing: 0.1em;
        font-size: 0.75rem;
        text-transform: uppercase;
        margin-bottom: 0.75rem;
    }
    .eyebrow-green { color: #16a34a; }
    .eyebrow-orange { color: #f97316; }
    @media (min-width: 768px) {
        .landing-section { padding: 8rem 0; }
        .landing-section.ruled { padding: 6rem 0; }
        .section-inner.flush { padding: 0 1rem; }
        .section-heading { margin-bottom: 4rem; }
        .section-heading h2 { font-size: 3rem; margin-bottom: 1.5rem; }
        .section-heading h2.display { font-size: 3.75rem; }
        .section-heading p { font-size: 1.125rem; }
    }
"#;
