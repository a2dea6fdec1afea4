//! Copy and imagery for the landing page. Everything here is fixed at compile
//! time and indexed by position, which stays stable for the whole session.

use crate::components::icon::Icon;
use crate::config::images;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureTab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardTone {
    Sky,
    Purple,
    Green,
    Orange,
}

impl CardTone {
    pub fn class(self) -> &'static str {
        match self {
            CardTone::Sky => "tone-sky",
            CardTone::Purple => "tone-purple",
            CardTone::Green => "tone-green",
            CardTone::Orange => "tone-orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tone: CardTone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarqueeStyle {
    Serif,
    Heavy,
    Italic,
    Mono,
    Sans,
}

impl MarqueeStyle {
    pub fn class(self) -> &'static str {
        match self {
            MarqueeStyle::Serif => "marquee-serif",
            MarqueeStyle::Heavy => "marquee-heavy",
            MarqueeStyle::Italic => "marquee-italic",
            MarqueeStyle::Mono => "marquee-mono",
            MarqueeStyle::Sans => "marquee-sans",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhoneSlot {
    Left,
    Center,
    Right,
}

/// One of the three hero mockups and its entrance timing, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroPhone {
    pub slot: PhoneSlot,
    pub image: &'static str,
    pub alt: &'static str,
    pub delay: f32,
    pub duration: f32,
}

pub const PAGE_TITLE: &str = "Chapterly - Your Story, Your Way";
pub const HERO_TITLE: &str = "Meet Chapterly";
pub const HERO_SUBTITLE: &str = "The ultimate offline-first reading companion. \
    Track progress, save wisdom, and organize your digital library.";

pub static HERO_PHONES: [HeroPhone; 3] = [
    HeroPhone {
        slot: PhoneSlot::Left,
        image: images::HERO_LEFT,
        alt: "Login",
        delay: 0.4,
        duration: 1.2,
    },
    HeroPhone {
        slot: PhoneSlot::Right,
        image: images::HERO_RIGHT,
        alt: "Splash",
        delay: 0.4,
        duration: 1.2,
    },
    HeroPhone {
        slot: PhoneSlot::Center,
        image: images::HERO_CENTER,
        alt: "Home",
        delay: 0.1,
        duration: 1.0,
    },
];

pub static FEATURE_TABS: [FeatureTab; 3] = [
    FeatureTab {
        id: "library",
        label: "Library",
        icon: Icon::LayoutGrid,
        title: "Your collection, organized.",
        text: "Visualize your reading journey. Create custom collections and never lose track of a book again.",
        image: images::LIBRARY_1,
    },
    FeatureTab {
        id: "details",
        label: "Insights",
        icon: Icon::FileText,
        title: "Deep dive into every page.",
        text: "Track start dates, finish dates, and page progress. Understand your reading habits.",
        image: images::LIBRARY_2,
    },
    FeatureTab {
        id: "notes",
        label: "Wisdom",
        icon: Icon::Quote,
        title: "Capture thoughts.",
        text: "Save highlights instantly. Add personal notes to quotes and review them later.",
        image: images::NOTES_1,
    },
];

pub static BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: Icon::Quote,
        title: "Save Quotes",
        description: "Capture wisdom instantly. Scan pages or type them out.",
    },
    Benefit {
        icon: Icon::Mic,
        title: "Voice to Text",
        description: "Dictate your thoughts and notes directly into the app.",
    },
    Benefit {
        icon: Icon::Timer,
        title: "Pomodoro Timer",
        description: "Stay focused with built-in reading sessions.",
    },
    Benefit {
        icon: Icon::Target,
        title: "Reading Goals",
        description: "Set annual or monthly goals to keep yourself on track.",
    },
    Benefit {
        icon: Icon::Library,
        title: "Infinite Shelves",
        description: "Create unlimited lists. Sort by genre, mood, or priority.",
    },
    Benefit {
        icon: Icon::Zap,
        title: "Offline Sync",
        description: "No internet? No problem. Works everywhere.",
    },
];

pub static CAROUSEL_CARDS: [CarouselCard; 4] = [
    CarouselCard {
        title: "Reading Stats",
        description: "Visualize habits & finish books.",
        image: images::LIBRARY_2,
        tone: CardTone::Sky,
    },
    CarouselCard {
        title: "Save Wisdom",
        description: "Extract insights instantly.",
        image: images::NOTES_1,
        tone: CardTone::Purple,
    },
    CarouselCard {
        title: "Daily Motivation",
        description: "Quotes to keep streaks alive.",
        image: images::HERO_CENTER,
        tone: CardTone::Green,
    },
    CarouselCard {
        title: "Clean Library",
        description: "Organize your digital shelf.",
        image: images::LIBRARY_1,
        tone: CardTone::Orange,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is Chapterly free?",
        answer: "Yes! The core library and tracking features are completely free forever.",
        icon: None,
    },
    FaqEntry {
        question: "How does the offline mode work?",
        answer: "We store your data locally on your device. It syncs only when you want it to.",
        icon: Some(Icon::Zap),
    },
    FaqEntry {
        question: "Can I import from Goodreads?",
        answer: "We are building a CSV importer right now.",
        icon: Some(Icon::FileText),
    },
];

pub static MARQUEE: [(&str, MarqueeStyle); 5] = [
    ("Goodreads", MarqueeStyle::Serif),
    ("TheVerge", MarqueeStyle::Heavy),
    ("Medium", MarqueeStyle::Italic),
    ("ProductHunt", MarqueeStyle::Mono),
    ("TechCrunch", MarqueeStyle::Sans),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn wisdom_tab_shows_notes() {
        let tab = &FEATURE_TABS[2];
        assert_eq!(tab.label, "Wisdom");
        assert_eq!(tab.title, "Capture thoughts.");
        assert_eq!(tab.image, images::NOTES_1);
        assert_eq!(FEATURE_TABS[0].label, "Library");
    }

    #[test]
    fn tab_ids_are_unique() {
        let ids: HashSet<&str> = FEATURE_TABS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), FEATURE_TABS.len());
    }

    #[test]
    fn hero_center_phone_leads_the_sides() {
        let center = HERO_PHONES
            .iter()
            .find(|p| p.slot == PhoneSlot::Center)
            .map(|p| p.delay);
        assert_eq!(center, Some(0.1));
        assert!(HERO_PHONES
            .iter()
            .filter(|p| p.slot != PhoneSlot::Center)
            .all(|p| p.delay > 0.1));
    }

    #[test]
    fn faq_questions_are_distinct() {
        let questions: HashSet<&str> = FAQS.iter().map(|f| f.question).collect();
        assert_eq!(questions.len(), 3);
        assert_eq!(FAQS[0].question, "Is Chapterly free?");
    }

    #[test]
    fn card_tones_map_to_distinct_classes() {
        let classes: HashSet<&str> = CAROUSEL_CARDS.iter().map(|c| c.tone.class()).collect();
        assert_eq!(classes.len(), CAROUSEL_CARDS.len());
    }
}
