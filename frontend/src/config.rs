//! Site-wide constants. A few can be overridden at build time through
//! environment variables, nothing is read at runtime.

pub const BRAND: &str = "Chapterly";
pub const LOGO: &str = "/image.png";
pub const TWITTER_URL: &str = "https://twitter.com/chapterlyapp";
pub const COPYRIGHT: &str = "© 2025 Chapterly Inc.";

const DEFAULT_APP_STORE_URL: &str = "https://apps.apple.com/ca/app/chapterly/id6755092891";
const DEFAULT_CONTACT_EMAIL: &str = "gautamniish@gmail.com";

/// Distance one carousel arrow press scrolls, in CSS pixels.
pub const CAROUSEL_STEP_PX: f64 = 300.0;

pub mod images {
    pub const HERO_CENTER: &str = "/hero-center.png";
    pub const HERO_LEFT: &str = "/hero-left.png";
    pub const HERO_RIGHT: &str = "/hero-right.png";
    pub const LIBRARY_1: &str = "/feature-library-1.png";
    pub const LIBRARY_2: &str = "/feature-library-2.png";
    pub const NOTES_1: &str = "/feature-notes-1.png";
    pub const APPLE_BADGE: &str = "/apple.png";
    pub const APPLE_BADGE_DARK: &str = "/apple-logo.png";
}

pub fn get_app_store_url() -> &'static str {
    option_env!("CHAPTERLY_APP_STORE_URL").unwrap_or(DEFAULT_APP_STORE_URL)
}

pub fn get_contact_email() -> &'static str {
    option_env!("CHAPTERLY_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", get_contact_email())
}

pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CHAPTERLY_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn log_level_falls_back_to_info() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("chatty")), log::Level::Info);
        assert_eq!(parse_log_level(Some(" debug ")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
    }

    #[test]
    fn mailto_uses_contact_email() {
        assert_eq!(contact_mailto(), format!("mailto:{}", get_contact_email()));
        assert!(get_app_store_url().starts_with("https://"));
    }
}
