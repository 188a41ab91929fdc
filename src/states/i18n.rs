//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::HelpdeskStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "app" namespace
pub fn i18n_app(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<HelpdeskStore>().read(cx).locale();
    t!(format!("app.{key}"), locale = locale).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<HelpdeskStore>().read(cx).locale();
    t!(format!("sidebar.{key}"), locale = locale).into()
}

/// Get translated string from "home" namespace
pub fn i18n_home(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<HelpdeskStore>().read(cx).locale();
    t!(format!("home.{key}"), locale = locale).into()
}

/// Get translated string from "pages" namespace
pub fn i18n_pages(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<HelpdeskStore>().read(cx).locale();
    t!(format!("pages.{key}"), locale = locale).into()
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    #[test]
    fn test_stat_card_labels_in_english() {
        assert_eq!(t!("home.stat_open", locale = "en"), "Open Tickets");
        assert_eq!(t!("home.stat_resolved", locale = "en"), "Resolved");
        assert_eq!(t!("home.stat_pending", locale = "en"), "Pending");
    }

    #[test]
    fn test_navigation_labels_exist_in_both_locales() {
        for locale in ["en", "zh"] {
            for key in ["sidebar.home", "sidebar.documents", "sidebar.settings"] {
                let translated = t!(key, locale = locale).to_string();
                assert_ne!(translated, key, "missing translation for {key} ({locale})");
            }
        }
    }
}
