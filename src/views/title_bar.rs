//! Title Bar Component
//!
//! Custom title bar with the app mark on the left and a settings dropdown
//! (language, theme, settings shortcut) on the right.

use crate::assets::CustomIconName;
use crate::states::{
    HelpdeskStore, LocaleAction, SettingsAction, ThemeAction, i18n_app, i18n_sidebar,
};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct HelpdeskTitleBar;

impl HelpdeskTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<HelpdeskStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_sidebar(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .separator()
            // Theme section
            .label(i18n_sidebar(cx, "theme"))
            .menu_with_check(
                i18n_sidebar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_sidebar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_sidebar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
            .separator()
            // Settings page shortcut
            .menu_element_with_icon(
                Icon::new(IconName::Settings2),
                Box::new(SettingsAction::Open),
                move |_window, cx| Label::new(i18n_sidebar(cx, "settings")),
            )
    }
}

impl Render for HelpdeskTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            // Left side - app mark and name
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_2()
                    .pl_4()
                    .child(Icon::from(CustomIconName::Ticket))
                    .child(Label::new(i18n_app(cx, "title")).text_sm()),
            )
            // Right side - settings dropdown
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Button::new("titlebar-settings")
                            .tooltip(i18n_sidebar(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
