//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, BorrowAppContext, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px,
};
use gpui_component::{Root, Theme, ThemeMode};
use rust_i18n::t;
use tracing::{error, info, warn};

use crate::app::workspace::HelpdeskWorkspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{
    DashboardState, HelpdeskAppState, HelpdeskStore, LocaleAction, Route, SettingsAction,
    ThemeAction, update_app_state_and_save,
};

actions!(helpdesk, [Quit]);

/// Run the Helpdesk GUI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Load persisted UI preferences
        let state = HelpdeskAppState::try_load().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load config; using defaults");
            HelpdeskAppState::new()
        });
        let locale = state.locale().to_string();
        let saved_theme = state.theme();

        // Initialize global store
        let app_state = cx.new(|_| state);
        let dashboard = cx.new(|_| DashboardState::default());
        cx.set_global(HelpdeskStore::new(app_state, dashboard));

        // Apply the saved theme, or follow the system appearance
        match saved_theme {
            Some(mode) => Theme::change(mode, None, cx),
            None => Theme::sync_system_appearance(None, cx),
        }

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(handle_theme_action);
        cx.on_action(handle_locale_action);
        cx.on_action(|_: &SettingsAction, cx: &mut App| {
            cx.update_global::<HelpdeskStore, ()>(|store, cx| {
                store.update(cx, |state, cx| {
                    state.go_to(Route::Settings);
                    cx.notify();
                });
            });
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(
                    t!("app.title", locale = &locale).to_string(),
                )),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let window = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| HelpdeskWorkspace::new(window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });
        if let Err(err) = window {
            error!(error = %err, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn handle_theme_action(action: &ThemeAction, cx: &mut App) {
    let mode = match action {
        ThemeAction::Light => Some(ThemeMode::Light),
        ThemeAction::Dark => Some(ThemeMode::Dark),
        ThemeAction::System => None,
    };
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
    update_app_state_and_save(cx, "set-theme", move |state| state.set_theme(mode));
}

fn handle_locale_action(action: &LocaleAction, cx: &mut App) {
    let locale = match action {
        LocaleAction::En => "en",
        LocaleAction::Zh => "zh",
    };
    info!(locale, "Switching locale");
    update_app_state_and_save(cx, "set-locale", move |state| {
        state.set_locale(locale.to_string())
    });
}
