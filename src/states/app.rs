//! Application State
//!
//! Global application state: routing, persisted UI preferences (locale and
//! theme), and the global store handle.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::DashboardState;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Application routes
///
/// Exactly one route is active at any time; the content panel shows the
/// page belonging to the active route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Home page - dashboard with ticket statistics
    #[default]
    Home,
    /// Documents page
    Documents,
    /// Application settings page
    Settings,
}

impl Route {
    /// Get the translation key for the route's navigation label
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Documents => "documents",
            Route::Settings => "settings",
        }
    }

    /// All routes, in sidebar order
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Documents, Route::Settings]
    }
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

/// Settings action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum SettingsAction {
    Open,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("helpdesk-gui.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Application state; only the UI preferences (locale, theme) persist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelpdeskAppState {
    #[serde(skip)]
    route: Route,
    locale: Option<String>,
    theme: Option<String>,
}

impl HelpdeskAppState {
    /// Load state from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once("-") {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route) {
        self.route = route;
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<HelpdeskStore>()`
#[derive(Clone)]
pub struct HelpdeskStore {
    app_state: Entity<HelpdeskAppState>,
    dashboard: Entity<DashboardState>,
}

impl HelpdeskStore {
    /// Create a new global store
    pub fn new(app_state: Entity<HelpdeskAppState>, dashboard: Entity<DashboardState>) -> Self {
        Self {
            app_state,
            dashboard,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<HelpdeskAppState> {
        self.app_state.clone()
    }

    /// Get the dashboard state entity
    pub fn dashboard(&self) -> Entity<DashboardState> {
        self.dashboard.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a HelpdeskAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut HelpdeskAppState, &mut Context<HelpdeskAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for HelpdeskStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &HelpdeskAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut HelpdeskAppState) + Send + 'static,
{
    let store = cx.global::<HelpdeskStore>().clone();

    cx.spawn(async move |cx| {
        // Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state);
            cx.notify();
            state.clone()
        });

        // Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved");
                    }
                })
                .await;
        }

        // Refresh windows so locale/theme changes take effect everywhere
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
        assert_eq!(HelpdeskAppState::new().route(), Route::Home);
    }

    #[test]
    fn test_all_routes_are_distinct() {
        let routes = Route::all();
        assert_eq!(routes.len(), 3);
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.title_key(), b.title_key());
            }
        }
    }

    #[test]
    fn test_go_to_selects_route_regardless_of_prior_state() {
        let mut state = HelpdeskAppState::new();
        for &prior in Route::all() {
            for &target in Route::all() {
                state.go_to(prior);
                state.go_to(target);
                assert_eq!(state.route(), target);
            }
        }
    }

    #[test]
    fn test_theme_mode_round_trip() {
        let mut state = HelpdeskAppState::new();
        assert_eq!(state.theme(), None);

        state.set_theme(Some(ThemeMode::Dark));
        assert_eq!(state.theme(), Some(ThemeMode::Dark));

        state.set_theme(Some(ThemeMode::Light));
        assert_eq!(state.theme(), Some(ThemeMode::Light));

        state.set_theme(None);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_preferences_survive_toml_round_trip() {
        let mut state = HelpdeskAppState::new();
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Dark));
        state.go_to(Route::Settings);

        let serialized = toml::to_string(&state).expect("serialize");
        let loaded: HelpdeskAppState = toml::from_str(&serialized).expect("deserialize");

        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
        // The route never persists; a fresh load always starts at Home.
        assert_eq!(loaded.route(), Route::Home);
    }

    #[test]
    fn test_empty_config_yields_defaults() {
        let loaded: HelpdeskAppState = toml::from_str("").expect("deserialize");
        assert_eq!(loaded.route(), Route::Home);
        assert_eq!(loaded.theme(), None);
        assert_eq!(loaded.locale(), "en");
    }
}
