//! Main Content Area
//!
//! Routes to one of the three static pages based on the current
//! application route; the page entities never reload data on navigation.

use crate::assets::CustomIconName;
use crate::states::{DashboardState, HelpdeskStore, Route, i18n_home, i18n_pages};
use gpui::{Context, Entity, Rgba, Subscription, Window, div, prelude::*, px, rgb, white};
use gpui_component::{
    ActiveTheme, Icon,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

// Stat card palette from the mock-up design
fn stat_open_bg() -> Rgba {
    rgb(0xff8c42)
}
fn stat_resolved_bg() -> Rgba {
    rgb(0x4caf50)
}
fn stat_pending_bg() -> Rgba {
    rgb(0xffc107)
}

/// Main content container component
pub struct HelpdeskContent {
    /// Current route
    current_route: Route,
    /// Dashboard state entity
    dashboard: Entity<DashboardState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl HelpdeskContent {
    /// Create a new content view
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<HelpdeskStore>();
        let current_route = store.read(cx).route();
        let dashboard = store.dashboard();

        // Subscribe to route changes
        let app_state = store.app_state();
        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
                cx.notify();
            }
        }));

        Self {
            current_route,
            dashboard,
            _subscriptions: subscriptions,
        }
    }

    fn render_stat_card(
        &self,
        label: impl Into<gpui::SharedString>,
        value: u32,
        bg: Rgba,
    ) -> impl IntoElement {
        div().p_5().rounded_lg().bg(bg).min_w(px(160.0)).child(
            v_flex()
                .gap_1()
                .child(Label::new(label).text_sm().text_color(white()))
                .child(
                    Label::new(format!("{value}"))
                        .text_2xl()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(white()),
                ),
        )
    }

    /// Render the home dashboard
    fn render_home(&self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dashboard = self.dashboard.read(cx);
        let stats = dashboard.stats();
        let recent: Vec<_> = dashboard.recent().to_vec();
        let muted = cx.theme().muted_foreground;

        v_flex()
            .size_full()
            .p_8()
            .gap_5()
            // Header
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::Ticket))
                    .child(
                        Label::new(i18n_home(cx, "title"))
                            .text_2xl()
                            .font_weight(gpui::FontWeight::BOLD),
                    ),
            )
            .child(Label::new(i18n_home(cx, "subtitle")).text_color(muted))
            // Stats
            .child(
                h_flex()
                    .gap_5()
                    .child(self.render_stat_card(
                        i18n_home(cx, "stat_open"),
                        stats.open,
                        stat_open_bg(),
                    ))
                    .child(self.render_stat_card(
                        i18n_home(cx, "stat_resolved"),
                        stats.resolved,
                        stat_resolved_bg(),
                    ))
                    .child(self.render_stat_card(
                        i18n_home(cx, "stat_pending"),
                        stats.pending,
                        stat_pending_bg(),
                    )),
            )
            // New ticket button; no handler is wired, the mock-up ends here
            .child(
                h_flex().child(
                    Button::new("new-ticket")
                        .primary()
                        .child(
                            h_flex()
                                .items_center()
                                .gap_2()
                                .child(Icon::from(CustomIconName::Ticket))
                                .child(Label::new(i18n_home(cx, "new_ticket"))),
                        ),
                ),
            )
            // Recent activity
            .child(
                v_flex()
                    .mt_4()
                    .gap_2()
                    .child(Label::new(i18n_home(cx, "recent")).text_lg())
                    .child(if recent.is_empty() {
                        Label::new(i18n_home(cx, "recent_empty"))
                            .text_sm()
                            .text_color(muted)
                            .into_any_element()
                    } else {
                        v_flex()
                            .gap_1()
                            .children(
                                recent
                                    .into_iter()
                                    .map(|ticket| Label::new(ticket.summary).text_sm()),
                            )
                            .into_any_element()
                    }),
            )
    }

    /// Render the documents placeholder page
    fn render_documents(&self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(
                Label::new(i18n_pages(cx, "documents"))
                    .text_xl()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    /// Render the settings placeholder page
    fn render_settings(&self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(
                Label::new(i18n_pages(cx, "settings"))
                    .text_xl()
                    .text_color(cx.theme().muted_foreground),
            )
    }
}

impl Render for HelpdeskContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.current_route {
            Route::Home => self.render_home(window, cx).into_any_element(),
            Route::Documents => self.render_documents(window, cx).into_any_element(),
            Route::Settings => self.render_settings(window, cx).into_any_element(),
        };

        div()
            .id("content")
            .flex_1()
            .h_full()
            .bg(cx.theme().background)
            .child(content)
    }
}
