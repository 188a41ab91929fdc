//! Sidebar Navigation Component
//!
//! Collapsible navigation sidebar. The burger button animates the panel
//! between its expanded and collapsed widths and the navigation buttons
//! drop their text labels while collapsed.

use std::time::Duration;

use crate::assets::CustomIconName;
use crate::constants::{NAV_BUTTON_HEIGHT, SIDEBAR_ANIMATION_MS};
use crate::states::{HelpdeskStore, Route, SidebarState, i18n_sidebar};
use gpui::{
    Animation, AnimationExt, AnyElement, ClickEvent, Context, SharedString, Subscription, Window,
    div, ease_in_out, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

/// Sidebar navigation component
pub struct HelpdeskSidebar {
    /// Collapse/expand state and animation generation
    state: SidebarState,
    /// Current route for highlighting
    current_route: Route,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl HelpdeskSidebar {
    /// Create a new sidebar
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<HelpdeskStore>();
        let app_state = store.app_state();
        let current_route = store.read(cx).route();

        // Subscribe to route changes
        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
                cx.notify();
            }
        }));

        Self {
            state: SidebarState::default(),
            current_route,
            _subscriptions: subscriptions,
        }
    }

    fn route_icon(route: Route) -> Icon {
        match route {
            Route::Home => Icon::new(IconName::LayoutDashboard),
            Route::Documents => Icon::from(CustomIconName::Documents),
            Route::Settings => Icon::new(IconName::Settings),
        }
    }

    /// Render the burger button that toggles the collapse animation
    fn render_toggle_button(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let tooltip_label = i18n_sidebar(cx, "toggle");

        let btn = Button::new("sidebar-toggle")
            .ghost()
            .w_full()
            .h(px(NAV_BUTTON_HEIGHT))
            .child(
                h_flex()
                    .items_center()
                    .justify_center()
                    .child(Icon::from(CustomIconName::Menu)),
            )
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.state.toggle();
                cx.notify();
            }));

        div()
            .id("sidebar-toggle-wrapper")
            .w_full()
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .child(btn)
    }

    /// Render a navigation button
    fn render_nav_button(&self, route: Route, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.current_route == route;
        let expanded = self.state.expanded();
        let label = i18n_sidebar(cx, route.title_key());
        let tooltip_label = label.clone();
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let inner = if expanded {
            h_flex()
                .items_center()
                .gap_2()
                .px_2()
                .child(Self::route_icon(route))
                .child(Label::new(label))
                .into_any_element()
        } else {
            h_flex()
                .items_center()
                .justify_center()
                .w_full()
                .child(Self::route_icon(route))
                .into_any_element()
        };

        let btn = Button::new(route.title_key())
            .ghost()
            .w_full()
            .h(px(NAV_BUTTON_HEIGHT))
            .child(inner)
            .on_click(move |_, _, cx| {
                cx.update_global::<HelpdeskStore, ()>(|store, cx| {
                    store.update(cx, |state, cx| {
                        state.go_to(route);
                        cx.notify();
                    });
                });
            });

        div()
            .id(SharedString::from(format!("nav-{:?}", route)))
            .w_full()
            // The label is hidden while collapsed, so surface it as a tooltip
            .when(!expanded, |this| {
                this.tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            })
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for HelpdeskSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        let mut nav_items: Vec<AnyElement> = Vec::new();
        nav_items.push(self.render_toggle_button(cx).into_any_element());
        for route in Route::all() {
            nav_items.push(self.render_nav_button(*route, cx).into_any_element());
        }

        let panel = v_flex()
            .id("sidebar")
            .h_full()
            .flex_none()
            .overflow_hidden()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .py_4()
            .gap_2()
            .children(nav_items);

        // Replay the width interpolation once per toggle; the resting width
        // needs no animation element at all.
        if self.state.should_animate() {
            let (from, to) = self.state.animation_span();
            panel
                .with_animation(
                    ("sidebar-width", self.state.toggles()),
                    Animation::new(Duration::from_millis(SIDEBAR_ANIMATION_MS))
                        .with_easing(ease_in_out),
                    move |panel, delta| panel.w(px(from + (to - from) * delta)),
                )
                .into_any_element()
        } else {
            panel.w(px(self.state.width())).into_any_element()
        }
    }
}
