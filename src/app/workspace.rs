//! Workspace - Main Shell
//!
//! The workspace is the main container: title bar on top, then the
//! sidebar and the routed content area side by side.

use gpui::{Context, Entity, Window, prelude::*};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use crate::views::{HelpdeskContent, HelpdeskSidebar, HelpdeskTitleBar};

/// Main workspace containing the application layout
pub struct HelpdeskWorkspace {
    title_bar: Entity<HelpdeskTitleBar>,
    sidebar: Entity<HelpdeskSidebar>,
    content: Entity<HelpdeskContent>,
}

impl HelpdeskWorkspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| HelpdeskTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| HelpdeskSidebar::new(window, cx));
        let content = cx.new(|cx| HelpdeskContent::new(window, cx));

        Self {
            title_bar,
            sidebar,
            content,
        }
    }
}

impl Render for HelpdeskWorkspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
    }
}
