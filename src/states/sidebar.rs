//! Sidebar State
//!
//! Pure collapse/expand state for the navigation sidebar. The view layer
//! reads the animation span from here; this struct never touches GPUI.

use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH};

/// Collapse state of the navigation sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether the sidebar currently shows icon+text (true) or icon only
    expanded: bool,
    /// Number of toggles so far; keys the width animation so each toggle
    /// replays it exactly once
    toggles: usize,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            expanded: true,
            toggles: 0,
        }
    }
}

impl SidebarState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Animation generation; bumped on every toggle
    pub fn toggles(&self) -> usize {
        self.toggles
    }

    /// The first render after startup shows the resting width directly
    pub fn should_animate(&self) -> bool {
        self.toggles > 0
    }

    /// Flip between expanded and collapsed
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        self.toggles += 1;
    }

    /// Target width for the current state, in pixels
    pub fn width(&self) -> f32 {
        if self.expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }

    /// Interpolation endpoints `(from, to)` for the width animation
    pub fn animation_span(&self) -> (f32, f32) {
        if self.expanded {
            (SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH)
        } else {
            (SIDEBAR_EXPANDED_WIDTH, SIDEBAR_COLLAPSED_WIDTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut state = SidebarState::default();
        assert!(state.expanded());

        state.toggle();
        assert!(!state.expanded());

        state.toggle();
        assert!(state.expanded());
    }

    #[test]
    fn test_width_matches_flag() {
        let mut state = SidebarState::default();
        assert_eq!(state.width(), SIDEBAR_EXPANDED_WIDTH);

        state.toggle();
        assert_eq!(state.width(), SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_animation_span_runs_toward_current_width() {
        let mut state = SidebarState::default();

        state.toggle();
        assert_eq!(
            state.animation_span(),
            (SIDEBAR_EXPANDED_WIDTH, SIDEBAR_COLLAPSED_WIDTH)
        );

        state.toggle();
        assert_eq!(
            state.animation_span(),
            (SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH)
        );
    }

    #[test]
    fn test_toggle_does_not_change_route() {
        use crate::states::{HelpdeskAppState, Route};

        let mut app = HelpdeskAppState::new();
        app.go_to(Route::Documents);

        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert_eq!(app.route(), Route::Documents);

        sidebar.toggle();
        assert_eq!(app.route(), Route::Documents);
    }

    #[test]
    fn test_first_render_is_not_animated() {
        let mut state = SidebarState::default();
        assert!(!state.should_animate());

        state.toggle();
        assert!(state.should_animate());
        assert_eq!(state.toggles(), 1);

        state.toggle();
        assert_eq!(state.toggles(), 2);
    }
}
