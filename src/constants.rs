//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar width when expanded, in pixels
pub const SIDEBAR_EXPANDED_WIDTH: f32 = 200.0;

/// Sidebar width when collapsed (icons only), in pixels
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 60.0;

/// Duration of the sidebar expand/collapse animation
pub const SIDEBAR_ANIMATION_MS: u64 = 300;

/// Navigation button height
pub const NAV_BUTTON_HEIGHT: f32 = 40.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;
