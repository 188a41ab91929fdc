//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → notify → UI Refresh
//! ```

mod app;
mod dashboard;
mod i18n;
mod sidebar;

pub use app::*;
pub use dashboard::*;
pub use i18n::*;
pub use sidebar::*;
