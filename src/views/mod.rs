//! View Components
//!
//! UI components for the Helpdesk GUI application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├───────────┬─────────────────────────────────────────────────┤
//! │           │                                                  │
//! │  Sidebar  │                                                  │
//! │ (200px ⇄  │                    Content                       │
//! │   60px)   │                                                  │
//! │           │                                                  │
//! │           │                                                  │
//! └───────────┴─────────────────────────────────────────────────┘
//! ```

mod content;
mod sidebar;
mod title_bar;

pub use content::*;
pub use sidebar::*;
pub use title_bar::*;
