//! Helpdesk GUI Client Library
//!
//! This crate provides the main application logic for the Helpdesk GUI
//! client, a native desktop shell for a helpdesk ticketing system.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod views;
