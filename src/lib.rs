//! Team directory core.
//!
//! State and persistence engine for a single-user team directory admin panel:
//! an ordered member collection backed by a SQLite key-value store, a
//! free-text filter, a multi-draft add-form with asynchronous image
//! attachment, and a read-only detail panel.

pub mod config;
pub mod directory;
pub mod errors;
pub mod form;
pub mod models;
pub mod panel;
pub mod search;
pub mod session;
pub mod store;
pub mod view;
