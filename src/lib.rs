//! Savepoint - a terminal save-data manager
//!
//! Browse a library of per-title save data in a paged icon grid, scroll each
//! title's backup list, and trigger backup/restore operations against a
//! filesystem copy engine.

pub mod app;
pub mod core;
pub mod engine;
pub mod error;
pub mod format;
pub mod handler;
pub mod nav;
pub mod provider;
pub mod render;
