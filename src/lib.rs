//! A small multi-author snippet board.
//!
//! Snippets live in an in-memory, append-only [`store`]; the [`feed`] module
//! projects them into display entries, which [`api`] serves as HTML pages and
//! JSON.

pub mod api;
pub mod client;
pub mod config;
pub mod feed;
pub mod models;
pub mod render;
pub mod store;
