//! # lore-server
//!
//! HTTP surface for the `lore` question-answering service: a single query
//! endpoint plus a health check, with every failure mapped to a uniform
//! `{kind, message}` envelope. See [`server::app_router`] for the routes
//! and [`config::Config`] for the startup configuration.

pub mod config;
pub mod server;

pub use config::Config;
pub use server::{AppState, app_router, run_server};
