//! # Quill Blog Server
//!
//! Route handlers, middleware, and views for the blog service. The binary
//! in `main.rs` wires these to configuration and the HTTP server; the
//! integration tests wire them to in-memory stores.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod views;
