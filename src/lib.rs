//! chocolate_house - flavor, ingredient and customer suggestion tracking
//! backend for a chocolate shop
//!
//! Layers, leaves first:
//! - `models`: records and typed request inputs
//! - `store`: SQLite schema, seed data and one function per statement
//! - `http_server`: axum routers, error mapping, server loop
//! - `cli`: `init` / `serve` commands

pub mod cli;
pub mod http_server;
pub mod models;
pub mod observability;
pub mod store;
