//! Marquee Admin library.
//!
//! This crate provides the admin functionality as a library, allowing it to
//! be tested and reused (the CLI uses the repositories for seeding).
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - `PostgreSQL` (sqlx) for stores, billboards, and categories
//! - JSON API under `/api` consumed by `marquee-client`
//!
//! Authentication is deliberately absent: deploy behind an identity-aware
//! proxy or VPN that owns sessions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;
pub mod state;
