//! Marquee Core - Shared types library.
//!
//! This crate provides common types used across all Marquee components:
//! - `admin` - Store administration service (pages + JSON API)
//! - `client` - Headless form controllers driving the admin API
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity IDs
//! - [`forms`] - Validated form input schemas shared by server and clients

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod forms;
pub mod types;

pub use forms::*;
pub use types::*;
