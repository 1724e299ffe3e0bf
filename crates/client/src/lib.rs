//! Marquee Client - form controllers for the admin API.
//!
//! This crate implements the entity form lifecycle used throughout the
//! admin: validate → submit → reload → notify, with a confirmation gate in
//! front of deletes. The controller is headless; whoever hosts it supplies
//! the services it talks to:
//!
//! - [`Notifier`] - transient success/error messages
//! - [`ViewContext`] - reload the current entity state, navigate
//! - [`EntityEndpoint`] - transport addressing one entity resource
//!
//! Nothing here is ambient or global: all three are handed to
//! [`FormController`] at construction, which keeps the lifecycle testable
//! with recording stubs and lets the CLI and future UIs share the exact
//! same behavior.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod form;
pub mod notify;

pub use api::{ApiClient, ApiError, EntityEndpoint, RestEndpoint};
pub use form::{DeleteOutcome, FormController, SubmitOutcome};
pub use notify::{Notifier, ViewContext};
