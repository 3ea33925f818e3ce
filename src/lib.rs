//! Functional core of the Aktenverwaltung (Department of Justice case
//! management) system: JSON-file-backed collections, the role/capability
//! gate, and the indictment workflow state machine.
//!
//! The presentation layer (HTML, routing, login) lives elsewhere; it passes
//! an [`auth::Identity`] into every gated operation and renders the
//! [`errors::AppError`] outcomes.

pub mod auth;
pub mod errors;
pub mod models;
pub mod store;
pub mod workflow;

pub use errors::AppError;
pub use store::JsonStore;
