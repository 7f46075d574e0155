//! # Connector Layer
//!
//! Implementations of the application ports and the HTTP surface:
//! - In-memory repositories over a shared generic store
//! - UUID identifiers and the system clock
//! - axum controllers, router and server

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
