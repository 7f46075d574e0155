//! # Domain Layer
//!
//! Entities, update payloads and the domain error type.
//! This layer is independent of storage and HTTP concerns.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
