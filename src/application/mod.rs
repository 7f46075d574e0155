//! # Application Layer
//!
//! Repository ports and the use cases that validate input before reaching them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
