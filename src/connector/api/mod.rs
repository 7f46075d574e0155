pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use error::{ApiError, ApiResult};
pub use router::Router;
pub use server::{serve, ServeConfig};
