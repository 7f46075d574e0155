mod clock;
mod doctor_repository;
mod id_generator;
mod order_repository;
mod patient_repository;

pub use clock::*;
pub use doctor_repository::*;
pub use id_generator::*;
pub use order_repository::*;
pub use patient_repository::*;
