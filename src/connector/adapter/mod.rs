mod in_memory_doctor_repository;
mod in_memory_order_repository;
mod in_memory_patient_repository;
mod in_memory_store;
mod system_clock;
mod uuid_generator;

pub use in_memory_doctor_repository::*;
pub use in_memory_order_repository::*;
pub use in_memory_patient_repository::*;
pub use in_memory_store::*;
pub use system_clock::*;
pub use uuid_generator::*;
