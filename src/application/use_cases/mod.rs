mod doctor_service;
mod order_service;
mod patient_service;
mod validation;

pub use doctor_service::*;
pub use order_service::*;
pub use patient_service::*;
