pub mod doctor_controller;
pub mod health_controller;
pub mod order_controller;
pub mod patient_controller;

pub use doctor_controller::DoctorController;
pub use health_controller::HealthController;
pub use order_controller::OrderController;
pub use patient_controller::PatientController;
