mod doctor;
mod order;
mod patient;
mod record;

pub use doctor::*;
pub use order::*;
pub use patient::*;
pub use record::*;
