pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    Clock, DoctorRepository, DoctorService, IdGenerator, OrderRepository, OrderService,
    PatientRepository, PatientService,
};

pub use cli::{Commands, ServiceKind};

pub use connector::{
    serve, ApiError, Container, ContainerConfig, InMemoryDoctorRepository,
    InMemoryOrderRepository, InMemoryPatientRepository, InMemoryStore, Router, ServeConfig,
    SystemClock, UuidGenerator,
};

pub use domain::{
    Doctor, DoctorUpdate, DomainError, FieldUpdate, NewDoctor, NewOrder, NewPatient, Order,
    OrderStatus, OrderUpdate, Patient, PatientStats, PatientStatus, PatientUpdate, Record,
    Specialty,
};
