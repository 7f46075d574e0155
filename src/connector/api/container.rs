use std::sync::Arc;

use tracing::debug;

use crate::application::{Clock, IdGenerator};
use crate::{
    DoctorService, InMemoryDoctorRepository, InMemoryOrderRepository, InMemoryPatientRepository,
    OrderService, PatientService, SystemClock, UuidGenerator,
};

pub struct ContainerConfig {
    pub id_generator: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            id_generator: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        }
    }
}

/// Owns one repository per collection and the services built on top of them.
///
/// Built once at startup and handed to the controllers; nothing here is global.
pub struct Container {
    doctor_service: Arc<DoctorService>,
    patient_service: Arc<PatientService>,
    order_service: Arc<OrderService>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        debug!("Using in-memory repositories");

        let doctor_repo = Arc::new(InMemoryDoctorRepository::with_sources(
            config.id_generator.clone(),
            config.clock.clone(),
        ));
        let patient_repo = Arc::new(InMemoryPatientRepository::with_sources(
            config.id_generator.clone(),
            config.clock.clone(),
        ));
        let order_repo = Arc::new(InMemoryOrderRepository::with_sources(
            config.id_generator,
            config.clock,
        ));

        Self {
            doctor_service: Arc::new(DoctorService::new(doctor_repo)),
            patient_service: Arc::new(PatientService::new(patient_repo)),
            order_service: Arc::new(OrderService::new(order_repo)),
        }
    }

    pub fn doctor_service(&self) -> Arc<DoctorService> {
        self.doctor_service.clone()
    }

    pub fn patient_service(&self) -> Arc<PatientService> {
        self.patient_service.clone()
    }

    pub fn order_service(&self) -> Arc<OrderService> {
        self.order_service.clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(ContainerConfig::default())
    }
}
