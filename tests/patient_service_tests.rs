//! Patient use cases: email uniqueness, status transitions and stats.

use std::sync::Arc;

use clinica::{
    FieldUpdate, InMemoryPatientRepository, NewPatient, PatientService, PatientStats,
    PatientStatus, PatientUpdate,
};

fn service() -> Arc<PatientService> {
    Arc::new(PatientService::new(Arc::new(InMemoryPatientRepository::new())))
}

fn assert_partition(stats: PatientStats) {
    assert_eq!(stats.active + stats.inactive, stats.total);
}

#[tokio::test]
async fn test_register_requires_name_and_email() {
    let service = service();

    let no_name = service.register(NewPatient::new("", "a@x.com")).await;
    let no_email = service.register(NewPatient::new("A", " ")).await;

    assert!(no_name.unwrap_err().is_invalid_input());
    assert!(no_email.unwrap_err().is_invalid_input());
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let service = service();
    service
        .register(NewPatient::new("A", "a@x.com"))
        .await
        .expect("first registration");

    let err = service
        .register(NewPatient::new("B", "a@x.com"))
        .await
        .expect_err("duplicate email");

    assert!(err.is_already_exists());
    assert_eq!(err.detail(), "Email a@x.com ya está registrado");
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_email_comparison_is_case_sensitive() {
    let service = service();
    service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    let other = service.register(NewPatient::new("B", "A@X.com")).await;
    assert!(other.is_ok());
}

#[tokio::test]
async fn test_email_is_free_again_after_delete() {
    let service = service();
    let first = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    assert!(service.delete(first.id()).await.unwrap());
    let second = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    assert_ne!(first.id(), second.id());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_registrations_admit_one() {
    let service = service();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .register(NewPatient::new(format!("P{}", i), "same@x.com"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task").is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_deactivate_then_activate() {
    let service = service();
    let patient = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    let inactive = service.deactivate(patient.id()).await.unwrap().unwrap();
    assert_eq!(inactive.status(), PatientStatus::Inactive);
    assert_partition(service.stats().await.unwrap());

    let active = service.activate(patient.id()).await.unwrap().unwrap();
    assert_eq!(active.status(), PatientStatus::Active);
    assert_eq!(active.email(), "a@x.com");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.active, 1);
    assert_eq!(stats.inactive, 0);
    assert_partition(stats);
}

#[tokio::test]
async fn test_activate_is_idempotent() {
    let service = service();
    let patient = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    let once = service.activate(patient.id()).await.unwrap().unwrap();
    let twice = service.activate(patient.id()).await.unwrap().unwrap();

    assert_eq!(once, twice);
    assert!(twice.is_active());
}

#[tokio::test]
async fn test_transition_on_missing_patient_is_none() {
    let service = service();

    assert!(service.activate("missing").await.unwrap().is_none());
    assert!(service.deactivate("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_stats_hold_through_mixed_operations() {
    let service = service();
    let mut ids = Vec::new();

    for i in 0..6 {
        let p = service
            .register(NewPatient::new(format!("P{}", i), format!("p{}@x.com", i)))
            .await
            .unwrap();
        ids.push(p.id().to_string());
        assert_partition(service.stats().await.unwrap());
    }

    service.deactivate(&ids[0]).await.unwrap();
    assert_partition(service.stats().await.unwrap());
    service.deactivate(&ids[1]).await.unwrap();
    assert_partition(service.stats().await.unwrap());
    service.delete(&ids[1]).await.unwrap();
    assert_partition(service.stats().await.unwrap());
    service.activate(&ids[0]).await.unwrap();
    service.deactivate(&ids[2]).await.unwrap();

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.active, 4);
    assert_eq!(stats.inactive, 1);
}

#[tokio::test]
async fn test_update_rejects_email_owned_by_another_patient() {
    let service = service();
    service.register(NewPatient::new("A", "a@x.com")).await.unwrap();
    let b = service.register(NewPatient::new("B", "b@x.com")).await.unwrap();

    let err = service
        .update(b.id(), &PatientUpdate::email("a@x.com"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());

    let unchanged = service.get(b.id()).await.unwrap().unwrap();
    assert_eq!(unchanged.email(), "b@x.com");
}

#[tokio::test]
async fn test_update_with_own_email_is_allowed() {
    let service = service();
    let a = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    let updated = service
        .update(a.id(), &PatientUpdate::email("a@x.com"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated, a);
}

#[tokio::test]
async fn test_update_rejects_blank_name_or_email() {
    let service = service();
    let patient = service.register(NewPatient::new("A", "a@x.com")).await.unwrap();

    let blank_email = service.update(patient.id(), &PatientUpdate::email("")).await;
    assert!(blank_email.unwrap_err().is_invalid_input());

    let blank_name = PatientUpdate {
        name: FieldUpdate::Set("  ".to_string()),
        ..PatientUpdate::default()
    };
    let blank_name = service.update(patient.id(), &blank_name).await;
    assert!(blank_name.unwrap_err().is_invalid_input());

    let stored = service.get(patient.id()).await.unwrap().unwrap();
    assert_eq!(stored, patient);
}

#[tokio::test]
async fn test_update_missing_patient_is_none() {
    let service = service();
    let result = service
        .update("missing", &PatientUpdate::status(PatientStatus::Inactive))
        .await
        .unwrap();
    assert!(result.is_none());
}
