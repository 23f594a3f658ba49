//! Service rules exercised against the in-memory repository double.

mod common;

use std::sync::Arc;

use persons::contract::model::Person;
use persons::domain::error::DomainError;
use persons::domain::service::Service;

use common::{memory_service, new_person, InMemoryPersonsRepository};

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let (repo, service) = memory_service();

    let created = service
        .create(new_person("Moises", "m@x.com"))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.first_name, "Moises");
    assert_eq!(created.email, "m@x.com");
    assert_eq!(repo.len(), 1);

    let all = service.find_all().await.unwrap();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn create_with_taken_email_fails_and_persists_nothing() {
    let (repo, service) = memory_service();
    service
        .create(new_person("Moises", "m@x.com"))
        .await
        .unwrap();
    assert_eq!(repo.save_count(), 1);

    let err = service
        .create(new_person("Other", "m@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::EmailAlreadyExists { ref email } if email == "m@x.com"));
    assert!(err.is_not_found());
    assert_eq!(repo.save_count(), 1);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn email_check_is_case_sensitive() {
    let (_repo, service) = memory_service();
    service.create(new_person("A", "m@x.com")).await.unwrap();

    assert!(service.create(new_person("B", "M@x.com")).await.is_ok());
}

#[tokio::test]
async fn find_by_id_absent_is_not_found() {
    let (_repo, service) = memory_service();

    let err = service.find_by_id(42).await.unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { id: 42 }));
    assert_eq!(err.to_string(), "No records found for id 42");
}

#[tokio::test]
async fn find_by_id_returns_stored_fields() {
    let (_repo, service) = memory_service();
    let created = service.create(new_person("Ada", "ada@x.com")).await.unwrap();

    let found = service.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let (_repo, service) = memory_service();
    let created = service.create(new_person("Ada", "ada@x.com")).await.unwrap();

    let replacement = Person {
        id: created.id,
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        address: "Arlington".into(),
        gender: "F".into(),
        email: "grace@x.com".into(),
    };
    let updated = service.update(replacement.clone()).await.unwrap();

    assert_eq!(updated, replacement);
    assert_eq!(service.find_by_id(created.id).await.unwrap(), replacement);
    assert_eq!(service.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_absent_is_not_found() {
    let (repo, service) = memory_service();

    let err = service
        .update(Person::with_id(5, new_person("Nobody", "n@x.com")))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::PersonNotFound { id: 5 }));
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn delete_removes_then_reports_not_found() {
    let (_repo, service) = memory_service();
    let created = service.create(new_person("Ada", "ada@x.com")).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(service.find_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(service.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (_repo, service) = memory_service();
    let first = service.create(new_person("A", "a@x.com")).await.unwrap();
    service.delete(first.id).await.unwrap();

    let second = service.create(new_person("B", "b@x.com")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn store_failures_surface_as_database_errors() {
    let service = Service::new(Arc::new(InMemoryPersonsRepository::failing()));

    let err = service.find_all().await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("connection refused"));
}
