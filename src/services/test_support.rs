//! Shared helpers for service and API tests.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::models::{RegisteredStudent, Student};
use crate::store::{Collection, EntityKind, EntityStore, StoreError, StoreResult};

pub fn emails(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A store whose every call fails, for exercising the storage-error path.
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::new("store unavailable"))
}

#[async_trait]
impl EntityStore for FailingStore {
    async fn exists_by_emails(&self, _kind: EntityKind, _emails: &[String]) -> StoreResult<HashSet<String>> {
        unavailable()
    }

    async fn registrations_by_teacher_emails(&self, _teacher_emails: &[String]) -> StoreResult<Vec<RegisteredStudent>> {
        unavailable()
    }

    async fn students_by_emails(&self, _emails: &[String]) -> StoreResult<Vec<Student>> {
        unavailable()
    }

    async fn create_if_not_exists(&self, _kind: EntityKind, _emails: &[String]) -> StoreResult<()> {
        unavailable()
    }

    async fn register_students(&self, _teacher_email: &str, _student_emails: &[String]) -> StoreResult<()> {
        unavailable()
    }

    async fn update_student(&self, _email: &str, _is_suspended: bool) -> StoreResult<()> {
        unavailable()
    }

    async fn delete_all(&self, _collection: Collection) -> StoreResult<()> {
        unavailable()
    }

    async fn clear_all(&self) -> StoreResult<()> {
        unavailable()
    }

    async fn health_check(&self) -> StoreResult<()> {
        unavailable()
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
