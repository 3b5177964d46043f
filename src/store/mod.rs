//! Entity store: persistence of teachers, students and registrations.
//!
//! Every service function receives the store as `&dyn EntityStore`; the
//! concrete backend is chosen once at startup.

use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;

use crate::models::{RegisteredStudent, Student};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;

/// Failure of the backing store. The message is passed to clients unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError(String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Entities addressed by email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Teacher,
    Student,
}

impl EntityKind {
    /// Noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Teacher => "Teacher",
            EntityKind::Student => "Student",
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            EntityKind::Teacher => Collection::Teachers,
            EntityKind::Student => Collection::Students,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Teachers,
    Students,
    Registrations,
}

impl Collection {
    /// Deletion order for clearing: relationships before the entities they reference.
    pub const ALL: [Collection; 3] = [
        Collection::Registrations,
        Collection::Students,
        Collection::Teachers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Teachers => "teachers",
            Collection::Students => "students",
            Collection::Registrations => "registrations",
        }
    }
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Returns the subset of `emails` stored for `kind`.
    async fn exists_by_emails(&self, kind: EntityKind, emails: &[String]) -> StoreResult<HashSet<String>>;

    /// Registrations of any of the given teachers, joined with the student's suspension flag.
    async fn registrations_by_teacher_emails(&self, teacher_emails: &[String]) -> StoreResult<Vec<RegisteredStudent>>;

    /// Stored students among `emails`; unknown emails are skipped.
    async fn students_by_emails(&self, emails: &[String]) -> StoreResult<Vec<Student>>;

    /// Inserts the missing entities; existing ones are left untouched.
    async fn create_if_not_exists(&self, kind: EntityKind, emails: &[String]) -> StoreResult<()>;

    /// Inserts the missing (teacher, student) registrations.
    async fn register_students(&self, teacher_email: &str, student_emails: &[String]) -> StoreResult<()>;

    async fn update_student(&self, email: &str, is_suspended: bool) -> StoreResult<()>;

    /// Empties a single collection, outside of any transaction. Per-collection
    /// maintenance primitive; `clear_all` is the atomic variant.
    async fn delete_all(&self, collection: Collection) -> StoreResult<()>;

    /// Empties all three collections atomically: either everything is
    /// deleted or the call fails and nothing is.
    async fn clear_all(&self) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;

    fn backend_name(&self) -> &'static str;
}
