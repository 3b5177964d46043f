//! In-memory store.
//!
//! All three tables live behind a single `tokio::sync::RwLock`, so every
//! write (including `clear_all`) is atomic with respect to readers. Nothing
//! is durable: state is lost when the process exits.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tokio::sync::RwLock;

use super::{Collection, EntityKind, EntityStore, StoreResult};
use crate::models::{RegisteredStudent, RegistrationKey, Student, Teacher};

#[derive(Debug, Default)]
struct Tables {
    teachers: BTreeMap<String, Teacher>,
    students: BTreeMap<String, Student>,
    registrations: BTreeSet<RegistrationKey>,
}

impl Tables {
    fn clear(&mut self, collection: Collection) {
        match collection {
            Collection::Teachers => self.teachers.clear(),
            Collection::Students => self.students.clear(),
            Collection::Registrations => self.registrations.clear(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn exists_by_emails(&self, kind: EntityKind, emails: &[String]) -> StoreResult<HashSet<String>> {
        let tables = self.tables.read().await;
        let existing = emails
            .iter()
            .filter(|email| match kind {
                EntityKind::Teacher => tables.teachers.contains_key(*email),
                EntityKind::Student => tables.students.contains_key(*email),
            })
            .cloned()
            .collect();
        Ok(existing)
    }

    async fn registrations_by_teacher_emails(&self, teacher_emails: &[String]) -> StoreResult<Vec<RegisteredStudent>> {
        let tables = self.tables.read().await;
        let wanted: HashSet<&str> = teacher_emails.iter().map(String::as_str).collect();

        let registrations = tables
            .registrations
            .iter()
            .filter(|key| wanted.contains(key.teacher_email.as_str()))
            .map(|key| RegisteredStudent {
                teacher_email: key.teacher_email.clone(),
                student_email: key.student_email.clone(),
                student_suspended: tables
                    .students
                    .get(&key.student_email)
                    .map(|s| s.is_suspended)
                    .unwrap_or(false),
            })
            .collect();
        Ok(registrations)
    }

    async fn students_by_emails(&self, emails: &[String]) -> StoreResult<Vec<Student>> {
        let tables = self.tables.read().await;
        let wanted: BTreeSet<&String> = emails.iter().collect();
        Ok(wanted
            .into_iter()
            .filter_map(|email| tables.students.get(email).cloned())
            .collect())
    }

    async fn create_if_not_exists(&self, kind: EntityKind, emails: &[String]) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        for email in emails {
            match kind {
                EntityKind::Teacher => {
                    tables
                        .teachers
                        .entry(email.clone())
                        .or_insert_with(|| Teacher::new(email.clone()));
                }
                EntityKind::Student => {
                    tables
                        .students
                        .entry(email.clone())
                        .or_insert_with(|| Student::new(email.clone()));
                }
            }
        }
        Ok(())
    }

    async fn register_students(&self, teacher_email: &str, student_emails: &[String]) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        for student_email in student_emails {
            tables.registrations.insert(RegistrationKey {
                teacher_email: teacher_email.to_string(),
                student_email: student_email.clone(),
            });
        }
        Ok(())
    }

    async fn update_student(&self, email: &str, is_suspended: bool) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(student) = tables.students.get_mut(email) {
            student.is_suspended = is_suspended;
        }
        Ok(())
    }

    async fn delete_all(&self, collection: Collection) -> StoreResult<()> {
        self.tables.write().await.clear(collection);
        Ok(())
    }

    async fn clear_all(&self) -> StoreResult<()> {
        // One write guard for all collections
        let mut tables = self.tables.write().await;
        for collection in Collection::ALL {
            tables.clear(collection);
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
