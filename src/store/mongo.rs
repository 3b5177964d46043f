//! MongoDB store.
//!
//! Collections: `teachers` and `students` keyed by email in `_id`,
//! `registrations` keyed by the `{teacher_email, student_email}` pair.
//! Idempotent inserts are upserts that only write on insert (`$setOnInsert`),
//! so re-creating an existing entity never touches its fields.
//! `clear_all` needs a replica set, since it runs in a session transaction.

use async_trait::async_trait;
use futures::future::try_join_all;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use super::{Collection, EntityKind, EntityStore, StoreError, StoreResult};
use crate::database::MongoDB;
use crate::models::{RegisteredStudent, Registration, Student};

#[derive(Debug, Deserialize)]
struct EmailOnly {
    #[serde(rename = "_id")]
    email: String,
}

impl MongoDB {
    async fn students_by_email_map(&self, emails: &[String]) -> StoreResult<HashMap<String, Student>> {
        Ok(self
            .students_by_emails(emails)
            .await?
            .into_iter()
            .map(|student| (student.email.clone(), student))
            .collect())
    }
}

#[async_trait]
impl EntityStore for MongoDB {
    async fn exists_by_emails(&self, kind: EntityKind, emails: &[String]) -> StoreResult<HashSet<String>> {
        if emails.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<EmailOnly> = self
            .collection::<EmailOnly>(kind.collection())
            .find(doc! { "_id": { "$in": emails.to_vec() } })
            .projection(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(found.into_iter().map(|doc| doc.email).collect())
    }

    async fn registrations_by_teacher_emails(&self, teacher_emails: &[String]) -> StoreResult<Vec<RegisteredStudent>> {
        if teacher_emails.is_empty() {
            return Ok(Vec::new());
        }

        let registrations: Vec<Registration> = self
            .collection::<Registration>(Collection::Registrations)
            .find(doc! { "teacher_email": { "$in": teacher_emails.to_vec() } })
            .sort(doc! { "student_email": 1, "teacher_email": 1 })
            .await?
            .try_collect()
            .await?;

        let student_emails: Vec<String> = registrations
            .iter()
            .map(|r| r.student_email.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let students = self.students_by_email_map(&student_emails).await?;

        Ok(registrations
            .into_iter()
            .map(|r| RegisteredStudent {
                student_suspended: students
                    .get(&r.student_email)
                    .map(|s| s.is_suspended)
                    .unwrap_or(false),
                teacher_email: r.teacher_email,
                student_email: r.student_email,
            })
            .collect())
    }

    async fn students_by_emails(&self, emails: &[String]) -> StoreResult<Vec<Student>> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let students = self
            .collection::<Student>(Collection::Students)
            .find(doc! { "_id": { "$in": emails.to_vec() } })
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(students)
    }

    async fn create_if_not_exists(&self, kind: EntityKind, emails: &[String]) -> StoreResult<()> {
        let collection = self.raw_collection(kind.collection());
        let now = chrono::Utc::now().timestamp();

        let on_insert = match kind {
            EntityKind::Teacher => doc! { "created_at": now },
            EntityKind::Student => doc! { "is_suspended": false, "created_at": now },
        };

        let collection = &collection;
        try_join_all(emails.iter().map(|email| {
            let filter = doc! { "_id": email.as_str() };
            let update = doc! { "$setOnInsert": on_insert.clone() };
            async move { collection.update_one(filter, update).upsert(true).await }
        }))
        .await?;

        log::debug!("Ensured {} {}(s) exist", emails.len(), kind.noun());
        Ok(())
    }

    async fn register_students(&self, teacher_email: &str, student_emails: &[String]) -> StoreResult<()> {
        let collection = self.raw_collection(Collection::Registrations);
        let now = chrono::Utc::now().timestamp();

        let collection = &collection;
        try_join_all(student_emails.iter().map(|student_email| {
            let student_email = student_email.as_str();
            let filter = doc! {
                "_id": { "teacher_email": teacher_email, "student_email": student_email }
            };
            let update = doc! { "$setOnInsert": {
                "teacher_email": teacher_email,
                "student_email": student_email,
                "created_at": now,
            } };
            async move { collection.update_one(filter, update).upsert(true).await }
        }))
        .await?;

        Ok(())
    }

    async fn update_student(&self, email: &str, is_suspended: bool) -> StoreResult<()> {
        self.raw_collection(Collection::Students)
            .update_one(doc! { "_id": email }, doc! { "$set": { "is_suspended": is_suspended } })
            .await?;
        Ok(())
    }

    async fn delete_all(&self, collection: Collection) -> StoreResult<()> {
        let result = self.raw_collection(collection).delete_many(doc! {}).await?;
        log::info!("🗑️  Deleted {} document(s) from {}", result.deleted_count, collection.name());
        Ok(())
    }

    async fn clear_all(&self) -> StoreResult<()> {
        let mut session = self.client().start_session().await?;
        session.start_transaction().await?;

        for collection in Collection::ALL {
            let deleted = self
                .raw_collection(collection)
                .delete_many(doc! {})
                .session(&mut session)
                .await;

            if let Err(e) = deleted {
                log::error!("❌ Clearing {} failed, aborting transaction: {}", collection.name(), e);
                if let Err(abort_err) = session.abort_transaction().await {
                    log::warn!("⚠️  Abort transaction failed: {}", abort_err);
                }
                return Err(StoreError::from(e));
            }
        }

        session.commit_transaction().await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
