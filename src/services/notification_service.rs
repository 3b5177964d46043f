// ==================== NOTIFICATION RECIPIENTS ====================
// Who receives a teacher's notification: the teacher's registered students
// plus every student "@mentioned" in the text, minus suspended students.

use std::collections::HashSet;

use crate::{
    store::{EntityStore, StoreResult},
    utils::email::extract_mentions,
};

/// A notification sent by one teacher, with its mentions already extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub teacher_email: String,
    /// Mentioned student emails, deduplicated in order of appearance
    pub mentions: Vec<String>,
}

impl Notification {
    pub fn parse(teacher_email: &str, text: &str) -> Self {
        Self {
            teacher_email: teacher_email.to_string(),
            mentions: extract_mentions(text),
        }
    }
}

/// Resolves the recipients of `notification`.
///
/// Order: registered students (by email) first, then mentioned students in
/// order of appearance, each email once. Mentions that are not stored are
/// skipped; callers reject them beforehand through existence validation.
pub async fn resolve_recipients(
    store: &dyn EntityStore,
    notification: &Notification,
) -> StoreResult<Vec<String>> {
    let teacher = [notification.teacher_email.clone()];
    let mut registered = store.registrations_by_teacher_emails(&teacher).await?;
    registered.sort_by(|a, b| a.student_email.cmp(&b.student_email));

    let mentioned = store.students_by_emails(&notification.mentions).await?;
    let mention_order: Vec<(String, bool)> = notification
        .mentions
        .iter()
        .filter_map(|email| {
            mentioned
                .iter()
                .find(|student| &student.email == email)
                .map(|student| (student.email.clone(), student.is_suspended))
        })
        .collect();

    let candidates = registered
        .into_iter()
        .map(|r| (r.student_email, r.student_suspended))
        .chain(mention_order);

    let mut seen = HashSet::new();
    let recipients = candidates
        .filter(|(_, suspended)| !suspended)
        .map(|(email, _)| email)
        .filter(|email| seen.insert(email.clone()))
        .collect();

    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{emails, FailingStore};
    use crate::store::{EntityKind, MemoryStore, StoreError};

    /// t1 -> {s1, s2}; s3, s4, s5 exist but are unregistered
    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.create_if_not_exists(EntityKind::Teacher, &emails(&["t1@x.com"])).await.unwrap();
        store
            .create_if_not_exists(
                EntityKind::Student,
                &emails(&["s1@x.com", "s2@x.com", "s3@x.com", "s4@x.com", "s5@x.com"]),
            )
            .await
            .unwrap();
        store.register_students("t1@x.com", &emails(&["s1@x.com", "s2@x.com"])).await.unwrap();
        store
    }

    #[test]
    fn test_parse_extracts_mentions() {
        let notification = Notification::parse("t1@x.com", "hello @s3@x.com and @s4@x.com @s3@x.com");
        assert_eq!(notification.mentions, vec!["s3@x.com", "s4@x.com"]);
    }

    #[tokio::test]
    async fn test_suspended_registrant_excluded() {
        let store = seeded_store().await;
        store.update_student("s1@x.com", true).await.unwrap();

        let notification = Notification::parse("t1@x.com", "hey @s2@x.com");
        let recipients = resolve_recipients(&store, &notification).await.unwrap();
        assert_eq!(recipients, vec!["s2@x.com"]);
    }

    #[tokio::test]
    async fn test_union_registrants_then_mentions() {
        let store = seeded_store().await;
        store.update_student("s1@x.com", true).await.unwrap();
        store.update_student("s3@x.com", true).await.unwrap();

        let notification = Notification::parse("t1@x.com", "hello @s5@x.com @s3@x.com and @s4@x.com");
        let recipients = resolve_recipients(&store, &notification).await.unwrap();
        assert_eq!(recipients, vec!["s2@x.com", "s5@x.com", "s4@x.com"]);
    }

    #[tokio::test]
    async fn test_registrant_also_mentioned_appears_once() {
        let store = seeded_store().await;
        let notification = Notification::parse("t1@x.com", "@s2@x.com @s1@x.com");
        let recipients = resolve_recipients(&store, &notification).await.unwrap();
        assert_eq!(recipients, vec!["s1@x.com", "s2@x.com"]);
    }

    #[tokio::test]
    async fn test_unknown_mentions_are_skipped() {
        let store = seeded_store().await;
        let notification = Notification::parse("t1@x.com", "@ghost@x.com");
        let recipients = resolve_recipients(&store, &notification).await.unwrap();
        assert_eq!(recipients, vec!["s1@x.com", "s2@x.com"]);
    }

    #[tokio::test]
    async fn test_mentions_match_stored_emails_exactly() {
        let store = seeded_store().await;
        let notification = Notification::parse("t1@x.com", "@S3@x.com");
        assert_eq!(notification.mentions, vec!["S3@x.com"]);

        let recipients = resolve_recipients(&store, &notification).await.unwrap();
        assert_eq!(recipients, vec!["s1@x.com", "s2@x.com"]);
    }

    #[tokio::test]
    async fn test_teacher_without_registrations() {
        let store = seeded_store().await;
        let notification = Notification::parse("t9@x.com", "no mentions here");
        assert!(resolve_recipients(&store, &notification).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let notification = Notification::parse("t1@x.com", "hi");
        let result = resolve_recipients(&FailingStore, &notification).await;
        assert_eq!(result, Err(StoreError::new("store unavailable")));
    }
}
