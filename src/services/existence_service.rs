// ==================== EXISTENCE VALIDATION ====================
// Checks that referenced teachers/students are stored before anything is
// mutated or resolved. Store failures and missing entities travel on
// different channels: StoreError (500) vs. a user-facing message (400).

use std::fmt;

use crate::{
    store::{EntityKind, EntityStore, StoreResult},
    utils::error::AppError,
};

/// Emails that were referenced but are not stored, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingEntities {
    pub kind: EntityKind,
    pub emails: Vec<String>,
}

impl fmt::Display for MissingEntities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.emails.as_slice() {
            [email] => write!(
                f,
                "{} with email {} does not exist in the database",
                self.kind.noun(),
                email
            ),
            emails => write!(
                f,
                "{}s with emails {} do not exist in the database",
                self.kind.noun(),
                emails.join(", ")
            ),
        }
    }
}

/// Returns the emails of `kind` absent from the store, or `None` when all exist.
///
/// An empty input is always valid and never touches the store.
pub async fn find_missing(
    store: &dyn EntityStore,
    kind: EntityKind,
    emails: &[String],
) -> StoreResult<Option<MissingEntities>> {
    if emails.is_empty() {
        return Ok(None);
    }

    let existing = store.exists_by_emails(kind, emails).await?;

    let missing: Vec<String> = emails
        .iter()
        .filter(|email| !existing.contains(*email))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(None)
    } else {
        Ok(Some(MissingEntities { kind, emails: missing }))
    }
}

/// Like [`find_missing`], folded into the request error type.
pub async fn ensure_exist(
    store: &dyn EntityStore,
    kind: EntityKind,
    emails: &[String],
) -> Result<(), AppError> {
    match find_missing(store, kind, emails).await? {
        Some(missing) => {
            log::warn!("⚠️ {}", missing);
            Err(AppError::UserError(missing.to_string()))
        }
        None => Ok(()),
    }
}

pub async fn ensure_teachers_exist(store: &dyn EntityStore, emails: &[String]) -> Result<(), AppError> {
    ensure_exist(store, EntityKind::Teacher, emails).await
}

pub async fn ensure_students_exist(store: &dyn EntityStore, emails: &[String]) -> Result<(), AppError> {
    ensure_exist(store, EntityKind::Student, emails).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{emails, FailingStore};
    use crate::store::MemoryStore;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .create_if_not_exists(EntityKind::Teacher, &emails(&["t1@gmail.com", "t2@gmail.com"]))
            .await
            .unwrap();
        store
            .create_if_not_exists(EntityKind::Student, &emails(&["s1@gmail.com"]))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_empty_input_is_valid() {
        // The failing store proves the lookup is skipped entirely
        assert_eq!(find_missing(&FailingStore, EntityKind::Teacher, &[]).await, Ok(None));
    }

    #[tokio::test]
    async fn test_all_present() {
        let store = seeded_store().await;
        let result = find_missing(&store, EntityKind::Teacher, &emails(&["t2@gmail.com", "t1@gmail.com"])).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_singular_message() {
        let store = seeded_store().await;
        let missing = find_missing(&store, EntityKind::Student, &emails(&["s1@gmail.com", "s9@gmail.com"]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            missing.to_string(),
            "Student with email s9@gmail.com does not exist in the database"
        );
    }

    #[tokio::test]
    async fn test_plural_message_in_input_order() {
        let store = seeded_store().await;
        let missing = find_missing(
            &store,
            EntityKind::Teacher,
            &emails(&["z@gmail.com", "t1@gmail.com", "a@gmail.com"]),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(
            missing.to_string(),
            "Teachers with emails z@gmail.com, a@gmail.com do not exist in the database"
        );
    }

    #[tokio::test]
    async fn test_reported_set_is_order_independent() {
        let store = seeded_store().await;
        let forward = find_missing(&store, EntityKind::Student, &emails(&["x@gmail.com", "s1@gmail.com", "y@gmail.com"]))
            .await
            .unwrap()
            .unwrap();
        let backward = find_missing(&store, EntityKind::Student, &emails(&["y@gmail.com", "s1@gmail.com", "x@gmail.com"]))
            .await
            .unwrap()
            .unwrap();

        let mut a = forward.emails.clone();
        let mut b = backward.emails.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_user_error() {
        let result = ensure_teachers_exist(&FailingStore, &emails(&["t1@gmail.com"])).await;
        assert_eq!(result, Err(AppError::StorageError("store unavailable".into())));
    }

    #[tokio::test]
    async fn test_ensure_exist_maps_to_user_error() {
        let store = seeded_store().await;
        let result = ensure_students_exist(&store, &emails(&["s2@gmail.com"])).await;
        assert_eq!(
            result,
            Err(AppError::UserError("Student with email s2@gmail.com does not exist in the database".into()))
        );
    }
}
