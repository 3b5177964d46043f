// ==================== COMMON STUDENTS ====================
// Students registered to every teacher of a set.

use std::collections::{HashMap, HashSet};

use crate::store::{EntityStore, StoreResult};

/// Resolves the students registered to all of `teacher_emails`.
///
/// Teachers are deduplicated first: a student qualifies when it appears in
/// as many registrations as there are distinct teachers. The result is
/// sorted, and suspended students are included.
pub async fn resolve_common_students(
    store: &dyn EntityStore,
    teacher_emails: &[String],
) -> StoreResult<Vec<String>> {
    let distinct: HashSet<&String> = teacher_emails.iter().collect();
    if distinct.is_empty() {
        return Ok(Vec::new());
    }

    let teachers: Vec<String> = distinct.into_iter().cloned().collect();
    let registrations = store.registrations_by_teacher_emails(&teachers).await?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for registration in &registrations {
        *counts.entry(registration.student_email.as_str()).or_insert(0) += 1;
    }

    let mut common: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count == teachers.len())
        .map(|(email, _)| email.to_string())
        .collect();
    common.sort();

    Ok(common)
}
