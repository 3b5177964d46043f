use serde::{Deserialize, Serialize};

/// Composite id of a registration document: one row per (teacher, student) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegistrationKey {
    pub teacher_email: String,
    pub student_email: String,
}

/// Document of the "registrations" collection.
///
/// The pair is duplicated outside of `_id` so that `teacher_email` can be
/// indexed and queried with `$in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_id")]
    pub id: RegistrationKey,
    pub teacher_email: String,
    pub student_email: String,
    #[serde(default)]
    pub created_at: i64,
}

/// A registration joined with the current suspension flag of its student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredStudent {
    pub teacher_email: String,
    pub student_email: String,
    pub student_suspended: bool,
}
