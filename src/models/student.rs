use serde::{Deserialize, Serialize};

/// Document of the "students" collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Email address, used as the document id
    #[serde(rename = "_id")]
    pub email: String,

    /// Suspended students stay registered but never receive notifications
    #[serde(default)]
    pub is_suspended: bool,

    /// Timestamp of creation
    #[serde(default)]
    pub created_at: i64,
}

impl Student {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_suspended: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
