use serde::{Deserialize, Serialize};

/// Document of the "teachers" collection. The email is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub email: String,

    #[serde(default)]
    pub created_at: i64,
}

impl Teacher {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
