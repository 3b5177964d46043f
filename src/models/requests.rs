use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::binding::{FieldKind, JsonRequest, RequiredField};

// ==================== REQUESTS ====================

/// Body of POST /api/register
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterStudentsRequest {
    /// Teacher email
    pub teacher: String,
    /// Student emails to register to the teacher
    pub students: Vec<String>,
}

impl JsonRequest for RegisterStudentsRequest {
    const FIELDS: &'static [RequiredField] = &[
        RequiredField { name: "teacher", kind: FieldKind::String },
        RequiredField { name: "students", kind: FieldKind::StringList },
    ];
}

/// Body of POST /api/suspend
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuspendStudentRequest {
    pub student: String,
}

impl JsonRequest for SuspendStudentRequest {
    const FIELDS: &'static [RequiredField] = &[
        RequiredField { name: "student", kind: FieldKind::String },
    ];
}

/// Body of POST /api/retrievefornotifications
#[derive(Debug, Deserialize, ToSchema)]
pub struct RetrieveRecipientsRequest {
    pub teacher: String,
    /// Free text; "@"-prefixed emails inside it are mentions
    pub notification: String,
}

impl JsonRequest for RetrieveRecipientsRequest {
    const FIELDS: &'static [RequiredField] = &[
        RequiredField { name: "teacher", kind: FieldKind::String },
        RequiredField { name: "notification", kind: FieldKind::String },
    ];
}

/// Body of POST /api/populateteachers
#[derive(Debug, Deserialize, ToSchema)]
pub struct PopulateTeachersRequest {
    pub teachers: Vec<String>,
}

impl JsonRequest for PopulateTeachersRequest {
    const FIELDS: &'static [RequiredField] = &[
        RequiredField { name: "teachers", kind: FieldKind::StringList },
    ];
}

/// Body of POST /api/populatestudents
#[derive(Debug, Deserialize, ToSchema)]
pub struct PopulateStudentsRequest {
    pub students: Vec<String>,
}

impl JsonRequest for PopulateStudentsRequest {
    const FIELDS: &'static [RequiredField] = &[
        RequiredField { name: "students", kind: FieldKind::StringList },
    ];
}

// ==================== RESPONSES ====================

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CommonStudentsResponse {
    pub students: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RecipientsResponse {
    pub recipients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
