use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classroom Service API",
        version = "1.0.0",
        description = "Teachers register students, suspend students, look up the students common to a set of teachers and compute who receives a notification.\n\n**Errors:** every failure is returned as `{\"message\": ...}` with status 400 (client-correctable) or 500 (storage failure)."
    ),
    paths(
        // Registrations
        crate::api::registrations::register_students,
        crate::api::registrations::common_students,

        // Notifications
        crate::api::notifications::retrieve_for_notifications,

        // Students & teachers
        crate::api::students::suspend_student,
        crate::api::students::populate_students,
        crate::api::teachers::populate_teachers,

        // Maintenance
        crate::api::maintenance::clear_database,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::RegisterStudentsRequest,
            crate::models::SuspendStudentRequest,
            crate::models::RetrieveRecipientsRequest,
            crate::models::PopulateTeachersRequest,
            crate::models::PopulateStudentsRequest,
            crate::models::CommonStudentsResponse,
            crate::models::RecipientsResponse,
            crate::models::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Registrations", description = "Register students to teachers and query common students."),
        (name = "Notifications", description = "Compute the recipients of a teacher's notification."),
        (name = "Students", description = "Create and suspend students."),
        (name = "Teachers", description = "Create teachers."),
        (name = "Maintenance", description = "Bulk deletion of all data."),
        (name = "Health", description = "Health check and metrics endpoints."),
    )
)]
pub struct ApiDoc;
