use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    api::log_failure,
    models::{ErrorResponse, PopulateStudentsRequest, SuspendStudentRequest},
    services::classroom_service,
    store::EntityStore,
    utils::{binding::bind_json, error::AppError},
};

/// POST /api/suspend - Suspends a student
#[utoipa::path(
    post,
    path = "/api/suspend",
    tag = "Students",
    request_body = SuspendStudentRequest,
    responses(
        (status = 204, description = "Student suspended"),
        (status = 400, description = "Invalid request or unknown student", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn suspend_student(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let request: SuspendStudentRequest =
        bind_json(&req, &body).inspect_err(|e| log_failure("POST /suspend", e))?;

    log::info!("⛔ POST /suspend - student {}", request.student);

    classroom_service::suspend_student(store.get_ref(), &request.student)
        .await
        .inspect_err(|e| log_failure("POST /suspend", e))?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/populatestudents - Creates the given students if they do not exist
#[utoipa::path(
    post,
    path = "/api/populatestudents",
    tag = "Students",
    request_body = PopulateStudentsRequest,
    responses(
        (status = 204, description = "Students exist"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn populate_students(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let request: PopulateStudentsRequest =
        bind_json(&req, &body).inspect_err(|e| log_failure("POST /populatestudents", e))?;

    log::info!("📝 POST /populatestudents - {} student(s)", request.students.len());

    classroom_service::populate_students(store.get_ref(), &request.students)
        .await
        .inspect_err(|e| log_failure("POST /populatestudents", e))?;

    Ok(HttpResponse::NoContent().finish())
}
