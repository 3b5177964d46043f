use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    api::log_failure,
    models::{CommonStudentsResponse, ErrorResponse, RegisterStudentsRequest},
    services::classroom_service,
    store::EntityStore,
    utils::{
        binding::{bind_json, required_query_values},
        error::AppError,
    },
};

/// POST /api/register - Registers one or more students to a teacher
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Registrations",
    request_body = RegisterStudentsRequest,
    responses(
        (status = 204, description = "Students registered"),
        (status = 400, description = "Invalid request or unknown teacher/student", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn register_students(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let request: RegisterStudentsRequest =
        bind_json(&req, &body).inspect_err(|e| log_failure("POST /register", e))?;

    log::info!(
        "📝 POST /register - {} student(s) to {}",
        request.students.len(),
        request.teacher
    );

    classroom_service::register_students(store.get_ref(), &request.teacher, &request.students)
        .await
        .inspect_err(|e| log_failure("POST /register", e))?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/commonstudents?teacher=a&teacher=b - Students common to all given teachers
#[utoipa::path(
    get,
    path = "/api/commonstudents",
    tag = "Registrations",
    params(
        ("teacher" = Vec<String>, Query, description = "Teacher email; repeat the parameter for several teachers")
    ),
    responses(
        (status = 200, description = "Students registered to every teacher, sorted", body = CommonStudentsResponse),
        (status = 400, description = "Invalid request or unknown teacher", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn common_students(
    query: web::Query<Vec<(String, String)>>,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let teachers = required_query_values(&query, "teacher")
        .inspect_err(|e| log_failure("GET /commonstudents", e))?;

    log::info!("🔎 GET /commonstudents - teachers: {}", teachers.join(", "));

    let response = classroom_service::retrieve_common_students(store.get_ref(), &teachers)
        .await
        .inspect_err(|e| log_failure("GET /commonstudents", e))?;

    log::info!("✅ Found {} common student(s)", response.students.len());
    Ok(HttpResponse::Ok().json(response))
}
