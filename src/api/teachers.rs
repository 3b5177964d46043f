use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    api::log_failure,
    models::{ErrorResponse, PopulateTeachersRequest},
    services::classroom_service,
    store::EntityStore,
    utils::{binding::bind_json, error::AppError},
};

/// POST /api/populateteachers - Creates the given teachers if they do not exist
#[utoipa::path(
    post,
    path = "/api/populateteachers",
    tag = "Teachers",
    request_body = PopulateTeachersRequest,
    responses(
        (status = 204, description = "Teachers exist"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn populate_teachers(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let request: PopulateTeachersRequest =
        bind_json(&req, &body).inspect_err(|e| log_failure("POST /populateteachers", e))?;

    log::info!("📝 POST /populateteachers - {} teacher(s)", request.teachers.len());

    classroom_service::populate_teachers(store.get_ref(), &request.teachers)
        .await
        .inspect_err(|e| log_failure("POST /populateteachers", e))?;

    Ok(HttpResponse::NoContent().finish())
}
