use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    api::log_failure,
    models::{ErrorResponse, RecipientsResponse, RetrieveRecipientsRequest},
    services::classroom_service,
    store::EntityStore,
    utils::{binding::bind_json, error::AppError},
};

/// POST /api/retrievefornotifications - Students who should receive a notification
///
/// Recipients are the teacher's registered students plus every student
/// "@mentioned" in the text, excluding suspended students.
#[utoipa::path(
    post,
    path = "/api/retrievefornotifications",
    tag = "Notifications",
    request_body = RetrieveRecipientsRequest,
    responses(
        (status = 200, description = "Notification recipients", body = RecipientsResponse),
        (status = 400, description = "Invalid request or unknown teacher/student", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn retrieve_for_notifications(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<dyn EntityStore>,
) -> Result<HttpResponse, AppError> {
    let request: RetrieveRecipientsRequest =
        bind_json(&req, &body).inspect_err(|e| log_failure("POST /retrievefornotifications", e))?;

    log::info!("📣 POST /retrievefornotifications - teacher {}", request.teacher);

    let response =
        classroom_service::retrieve_recipients(store.get_ref(), &request.teacher, &request.notification)
            .await
            .inspect_err(|e| log_failure("POST /retrievefornotifications", e))?;

    log::info!("✅ {} recipient(s)", response.recipients.len());
    Ok(HttpResponse::Ok().json(response))
}
