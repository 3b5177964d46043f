use actix_web::{web, HttpResponse};

use crate::{
    api::log_failure,
    models::ErrorResponse,
    services::classroom_service,
    store::EntityStore,
    utils::error::AppError,
};

/// DELETE /api/clear - Deletes all registrations, students and teachers in one transaction
#[utoipa::path(
    delete,
    path = "/api/clear",
    tag = "Maintenance",
    responses(
        (status = 204, description = "All data deleted"),
        (status = 500, description = "Storage failure; nothing was deleted", body = ErrorResponse)
    )
)]
pub async fn clear_database(store: web::Data<dyn EntityStore>) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /clear");

    classroom_service::clear_database(store.get_ref())
        .await
        .inspect_err(|e| log_failure("DELETE /clear", e))?;

    Ok(HttpResponse::NoContent().finish())
}
