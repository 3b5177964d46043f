pub mod health;
pub mod maintenance;
pub mod metrics;
pub mod notifications;
pub mod registrations;
pub mod students;
pub mod swagger;
pub mod teachers;

use actix_web::web;

use crate::utils::error::AppError;

/// Logs a failed request at the level of its error class.
pub(crate) fn log_failure(route: &str, error: &AppError) {
    match error {
        AppError::UserError(msg) => log::warn!("⚠️ {} rejected: {}", route, msg),
        AppError::StorageError(msg) => log::error!("❌ {} failed: {}", route, msg),
    }
}

/// Classroom API routes, shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/api")
                .route("/register", web::post().to(registrations::register_students))
                .route("/commonstudents", web::get().to(registrations::common_students))
                .route("/suspend", web::post().to(students::suspend_student))
                .route("/retrievefornotifications", web::post().to(notifications::retrieve_for_notifications))
                .route("/populateteachers", web::post().to(teachers::populate_teachers))
                .route("/populatestudents", web::post().to(students::populate_students))
                .route("/clear", web::delete().to(maintenance::clear_database)),
        );
}
