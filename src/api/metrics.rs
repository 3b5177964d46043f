use actix_web::{http::StatusCode, HttpResponse};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static CLIENT_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);
static SERVER_ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

/// Counts one finished request, classified by its response status.
pub fn record_response(status: StatusCode) {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);

    if status.is_client_error() {
        CLIENT_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
    } else if status.is_server_error() {
        SERVER_ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
    }
}

fn render() -> String {
    let requests = REQUEST_COUNT.load(Ordering::Relaxed);
    let client_errors = CLIENT_ERROR_COUNT.load(Ordering::Relaxed);
    let server_errors = SERVER_ERROR_COUNT.load(Ordering::Relaxed);

    format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP error responses by class\n\
         # TYPE http_errors_total counter\n\
         http_errors_total{{class=\"client\"}} {}\n\
         http_errors_total{{class=\"server\"}} {}\n",
        requests, client_errors, server_errors
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render())
}
