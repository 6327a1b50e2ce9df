pub mod handlers;

pub use handlers::*;

use crate::service::RecordFilterService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// All HTTP routes over one filter service
pub fn router(service: Arc<RecordFilterService>) -> Router {
    let record_routes = Router::new()
        .route("/api/invoices", get(list_invoices))
        .route("/api/invoices/export", get(export_invoices))
        .route("/api/quotations", get(list_quotations))
        .route("/api/quotations/export", get(export_quotations))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(record_routes)
}
