use crate::models::{EnrichedRecord, RawFilterInput, RecordKind};
use crate::service::{export_to_csv, RecordFilterService};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Listing response
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub success: bool,
    pub message: String,
    pub records: Vec<EnrichedRecord>,
}

/// Health check
pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn list_invoices(
    State(service): State<Arc<RecordFilterService>>,
    Query(raw): Query<RawFilterInput>,
) -> Response {
    list_records(&service, RecordKind::Invoice, &raw).await
}

pub async fn list_quotations(
    State(service): State<Arc<RecordFilterService>>,
    Query(raw): Query<RawFilterInput>,
) -> Response {
    list_records(&service, RecordKind::Quotation, &raw).await
}

pub async fn export_invoices(
    State(service): State<Arc<RecordFilterService>>,
    Query(raw): Query<RawFilterInput>,
) -> Response {
    export_records(&service, RecordKind::Invoice, &raw).await
}

pub async fn export_quotations(
    State(service): State<Arc<RecordFilterService>>,
    Query(raw): Query<RawFilterInput>,
) -> Response {
    export_records(&service, RecordKind::Quotation, &raw).await
}

async fn list_records(
    service: &RecordFilterService,
    kind: RecordKind,
    raw: &RawFilterInput,
) -> Response {
    match service.run_pass(kind, raw).await {
        Ok(records) => {
            let response = RecordListResponse {
                success: true,
                message: format!("Found {} {} records", records.len(), kind),
                records,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let response = RecordListResponse {
                success: false,
                message: format!("Failed to load {} records: {}", kind, e),
                records: Vec::new(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}

async fn export_records(
    service: &RecordFilterService,
    kind: RecordKind,
    raw: &RawFilterInput,
) -> Response {
    let exported = match service.run_pass(kind, raw).await {
        Ok(records) => export_to_csv(&records, Vec::new()),
        Err(e) => Err(e),
    };

    match exported {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to export {} records: {}", kind, e),
        )
            .into_response(),
    }
}
