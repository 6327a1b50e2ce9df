use billing_records::{api, create_pool, AppConfig, PgRecordSource, RecordFilterService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging, local time stamps
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    // Database connection pool
    let pool = create_pool(&config.database).await?;
    info!("Database pool created");

    // Filter service over the Postgres source
    let source = Arc::new(PgRecordSource::new(pool));
    let service = Arc::new(RecordFilterService::new(source, config.filter.enrichment));
    info!("Client enrichment strategy: {:?}", service.strategy());

    // Build routes
    let app = api::router(service).layer(ServiceBuilder::new());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/invoices            - filtered invoices (JSON)");
    info!("  GET /api/invoices/export     - filtered invoices (CSV)");
    info!("  GET /api/quotations          - filtered quotations (JSON)");
    info!("  GET /api/quotations/export   - filtered quotations (CSV)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
