//! # Budget Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging (and OTLP span export when configured)
//! - Initialize the repository adapter
//! - Create the transaction service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use budget_hex::{TransactionService, inbound::HttpServer};
use budget_repo::build_repo;

use config::{Config, LogFormat};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("budget-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let otel = config.otlp_endpoint.as_deref().map(init_tracer).transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,budget_app=debug,budget_hex=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .with(telemetry)
        .init();

    tracing::info!("Starting budget server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    if let Some(limit) = config.monthly_budget_limit {
        tracing::info!("Monthly budget limit: {}", limit);
    }

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let service = TransactionService::new(repo).with_monthly_budget(config.monthly_budget_limit);

    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        if let Err(e) = provider.shutdown() {
            tracing::warn!("Failed to flush traces: {}", e);
        }
    }
    Ok(())
}
