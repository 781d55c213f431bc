//! EmissionsIQ HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{GeocodingPort, RouteService, RoutingPort};
use infrastructure::{AppConfig, GoogleGeocodingAdapter, GoogleRoutingAdapter, init_tracing};
use presentation_http::{AppState, create_app};
use tokio::{net::TcpListener, signal, sync::watch};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration errors are fatal before anything binds
    let config = AppConfig::load()?;
    init_tracing(config.server.log_format)?;

    info!("🌍 EmissionsIQ v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    let maps_config = config.maps_config()?;
    let factors = config.emission_factor_table()?;

    let geocoder: Arc<dyn GeocodingPort> = Arc::new(GoogleGeocodingAdapter::new(&maps_config)?);
    let router: Arc<dyn RoutingPort> = Arc::new(GoogleRoutingAdapter::new(&maps_config)?);

    let state = AppState::new(RouteService::with_factors(geocoder, router, factors));
    let app = create_app(state, &config.server);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
        let _ = shutdown_tx.send(true);
    });

    // Connections still open after the timeout are dropped
    tokio::select! {
        result = server.into_future() => result?,
        () = async {
            let _ = shutdown_rx.wait_for(|&requested| requested).await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Graceful shutdown timed out after {:?}", shutdown_timeout);
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
