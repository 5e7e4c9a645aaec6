use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::{ConfigOverrides, ServerConfig, initialize_app_state};
use crate::router::{create_router, with_metrics};

pub async fn serve(config_path: &str, overrides: ConfigOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Life expectancy predictor server starting up");
    debug!("Configuration file: {}", config_path);

    let config = ServerConfig::load(config_path)?.with_overrides(overrides);
    debug!("Effective configuration: {:?}", config);
    let bind_address = config.bind_address.clone();
    let static_dir = config.static_dir.clone();

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = with_metrics(create_router(state));
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Serving frontend from {}", static_dir);
    info!("Life expectancy predictor running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
