//! Coven Zero API server entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use coven_altar::http_altar_sink::HttpAltarSink;
use coven_api::config::AppConfig;
use coven_api::error::AppError;
use coven_api::routes;
use coven_api::state::AppState;
use coven_core::clock::{Clock, SystemClock};
use coven_core::mirror::OfferingSink;
use coven_core::rng::{DeterministicRng, SystemRng};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Coven Zero API server");

    let config = AppConfig::from_env()?;

    let sink: Option<Arc<dyn OfferingSink>> = match &config.altar_post_url {
        Some(url) => {
            let sink: Arc<dyn OfferingSink> = Arc::new(
                HttpAltarSink::new(url.as_str(), config.altar_timeout).map_err(AppError::from)?,
            );
            tracing::info!(url = %url, "mirroring offerings to altar");
            Some(sink)
        }
        None => {
            tracing::info!("ALTAR_POST_URL not set, offering mirror disabled");
            None
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(SystemRng::from_os()));
    let addr = config.bind_addr;
    let app_state = AppState::new(clock, rng, sink, config);

    // TODO: Replace CorsLayer::permissive() with the web altar's origin once it is fixed.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app).await.map_err(AppError::from)?;

    Ok(())
}
