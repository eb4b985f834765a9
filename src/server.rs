use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_http::{
    LatencyUnit,
    trace::{DefaultOnResponse, TraceLayer},
};

use crate::{
    Res,
    api::{self, AppState},
    config::Settings,
    error,
    flash,
    info, success, warning,
    webex::WebexClient,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index).post(api::submit_token))
        .route("/rooms/{access_token}", get(api::rooms).post(api::post_message))
        .route("/create_room/{access_token}", post(api::create_room))
        .route("/test_connection/{access_token}", get(api::test_connection))
        .route("/health", get(api::health))
        // Spans carry the URI (and so the token) and stay at DEBUG.
        .layer(
            TraceLayer::new_for_http().on_response(
                DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
        )
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
///
/// With `open_browser` the landing page is opened once the listener is bound.
pub async fn start_api_server(settings: Settings, open_browser: bool) -> Res<()> {
    let webex = WebexClient::from_settings(&settings)?;
    info!("Forwarding Webex calls to {}", webex.base_url());

    let state = AppState::new(Arc::new(webex), flash::signing_key(&settings.flash_secret));
    let app = router(state);

    let addr = match SocketAddr::from_str(&settings.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    let url = format!("http://{}/", addr);
    success!("Listening on {}", url);
    if open_browser {
        if let Err(e) = webbrowser::open(&url) {
            warning!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
