//! karmic-api
//!
//! HTTP surface for the wellbeing questionnaires: instrument definitions,
//! stateless scoring endpoints, the emotion body map, and per-session
//! assessment state.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Instruments (public schema data)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/validate",
            post(routes::instruments::validate_scores),
        )
        // Stateless scoring
        .route("/score/deq", post(routes::scoring::score_deq))
        .route("/score/sss", post(routes::scoring::score_sss))
        .route("/body-map", post(routes::body_map::map_body))
        // Session state
        .route(
            "/sessions/{key}/assessment",
            get(routes::sessions::get_assessment)
                .post(routes::sessions::submit_assessment)
                .delete(routes::sessions::reset_assessment),
        )
        .route(
            "/sessions/{key}/assessment/skip",
            post(routes::sessions::skip_assessment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}
