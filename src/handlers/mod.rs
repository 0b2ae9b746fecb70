//! HTTP request handlers for the airweather API.
//!
//! The collector endpoints ingest readings and manage airports; the query
//! endpoints serve nearby weather and the status summary.

pub mod collect;
pub mod query;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::WeatherError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::service::WeatherService;

pub use collect::{
    add_airport_handler, airport_handler, airports_handler, collect_ping_handler,
    delete_airport_handler, update_weather_handler,
};
pub use query::{query_ping_handler, weather_handler};

/// Build the application router around a shared service
pub fn build_router(service: Arc<WeatherService>) -> Router {
    Router::new()
        .route("/collect/ping", get(collect_ping_handler))
        .route(
            "/collect/weather/:iata/:point_type",
            post(update_weather_handler),
        )
        .route("/collect/airports", get(airports_handler))
        .route(
            "/collect/airport/:iata",
            get(airport_handler).delete(delete_airport_handler),
        )
        .route(
            "/collect/airport/:iata/:lat/:long",
            post(add_airport_handler),
        )
        .route("/query/ping", get(query_ping_handler))
        .route("/query/weather/:iata/:radius", get(weather_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Log a failed request and turn it into a JSON error response
pub(crate) fn error_response(
    error: WeatherError,
    status: StatusCode,
    endpoint: &str,
    request_id: &str,
    params: &str,
) -> Response {
    log_request_error(&error, endpoint, request_id, Some(params));

    (
        status,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
