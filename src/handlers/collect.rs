//! Collector endpoint handlers.
//!
//! Ingest atmospheric readings and manage the airport set.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::{Result, WeatherError};
use crate::logging::generate_request_id;
use crate::model::DataPoint;
use crate::service::WeatherService;

/// Handle GET /collect/ping requests
pub async fn collect_ping_handler() -> &'static str {
    "ready"
}

/// Handle POST /collect/weather/:iata/:point_type requests
pub async fn update_weather_handler(
    State(service): State<Arc<WeatherService>>,
    Path((iata, point_type)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/collect/weather",
        request_id = %request_id,
        iata = %iata,
        point_type = %point_type,
        "Processing weather update"
    );

    let result = parse_data_point(&body)
        .and_then(|reading| service.update_weather(&iata, &point_type, reading));

    match result {
        Ok(()) => {
            info!(
                endpoint = "/collect/weather",
                request_id = %request_id,
                iata = %iata,
                point_type = %point_type,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Weather update successful"
            );
            StatusCode::OK.into_response()
        }
        Err(error) => {
            let status = error.status_code();
            error_response(
                error,
                status,
                "/collect/weather",
                &request_id,
                &format!("iata={}, point_type={}", iata, point_type),
            )
        }
    }
}

/// Handle GET /collect/airports requests
pub async fn airports_handler(State(service): State<Arc<WeatherService>>) -> Json<Vec<String>> {
    Json(service.airport_codes())
}

/// Handle GET /collect/airport/:iata requests
pub async fn airport_handler(
    State(service): State<Arc<WeatherService>>,
    Path(iata): Path<String>,
) -> Response {
    let request_id = generate_request_id();

    match service.airport(&iata) {
        Ok(airport) => Json(airport).into_response(),
        Err(error) => {
            let status = match &error {
                WeatherError::UnknownAirport { .. } => StatusCode::NOT_FOUND,
                _ => error.status_code(),
            };
            error_response(
                error,
                status,
                "/collect/airport",
                &request_id,
                &format!("iata={}", iata),
            )
        }
    }
}

/// Handle POST /collect/airport/:iata/:lat/:long requests
pub async fn add_airport_handler(
    State(service): State<Arc<WeatherService>>,
    Path((iata, lat, long)): Path<(String, String, String)>,
) -> Response {
    let request_id = generate_request_id();

    let result = parse_coordinate(&lat, "latitude").and_then(|latitude| {
        let longitude = parse_coordinate(&long, "longitude")?;
        service.add_airport(&iata, latitude, longitude)
    });

    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => {
            let status = error.status_code();
            error_response(
                error,
                status,
                "/collect/airport",
                &request_id,
                &format!("iata={}, lat={}, long={}", iata, lat, long),
            )
        }
    }
}

/// Handle DELETE /collect/airport/:iata requests
pub async fn delete_airport_handler(
    State(service): State<Arc<WeatherService>>,
    Path(iata): Path<String>,
) -> Response {
    let request_id = generate_request_id();

    match service.delete_airport(&iata) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => {
            let status = error.status_code();
            error_response(
                error,
                status,
                "/collect/airport",
                &request_id,
                &format!("iata={}", iata),
            )
        }
    }
}

/// Decode a JSON reading body. Malformed bytes, including invalid UTF-8, are
/// an invalid reading.
fn parse_data_point(body: &[u8]) -> Result<DataPoint> {
    serde_json::from_slice(body).map_err(|e| WeatherError::InvalidReading {
        message: e.to_string(),
    })
}

fn parse_coordinate(raw: &str, name: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| WeatherError::InvalidCoordinates {
            message: format!("{} '{}' is not a number", name, raw),
        })
}
