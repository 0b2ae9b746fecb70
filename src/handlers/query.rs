//! Query endpoint handlers.
//!
//! Serve nearby weather and the frequency status summary.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::search::parse_radius;
use crate::service::{StatusReport, WeatherService};

/// Handle GET /query/ping requests
pub async fn query_ping_handler(State(service): State<Arc<WeatherService>>) -> Json<StatusReport> {
    Json(service.status())
}

/// Handle GET /query/weather/:iata/:radius requests
pub async fn weather_handler(
    State(service): State<Arc<WeatherService>>,
    Path((iata, radius)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/query/weather",
        request_id = %request_id,
        iata = %iata,
        radius = %radius,
        "Processing weather query"
    );

    let result = parse_radius(&radius).and_then(|radius_km| service.query_weather(&iata, radius_km));

    match result {
        Ok(records) => {
            info!(
                endpoint = "/query/weather",
                request_id = %request_id,
                iata = %iata,
                matches = records.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Weather query successful"
            );
            Json(records).into_response()
        }
        Err(error) => {
            let status = error.status_code();
            error_response(
                error,
                status,
                "/query/weather",
                &request_id,
                &format!("iata={}, radius={}", iata, radius),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::build_router;
    use crate::service::WeatherService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_weather_query_through_router() {
        let service = WeatherService::new_shared();
        service.add_airport("JFK", 40.64, -73.78).unwrap();
        let app = build_router(service);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/query/weather/JFK/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([{ "iata": "JFK" }]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/query/weather/JFK/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("radius"));
    }

    #[tokio::test]
    async fn test_query_ping_through_router() {
        let service = WeatherService::new_shared();
        service.add_airport("JFK", 40.64, -73.78).unwrap();
        let app = build_router(service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/query/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["datasize"], 0);
        assert_eq!(json["iata_freq"]["JFK"], 0.0);
    }
}
