//! # airweather
//!
//! An in-memory weather collector and query server keyed by airport.
//!
//! Collectors push the latest atmospheric reading per data type for an
//! airport; clients ask for the weather of every airport within a radius of a
//! given one and for request statistics.
//!
//! ## Architecture
//!
//! - **Core**: [`AirportRegistry`], [`WeatherStore`], [`FrequencyTracker`] and the
//!   haversine [`search`], composed by [`WeatherService`] behind one lock
//! - **API Layer**: axum handlers for the collector and query endpoints
//! - **Reference data**: airports.dat loading and the built-in airport set

pub mod config;
pub mod error;
pub mod frequency;
pub mod handlers;
pub mod loader;
pub mod logging;
pub mod model;
pub mod registry;
pub mod search;
pub mod server;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{Result, WeatherError};
pub use frequency::{FrequencySnapshot, FrequencyTracker, IataFrequencies};
pub use handlers::build_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_request_error,
    log_timed_operation,
};
pub use model::{Airport, AirportWeatherRecord, DataPoint, DataPointType};
pub use registry::AirportRegistry;
pub use service::{StatusReport, WeatherService};
pub use store::WeatherStore;
