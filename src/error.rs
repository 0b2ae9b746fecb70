//! Error types for the airweather service.
//!
//! Every failure the core can produce is a variant of [`WeatherError`]. All of
//! them are recoverable at the call boundary; the HTTP layer maps them to
//! status codes through [`WeatherError::status_code`].

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for airweather operations.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The referenced IATA code is not registered
    #[error("Unknown airport: {iata}")]
    UnknownAirport { iata: String },

    /// The data type is not one of the supported atmospheric types
    #[error("Unknown data type: {name}")]
    UnknownDataType { name: String },

    /// An airport with the same IATA code already exists
    #[error("Airport already exists: {iata}")]
    AlreadyExists { iata: String },

    /// Invalid parameter errors (negative radius, malformed numbers)
    #[error("Invalid parameter: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// The atmospheric reading is malformed or out of range
    #[error("Invalid reading: {message}")]
    InvalidReading { message: String },

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Airport reference file parse errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl WeatherError {
    /// HTTP status the transport layer reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::UnknownAirport { .. }
            | WeatherError::UnknownDataType { .. }
            | WeatherError::AlreadyExists { .. }
            | WeatherError::InvalidArgument { .. }
            | WeatherError::InvalidReading { .. }
            | WeatherError::InvalidCoordinates { .. } => StatusCode::BAD_REQUEST,
            WeatherError::Config { .. }
            | WeatherError::Io(_)
            | WeatherError::Json(_)
            | WeatherError::Csv(_)
            | WeatherError::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn unknown_airport(iata: &str) -> Self {
        WeatherError::UnknownAirport {
            iata: iata.to_string(),
        }
    }
}

/// Convenience type alias for Results with WeatherError
pub type Result<T> = std::result::Result<T, WeatherError>;
