//! Great-circle nearby search over the registered airports.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Results come back in registry insertion order, not
//! sorted by distance.
//!
//! The center airport is always part of the result. Other airports are only
//! reported once they hold at least one reading. The rule does not depend on
//! the radius, so a larger radius never drops an airport.

use crate::error::{Result, WeatherError};
use crate::model::{Airport, AirportWeatherRecord};
use crate::registry::AirportRegistry;
use crate::store::WeatherStore;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Haversine distance in kilometers between two airports
pub fn distance_km(from: &Airport, to: &Airport) -> f64 {
    haversine_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Haversine distance in kilometers between two points given in degrees
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Reject negative and non-finite radii
pub fn validate_radius(radius_km: f64) -> Result<f64> {
    if !radius_km.is_finite() {
        return Err(WeatherError::InvalidArgument {
            param: "radius".to_string(),
            message: format!("radius must be a finite number, got {}", radius_km),
        });
    }
    if radius_km < 0.0 {
        return Err(WeatherError::InvalidArgument {
            param: "radius".to_string(),
            message: format!("radius cannot be negative, got {}", radius_km),
        });
    }
    Ok(radius_km)
}

/// Parse a radius given as text, e.g. from a URL path segment
pub fn parse_radius(raw: &str) -> Result<f64> {
    let radius = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| WeatherError::InvalidArgument {
            param: "radius".to_string(),
            message: format!("'{}' is not a number", raw),
        })?;
    validate_radius(radius)
}

/// Records of the center airport and of every airport with readings within
/// `radius_km` of it.
pub fn find(
    registry: &AirportRegistry,
    store: &WeatherStore,
    center: &str,
    radius_km: f64,
) -> Result<Vec<AirportWeatherRecord>> {
    let radius_km = validate_radius(radius_km)?;
    let origin = registry.get_checked(center)?;

    registry
        .all()
        .filter(|airport| distance_km(origin, airport) <= radius_km)
        .map(|airport| store.get(&airport.iata))
        .filter_map(|record| match record {
            Ok(record) if record.iata != center && record.is_empty() => None,
            other => Some(other.cloned()),
        })
        .collect()
}
