//! Airport reference data loading.
//!
//! Reads the airports.dat CSV layout:
//!
//! ```text
//! id,"name","city","country","IATA","ICAO",latitude,longitude,altitude,timezone,"dst"
//! ```
//!
//! Only the IATA code and coordinates are kept. Rows without an IATA code are
//! skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Result, WeatherError};
use crate::logging::{log_airport_load_stats, log_timed_operation};
use crate::model::Airport;
use crate::service::WeatherService;

const IATA_FIELD: usize = 4;
const LATITUDE_FIELD: usize = 6;
const LONGITUDE_FIELD: usize = 7;

/// Airports seeded when no reference file is configured
pub const DEFAULT_AIRPORTS: [(&str, f64, f64); 5] = [
    ("BOS", 42.364347, -71.005181),
    ("EWR", 40.6925, -74.168667),
    ("JFK", 40.639751, -73.778925),
    ("LGA", 40.777245, -73.872608),
    ("MMU", 40.79935, -74.4148747),
];

/// The built-in airport set
pub fn default_airports() -> Vec<Airport> {
    DEFAULT_AIRPORTS
        .iter()
        .map(|(iata, lat, lon)| Airport {
            iata: iata.to_string(),
            latitude: *lat,
            longitude: *lon,
        })
        .collect()
}

/// Load airports from a reference file
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    let file = File::open(path)?;
    log_timed_operation("load_airports", || parse_airports(file))
}

/// Parse airports from any reader in airports.dat layout
pub fn parse_airports<R: Read>(reader: R) -> Result<Vec<Airport>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut airports = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() <= LONGITUDE_FIELD {
            return Err(WeatherError::InvalidArgument {
                param: "airports".to_string(),
                message: format!(
                    "line {}: expected at least {} fields, found {}",
                    line,
                    LONGITUDE_FIELD + 1,
                    record.len()
                ),
            });
        }

        let iata = &record[IATA_FIELD];
        if iata.is_empty() || iata == "\\N" {
            debug!(line = line, "Skipping airport without IATA code");
            continue;
        }

        let latitude = parse_degrees(&record[LATITUDE_FIELD], "latitude", line)?;
        let longitude = parse_degrees(&record[LONGITUDE_FIELD], "longitude", line)?;
        airports.push(Airport::new(iata, latitude, longitude)?);
    }

    Ok(airports)
}

fn parse_degrees(raw: &str, field: &str, line: u64) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| WeatherError::InvalidCoordinates {
            message: format!("line {}: {} '{}' is not a number", line, field, raw),
        })
}

/// Register every airport with the service. Duplicates are logged and skipped.
///
/// Returns the number of airports added.
pub fn seed(service: &WeatherService, airports: &[Airport], source: &str) -> usize {
    let mut added = 0;
    for airport in airports {
        match service.add_airport(&airport.iata, airport.latitude, airport.longitude) {
            Ok(()) => added += 1,
            Err(e) => warn!(iata = %airport.iata, error = %e, "Skipping airport"),
        }
    }
    log_airport_load_stats(source, added, airports.len() - added);
    added
}
