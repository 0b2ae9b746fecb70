//! The set of known airports.

use std::collections::HashMap;

use crate::error::{Result, WeatherError};
use crate::model::Airport;

/// Registered airports, iterated in insertion order
#[derive(Debug, Default)]
pub struct AirportRegistry {
    airports: HashMap<String, Airport>,
    order: Vec<String>,
}

impl AirportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Coordinates of an existing code are never replaced.
    pub fn add(&mut self, airport: Airport) -> Result<()> {
        if self.airports.contains_key(&airport.iata) {
            return Err(WeatherError::AlreadyExists { iata: airport.iata });
        }
        self.order.push(airport.iata.clone());
        self.airports.insert(airport.iata.clone(), airport);
        Ok(())
    }

    /// Remove an airport, returning it
    pub fn remove(&mut self, iata: &str) -> Result<Airport> {
        let airport = self
            .airports
            .remove(iata)
            .ok_or_else(|| WeatherError::unknown_airport(iata))?;
        self.order.retain(|code| code != iata);
        Ok(airport)
    }

    pub fn get(&self, iata: &str) -> Option<&Airport> {
        self.airports.get(iata)
    }

    /// Get an airport, failing with `UnknownAirport`
    pub fn get_checked(&self, iata: &str) -> Result<&Airport> {
        self.get(iata)
            .ok_or_else(|| WeatherError::unknown_airport(iata))
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.airports.contains_key(iata)
    }

    /// All airports in insertion order
    pub fn all(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.order.iter().filter_map(|code| self.airports.get(code))
    }

    /// All IATA codes in insertion order
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }
}
