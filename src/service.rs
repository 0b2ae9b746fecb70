//! The weather service shared by all request handlers.
//!
//! [`WeatherService`] owns the airport registry, the weather store and the
//! frequency tracker behind a single lock, so every operation observes either
//! all or none of another operation's effects.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::Result;
use crate::frequency::{FrequencySnapshot, FrequencyTracker};
use crate::model::{Airport, AirportWeatherRecord, DataPoint, DataPointType};
use crate::registry::AirportRegistry;
use crate::search;
use crate::store::WeatherStore;

/// Summary returned by the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    /// Number of (airport, data type) readings currently stored
    pub datasize: usize,
    #[serde(flatten)]
    pub frequencies: FrequencySnapshot,
}

#[derive(Debug, Default)]
struct Inner {
    registry: AirportRegistry,
    store: WeatherStore,
    tracker: FrequencyTracker,
}

/// In-memory airport weather service
#[derive(Debug, Default)]
pub struct WeatherService {
    inner: RwLock<Inner>,
}

impl WeatherService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty service wrapped in an Arc for shared ownership
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Store a reading for an airport, replacing any previous reading of the
    /// same type. `data_type` is the wire name, e.g. `"wind"`.
    pub fn update_weather(&self, iata: &str, data_type: &str, reading: DataPoint) -> Result<()> {
        let data_type: DataPointType = data_type.parse()?;
        reading.validate(data_type)?;

        let mut inner = self.inner.write();
        inner.store.upsert(iata, data_type, reading)?;
        debug!(iata = iata, data_type = %data_type, mean = reading.mean, "Reading stored");
        Ok(())
    }

    /// Weather of every airport within `radius_km` of `iata`.
    ///
    /// The query is only counted in the frequency statistics once the airport
    /// and radius are known to be valid.
    pub fn query_weather(&self, iata: &str, radius_km: f64) -> Result<Vec<AirportWeatherRecord>> {
        let radius_km = search::validate_radius(radius_km)?;

        let mut inner = self.inner.write();
        inner.registry.get_checked(iata)?;
        inner.tracker.record_query(iata);
        inner.tracker.record_radius(radius_km);

        let records = search::find(&inner.registry, &inner.store, iata, radius_km)?;
        debug!(iata = iata, radius_km = radius_km, matches = records.len(), "Nearby search");
        Ok(records)
    }

    /// Register a new airport with no readings
    pub fn add_airport(&self, iata: &str, latitude: f64, longitude: f64) -> Result<()> {
        let airport = Airport::new(iata, latitude, longitude)?;

        let mut inner = self.inner.write();
        inner.registry.add(airport)?;
        inner.store.track(iata);
        inner.tracker.track(iata);
        info!(iata = iata, latitude = latitude, longitude = longitude, "Airport added");
        Ok(())
    }

    /// Remove an airport together with its readings and query counter
    pub fn delete_airport(&self, iata: &str) -> Result<()> {
        let mut inner = self.inner.write();
        inner.registry.remove(iata)?;
        inner.store.purge(iata);
        inner.tracker.purge(iata);
        info!(iata = iata, "Airport deleted");
        Ok(())
    }

    /// Frequency statistics and live dataset size
    pub fn status(&self) -> StatusReport {
        let inner = self.inner.read();
        StatusReport {
            datasize: inner.store.datasize(),
            frequencies: inner.tracker.snapshot(inner.registry.codes()),
        }
    }

    /// Look up a single airport
    pub fn airport(&self, iata: &str) -> Result<Airport> {
        self.inner.read().registry.get_checked(iata).cloned()
    }

    /// IATA codes of all airports in registration order
    pub fn airport_codes(&self) -> Vec<String> {
        self.inner
            .read()
            .registry
            .codes()
            .map(str::to_string)
            .collect()
    }

    pub fn airport_count(&self) -> usize {
        self.inner.read().registry.count()
    }

    /// Zero all frequency counters
    pub fn reset_statistics(&self) {
        self.inner.write().tracker.reset();
        info!("Frequency statistics reset");
    }
}
