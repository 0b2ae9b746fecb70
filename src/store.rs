//! Latest atmospheric readings per airport.

use chrono::Utc;
use std::collections::HashMap;

use crate::error::{Result, WeatherError};
use crate::model::{AirportWeatherRecord, DataPoint, DataPointType};

/// Holds one [`AirportWeatherRecord`] per registered airport.
///
/// A record is created empty by [`WeatherStore::track`] when an airport is
/// registered and dropped by [`WeatherStore::purge`] when it is deleted, so the
/// store's key set mirrors the registry.
#[derive(Debug, Default)]
pub struct WeatherStore {
    records: HashMap<String, AirportWeatherRecord>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty record for a newly registered airport
    pub fn track(&mut self, iata: &str) {
        self.records
            .entry(iata.to_string())
            .or_insert_with(|| AirportWeatherRecord::new(iata));
    }

    /// Replace the reading of `data_type` for an airport
    pub fn upsert(&mut self, iata: &str, data_type: DataPointType, reading: DataPoint) -> Result<()> {
        let record = self
            .records
            .get_mut(iata)
            .ok_or_else(|| WeatherError::unknown_airport(iata))?;
        record.readings.insert(data_type, reading);
        record.last_update_time = Some(Utc::now());
        Ok(())
    }

    /// Current record of an airport
    pub fn get(&self, iata: &str) -> Result<&AirportWeatherRecord> {
        self.records
            .get(iata)
            .ok_or_else(|| WeatherError::unknown_airport(iata))
    }

    /// Drop every reading of an airport
    pub fn purge(&mut self, iata: &str) {
        self.records.remove(iata);
    }

    /// Number of distinct (airport, data type) readings held
    pub fn datasize(&self) -> usize {
        self.records.values().map(|r| r.readings.len()).sum()
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.records.contains_key(iata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(mean: f64) -> DataPoint {
        DataPoint {
            count: 10,
            first: 10.0,
            median: 20.0,
            last: 30.0,
            mean,
        }
    }

    #[test]
    fn test_upsert_replaces_previous_reading() {
        let mut store = WeatherStore::new();
        store.track("BOS");

        store.upsert("BOS", DataPointType::Wind, reading(22.0)).unwrap();
        store.upsert("BOS", DataPointType::Wind, reading(40.0)).unwrap();

        let record = store.get("BOS").unwrap();
        assert_eq!(record.readings.len(), 1);
        assert_eq!(record.get(DataPointType::Wind), Some(&reading(40.0)));
        assert!(record.last_update_time.is_some());
        assert_eq!(store.datasize(), 1);
    }

    #[test]
    fn test_upsert_unknown_airport() {
        let mut store = WeatherStore::new();
        assert!(matches!(
            store.upsert("XXX", DataPointType::Wind, reading(1.0)),
            Err(WeatherError::UnknownAirport { .. })
        ));
        assert!(store.get("XXX").is_err());
    }

    #[test]
    fn test_purge_and_datasize() {
        let mut store = WeatherStore::new();
        store.track("BOS");
        store.track("JFK");
        store.upsert("BOS", DataPointType::Wind, reading(1.0)).unwrap();
        store.upsert("BOS", DataPointType::Humidity, reading(50.0)).unwrap();
        store.upsert("JFK", DataPointType::Wind, reading(2.0)).unwrap();
        assert_eq!(store.datasize(), 3);

        store.purge("BOS");
        assert_eq!(store.datasize(), 1);
        assert!(!store.contains("BOS"));

        // Re-tracking starts from an empty record
        store.track("BOS");
        assert!(store.get("BOS").unwrap().is_empty());
    }

    #[test]
    fn test_track_keeps_existing_readings() {
        let mut store = WeatherStore::new();
        store.track("BOS");
        store.upsert("BOS", DataPointType::Wind, reading(1.0)).unwrap();
        store.track("BOS");
        assert_eq!(store.datasize(), 1);
    }
}
