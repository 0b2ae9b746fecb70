//! Request frequency statistics reported by the status endpoint.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Upper bounds (exclusive, km) of the radius histogram bands. The last band
/// is open ended.
pub const RADIUS_BANDS_KM: [f64; 4] = [50.0, 100.0, 250.0, 500.0];

/// Number of radius histogram buckets
pub const RADIUS_BUCKETS: usize = RADIUS_BANDS_KM.len() + 1;

/// Query fraction per airport, serialized as a JSON object in registry order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IataFrequencies(pub Vec<(String, f64)>);

impl IataFrequencies {
    pub fn get(&self, iata: &str) -> Option<f64> {
        self.0.iter().find(|(code, _)| code == iata).map(|(_, f)| *f)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(code, _)| code.as_str())
    }
}

impl Serialize for IataFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, fraction) in &self.0 {
            map.serialize_entry(code, fraction)?;
        }
        map.end()
    }
}

/// Point-in-time view of the frequency counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySnapshot {
    /// Number of registered airports
    pub total_airports: usize,
    /// Fraction of all queries that targeted each airport
    pub iata_freq: IataFrequencies,
    /// Query counts per radius band
    pub radius_freq: Vec<u64>,
}

/// Counts queries per airport and the radii they asked for
#[derive(Debug, Default)]
pub struct FrequencyTracker {
    queries: HashMap<String, u64>,
    radius_histogram: [u64; RADIUS_BUCKETS],
}

impl FrequencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a zero counter for a newly registered airport
    pub fn track(&mut self, iata: &str) {
        self.queries.entry(iata.to_string()).or_insert(0);
    }

    /// Count a query against an airport. Untracked codes are ignored.
    pub fn record_query(&mut self, iata: &str) {
        if let Some(count) = self.queries.get_mut(iata) {
            *count += 1;
        }
    }

    /// Add a requested radius to the histogram
    pub fn record_radius(&mut self, radius_km: f64) {
        self.radius_histogram[radius_bucket(radius_km)] += 1;
    }

    /// Forget the counter of a deleted airport
    pub fn purge(&mut self, iata: &str) {
        self.queries.remove(iata);
    }

    /// Zero every counter, keeping the tracked airports
    pub fn reset(&mut self) {
        self.queries.values_mut().for_each(|count| *count = 0);
        self.radius_histogram = [0; RADIUS_BUCKETS];
    }

    pub fn query_count(&self, iata: &str) -> Option<u64> {
        self.queries.get(iata).copied()
    }

    /// Build the snapshot over `codes`, which must be the registry's codes in
    /// registry order.
    pub fn snapshot<'a>(&self, codes: impl Iterator<Item = &'a str>) -> FrequencySnapshot {
        let codes: Vec<&str> = codes.collect();
        debug_assert_eq!(
            codes.len(),
            self.queries.len(),
            "frequency counters out of sync with the airport registry"
        );
        debug_assert!(
            codes.iter().all(|code| self.queries.contains_key(*code)),
            "frequency counter missing for a registered airport"
        );

        let total: u64 = self.queries.values().sum();
        let iata_freq = codes
            .iter()
            .map(|code| {
                let count = self.queries.get(*code).copied().unwrap_or(0);
                let fraction = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                (code.to_string(), fraction)
            })
            .collect();

        FrequencySnapshot {
            total_airports: codes.len(),
            iata_freq: IataFrequencies(iata_freq),
            radius_freq: self.radius_histogram.to_vec(),
        }
    }
}

/// Histogram bucket for a radius
fn radius_bucket(radius_km: f64) -> usize {
    RADIUS_BANDS_KM
        .iter()
        .position(|upper| radius_km < *upper)
        .unwrap_or(RADIUS_BANDS_KM.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_bucket_bounds() {
        assert_eq!(radius_bucket(0.0), 0);
        assert_eq!(radius_bucket(49.9), 0);
        assert_eq!(radius_bucket(50.0), 1);
        assert_eq!(radius_bucket(200.0), 2);
        assert_eq!(radius_bucket(250.0), 3);
        assert_eq!(radius_bucket(500.0), 4);
        assert_eq!(radius_bucket(20_000.0), 4);
    }

    #[test]
    fn test_unknown_codes_are_not_counted() {
        let mut tracker = FrequencyTracker::new();
        tracker.track("BOS");
        tracker.record_query("XXX");
        assert_eq!(tracker.query_count("XXX"), None);
        assert_eq!(tracker.query_count("BOS"), Some(0));
    }

    #[test]
    fn test_snapshot_fractions_in_registry_order() {
        let mut tracker = FrequencyTracker::new();
        for code in ["BOS", "JFK", "LGA"] {
            tracker.track(code);
        }
        tracker.record_query("BOS");
        tracker.record_query("JFK");
        tracker.record_query("JFK");
        tracker.record_query("JFK");
        tracker.record_radius(0.0);
        tracker.record_radius(200.0);

        let snapshot = tracker.snapshot(["BOS", "JFK", "LGA"].into_iter());
        assert_eq!(snapshot.total_airports, 3);
        assert_eq!(snapshot.iata_freq.codes().collect::<Vec<_>>(), vec!["BOS", "JFK", "LGA"]);
        assert_eq!(snapshot.iata_freq.get("BOS"), Some(0.25));
        assert_eq!(snapshot.iata_freq.get("JFK"), Some(0.75));
        assert_eq!(snapshot.iata_freq.get("LGA"), Some(0.0));
        assert_eq!(snapshot.radius_freq, vec![1, 0, 1, 0, 0]);

        let json = serde_json::to_string(&snapshot.iata_freq).unwrap();
        assert_eq!(json, r#"{"BOS":0.25,"JFK":0.75,"LGA":0.0}"#);
    }

    #[test]
    fn test_snapshot_without_queries() {
        let mut tracker = FrequencyTracker::new();
        tracker.track("BOS");
        let snapshot = tracker.snapshot(["BOS"].into_iter());
        assert_eq!(snapshot.iata_freq.get("BOS"), Some(0.0));
        assert_eq!(snapshot.radius_freq, vec![0; RADIUS_BUCKETS]);
    }

    #[test]
    fn test_purge_and_reset() {
        let mut tracker = FrequencyTracker::new();
        tracker.track("BOS");
        tracker.track("JFK");
        tracker.record_query("BOS");
        tracker.record_query("JFK");
        tracker.record_radius(600.0);

        tracker.purge("BOS");
        let snapshot = tracker.snapshot(["JFK"].into_iter());
        assert_eq!(snapshot.iata_freq.get("JFK"), Some(1.0));
        assert!(snapshot.iata_freq.get("BOS").is_none());

        tracker.reset();
        assert_eq!(tracker.query_count("JFK"), Some(0));
        assert_eq!(tracker.snapshot(["JFK"].into_iter()).radius_freq, vec![0; RADIUS_BUCKETS]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "frequency counter missing")]
    fn test_snapshot_rejects_same_size_but_different_keys() {
        let mut tracker = FrequencyTracker::new();
        tracker.track("BOS");
        tracker.track("JFK");
        tracker.snapshot(["BOS", "LGA"].into_iter());
    }
}
