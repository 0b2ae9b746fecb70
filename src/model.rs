//! Data model for airports and their atmospheric readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WeatherError};

/// A known airport, keyed by its IATA code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Three letter IATA code (case-sensitive)
    pub iata: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Airport {
    /// Create an airport after checking the coordinates are on the globe
    pub fn new(iata: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let iata = iata.into();
        if iata.trim().is_empty() {
            return Err(WeatherError::InvalidArgument {
                param: "iata".to_string(),
                message: "IATA code cannot be empty".to_string(),
            });
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::InvalidCoordinates {
                message: format!("latitude {} for {} is outside -90..=90", latitude, iata),
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates {
                message: format!("longitude {} for {} is outside -180..=180", longitude, iata),
            });
        }
        Ok(Self {
            iata,
            latitude,
            longitude,
        })
    }
}

/// The closed set of atmospheric data types a reading can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataPointType {
    Wind,
    Temperature,
    Humidity,
    Pressure,
    CloudCover,
    Precipitation,
}

impl DataPointType {
    /// All supported data types
    pub const ALL: [DataPointType; 6] = [
        DataPointType::Wind,
        DataPointType::Temperature,
        DataPointType::Humidity,
        DataPointType::Pressure,
        DataPointType::CloudCover,
        DataPointType::Precipitation,
    ];

    /// Wire name of the data type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataPointType::Wind => "wind",
            DataPointType::Temperature => "temperature",
            DataPointType::Humidity => "humidity",
            DataPointType::Pressure => "pressure",
            DataPointType::CloudCover => "cloudcover",
            DataPointType::Precipitation => "precipitation",
        }
    }

    /// Plausible range for the mean of a reading, as (min inclusive, max exclusive)
    pub fn mean_range(&self) -> (f64, f64) {
        match self {
            DataPointType::Wind => (0.0, f64::INFINITY),
            DataPointType::Temperature => (-50.0, 100.0),
            DataPointType::Humidity => (0.0, 100.0),
            DataPointType::Pressure => (650.0, 800.0),
            DataPointType::CloudCover => (0.0, 100.0),
            DataPointType::Precipitation => (0.0, 100.0),
        }
    }
}

impl fmt::Display for DataPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataPointType {
    type Err = WeatherError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wind" => Ok(DataPointType::Wind),
            "temperature" => Ok(DataPointType::Temperature),
            "humidity" => Ok(DataPointType::Humidity),
            "pressure" => Ok(DataPointType::Pressure),
            "cloudcover" | "cloud_cover" => Ok(DataPointType::CloudCover),
            "precipitation" => Ok(DataPointType::Precipitation),
            _ => Err(WeatherError::UnknownDataType {
                name: s.to_string(),
            }),
        }
    }
}

/// A summarized atmospheric observation.
///
/// Ordering between `first`, `median` and `last` is not checked; callers may
/// send any values and they are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Number of raw observations folded into this reading
    pub count: u64,
    /// First quartile
    pub first: f64,
    /// Median
    #[serde(alias = "second")]
    pub median: f64,
    /// Last quartile
    #[serde(alias = "third")]
    pub last: f64,
    /// Mean
    pub mean: f64,
}

impl DataPoint {
    /// Check the reading is usable for the given data type
    pub fn validate(&self, data_type: DataPointType) -> Result<()> {
        if self.count == 0 {
            return Err(WeatherError::InvalidReading {
                message: "count must be at least 1".to_string(),
            });
        }
        let fields = [
            ("first", self.first),
            ("median", self.median),
            ("last", self.last),
            ("mean", self.mean),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WeatherError::InvalidReading {
                message: format!("{} is not a finite number: {}", name, value),
            });
        }
        let (min, max) = data_type.mean_range();
        if self.mean < min || self.mean >= max {
            return Err(WeatherError::InvalidReading {
                message: format!(
                    "{} mean {} is outside the range {} to {}",
                    data_type, self.mean, min, max
                ),
            });
        }
        Ok(())
    }
}

/// One airport joined with its latest reading per data type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportWeatherRecord {
    /// IATA code of the airport
    pub iata: String,
    /// Latest reading per data type; absent types have no reading yet
    #[serde(flatten)]
    pub readings: BTreeMap<DataPointType, DataPoint>,
    /// Time of the most recent update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
}

impl AirportWeatherRecord {
    /// Empty record for a freshly registered airport
    pub fn new(iata: impl Into<String>) -> Self {
        Self {
            iata: iata.into(),
            readings: BTreeMap::new(),
            last_update_time: None,
        }
    }

    pub fn get(&self, data_type: DataPointType) -> Option<&DataPoint> {
        self.readings.get(&data_type)
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
