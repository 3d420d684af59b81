// Dataset domain model - the precomputed document served by the pipeline
use super::time_slice::{MONTH_ORDER, TimeSliceKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Scatter of interpolated field estimates for one time slice.
/// The three vectors are parallel and must have identical length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub z: Vec<f64>,
}

impl FieldSample {
    pub fn is_aligned(&self) -> bool {
        self.lat.len() == self.lon.len() && self.lon.len() == self.z.len()
    }
}

/// A fixed-location sensor with one measured value per time slice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(flatten)]
    values: HashMap<TimeSliceKey, f64>,
}

impl Station {
    pub fn new(name: String, lat: f64, lon: f64, values: HashMap<TimeSliceKey, f64>) -> Self {
        Self {
            name,
            lat,
            lon,
            values,
        }
    }

    pub fn value_for(&self, key: TimeSliceKey) -> Option<f64> {
        self.values.get(&key).copied()
    }
}

/// Categorical solar potential, ordered Low < Moderate < High < Excellent.
/// Wire names match the source dataset's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PotentialTier {
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Excelente")]
    Excellent,
}

impl PotentialTier {
    /// Key used to look the localized label up in a catalog.
    pub fn code(self) -> &'static str {
        match self {
            PotentialTier::Low => "Bajo",
            PotentialTier::Moderate => "Moderado",
            PotentialTier::High => "Alto",
            PotentialTier::Excellent => "Excelente",
        }
    }
}

/// Region with the highest peak value for a slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub dept: String,
    pub val: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub p90: f64,
    pub potential: PotentialTier,
    pub leader: Leader,
}

/// The immutable dashboard dataset, fetched once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub interpolation: HashMap<TimeSliceKey, FieldSample>,
    pub stations: Vec<Station>,
    pub stats: HashMap<TimeSliceKey, SliceStats>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("field sample for {slice} is misaligned: lat={lat}, lon={lon}, z={z}")]
    MisalignedField {
        slice: &'static str,
        lat: usize,
        lon: usize,
        z: usize,
    },
    #[error("station '{station}' has no value for month {month}")]
    MissingStationMonth {
        station: String,
        month: &'static str,
    },
    #[error("stats for {slice} violate min <= p90 <= max")]
    StatsOutOfOrder { slice: &'static str },
}

impl Dataset {
    /// Validates the integrity invariants once, right after deserialization.
    /// A dataset that fails here is rejected wholesale; no partial renders.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (key, field) in &self.interpolation {
            if !field.is_aligned() {
                return Err(DatasetError::MisalignedField {
                    slice: key.code(),
                    lat: field.lat.len(),
                    lon: field.lon.len(),
                    z: field.z.len(),
                });
            }
        }

        // Every station must report all 12 months; Annual is optional.
        for station in &self.stations {
            for month in MONTH_ORDER {
                if station.value_for(month).is_none() {
                    return Err(DatasetError::MissingStationMonth {
                        station: station.name.clone(),
                        month: month.code(),
                    });
                }
            }
        }

        for (key, stats) in &self.stats {
            if !(stats.min <= stats.p90 && stats.p90 <= stats.max) {
                return Err(DatasetError::StatsOutOfOrder { slice: key.code() });
            }
        }

        Ok(())
    }
}
