// Slice resolver - Pure lookup of the three aligned pieces for one slice
use crate::domain::dataset::{Dataset, FieldSample, SliceStats};
use crate::domain::time_slice::TimeSliceKey;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SliceError {
    #[error("no data for slice {slice}")]
    NotFound { slice: &'static str },
    #[error("field sample for slice {slice} is misaligned")]
    MisalignedField { slice: &'static str },
    #[error("station '{station}' has no value for slice {slice}")]
    MissingStationValue {
        station: String,
        slice: &'static str,
    },
}

/// One station paired with its measured value for the resolved slice.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlice<'a> {
    pub field: &'a FieldSample,
    pub stations: Vec<StationReading>,
    pub stats: &'a SliceStats,
}

/// Looks up everything needed to render `key`. A slice missing either its
/// interpolation or its stats is unavailable; integrity violations fail the
/// resolution outright so nothing partial reaches the renderer.
pub fn resolve(dataset: &Dataset, key: TimeSliceKey) -> Result<ResolvedSlice<'_>, SliceError> {
    let field = dataset
        .interpolation
        .get(&key)
        .ok_or(SliceError::NotFound { slice: key.code() })?;
    let stats = dataset
        .stats
        .get(&key)
        .ok_or(SliceError::NotFound { slice: key.code() })?;

    if !field.is_aligned() {
        return Err(SliceError::MisalignedField { slice: key.code() });
    }

    // Full, unfiltered station list; months are load-validated so only the
    // Annual aggregate can be absent here.
    let stations = dataset
        .stations
        .iter()
        .map(|station| {
            let value = station
                .value_for(key)
                .ok_or_else(|| SliceError::MissingStationValue {
                    station: station.name.clone(),
                    slice: key.code(),
                })?;
            Ok(StationReading {
                name: station.name.clone(),
                lat: station.lat,
                lon: station.lon,
                value,
            })
        })
        .collect::<Result<Vec<_>, SliceError>>()?;

    Ok(ResolvedSlice {
        field,
        stations,
        stats,
    })
}
