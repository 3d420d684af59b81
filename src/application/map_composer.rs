// Map composer - Builds the two-layer visual description for one slice
use crate::application::slice_resolver::StationReading;
use crate::domain::dataset::FieldSample;
use crate::domain::map::{ColorBounds, ContinuousLayer, MapLayers, MarkerLayer};

pub const COLOR_SCALE: &str = "Jet";
pub const VALUE_UNIT: &str = "kWh/m²";

const FIELD_RADIUS: u32 = 10;
const FIELD_OPACITY: f64 = 0.6;
const MARKER_SIZE: u32 = 8;

/// Composes the continuous field layer and the discrete marker layer.
/// Deterministic and side-effect free; rendering happens elsewhere.
pub fn compose(
    field: &FieldSample,
    stations: &[StationReading],
    stations_visible: bool,
    bounds: ColorBounds,
) -> MapLayers {
    let continuous = ContinuousLayer {
        lat: field.lat.clone(),
        lon: field.lon.clone(),
        z: field.z.clone(),
        color_scale: COLOR_SCALE,
        bounds,
        radius: FIELD_RADIUS,
        opacity: FIELD_OPACITY,
    };

    let markers = MarkerLayer {
        lat: stations.iter().map(|s| s.lat).collect(),
        lon: stations.iter().map(|s| s.lon).collect(),
        values: stations.iter().map(|s| s.value).collect(),
        labels: stations
            .iter()
            .map(|s| format!("{}: {:.2} {}", s.name, s.value, VALUE_UNIT))
            .collect(),
        color_scale: COLOR_SCALE,
        bounds,
        size: MARKER_SIZE,
        visible: stations_visible,
    };

    MapLayers {
        continuous,
        markers,
    }
}
