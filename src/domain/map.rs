// Map layer descriptions handed to the rendering collaborator
use serde::Serialize;

/// Shared color-scale bounds in kWh/m². Fixed across all slices so months
/// stay visually comparable; never derived from a slice's own min/max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorBounds {
    pub min: f64,
    pub max: f64,
}

impl ColorBounds {
    pub const GLOBAL: ColorBounds = ColorBounds { min: 1.5, max: 6.5 };
}

/// Continuous interpolated-field layer: one colored point per field sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinuousLayer {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub z: Vec<f64>,
    pub color_scale: &'static str,
    pub bounds: ColorBounds,
    pub radius: u32,
    pub opacity: f64,
}

/// Discrete station-marker layer, one marker per station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub color_scale: &'static str,
    pub bounds: ColorBounds,
    pub size: u32,
    pub visible: bool,
}

/// The two-layer visual description for one time slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayers {
    pub continuous: ContinuousLayer,
    pub markers: MarkerLayer,
}

/// Fixed geographic viewport the collaborator draws into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub basemap: String,
}
