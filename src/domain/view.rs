// Presentation-ready view models
use super::dataset::PotentialTier;
use super::map::{MapLayers, Viewport};
use super::time_slice::TimeSliceKey;
use serde::Serialize;

/// Display-ready statistics for one slice. All magnitudes are rounded to two
/// decimal places; `p90_fill_pct` is a whole percent for the indicator bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationStats {
    pub tier: PotentialTier,
    pub tier_label: String,
    pub accent: &'static str,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub p90: f64,
    pub variability: f64,
    pub leader_dept: String,
    pub leader_val: f64,
    pub p90_fill_pct: u8,
}

/// One complete rendered frame: everything the collaborator needs to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub slice: TimeSliceKey,
    pub slice_label: String,
    pub playing: bool,
    pub locale: String,
    pub viewport: Viewport,
    pub layers: MapLayers,
    pub stats: PresentationStats,
}
