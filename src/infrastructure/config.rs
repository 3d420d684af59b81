use crate::domain::map::Viewport;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub dataset: DatasetSettings,
    pub viewport: ViewportSettings,
    pub playback: PlaybackSettings,
    pub locale: LocaleSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewportSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub basemap: String,
}

impl ViewportSettings {
    pub fn to_viewport(&self) -> Viewport {
        Viewport {
            center_lat: self.center_lat,
            center_lon: self.center_lon,
            zoom: self.zoom,
            basemap: self.basemap.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaybackSettings {
    pub tick_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleSettings {
    pub fallback: String,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
