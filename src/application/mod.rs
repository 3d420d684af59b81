// Application layer - Use cases and the dashboard state machine
pub mod dashboard_service;
pub mod dataset_source;
pub mod map_composer;
pub mod playback;
pub mod slice_resolver;
pub mod stats_formatter;
