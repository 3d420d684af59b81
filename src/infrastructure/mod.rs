// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_dataset_source;
pub mod locale;
pub mod view_channel;
