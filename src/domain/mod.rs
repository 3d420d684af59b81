// Domain layer - Pure data model, no I/O
pub mod dataset;
pub mod map;
pub mod time_slice;
pub mod view;
