// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod polarity_api;
pub mod svg;
