// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_street_source;
pub mod scene_canvas;
