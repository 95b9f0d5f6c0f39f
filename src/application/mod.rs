// Application layer - Fetch lifecycle, geometry and view orchestration
pub mod geometry_projector;
pub mod map_view;
pub mod street_data_loader;
pub mod street_source;
