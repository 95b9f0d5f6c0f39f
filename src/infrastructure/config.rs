// Application configuration loading
use crate::application::map_view::MapSettings;
use crate::domain::map::{MarkerIcons, PolylineStyle, TileLayer, Viewport};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::time::Duration;

const LEAFLET_IMAGES: &str = "https://unpkg.com/leaflet@1.9.4/dist/images";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub streets: StreetsSettings,
    pub map: MapConfig,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StreetsSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl StreetsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub viewport: Viewport,
    pub tile_layer: TileLayer,
    pub polyline_color: String,
    pub icons: MarkerIcons,
}

impl MapConfig {
    pub fn settings(&self) -> MapSettings {
        MapSettings {
            viewport: self.viewport.clone(),
            tile_layer: self.tile_layer.clone(),
            polyline_style: PolylineStyle {
                color: self.polyline_color.clone(),
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

fn with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("streets.endpoint", "http://localhost:8080/api/streets")?
        .set_default("streets.timeout_secs", 30)?
        .set_default("map.viewport.center.lat", 33.6844)?
        .set_default("map.viewport.center.lng", 73.0479)?
        .set_default("map.viewport.zoom", 12)?
        .set_default("map.tile_layer.url", "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")?
        .set_default(
            "map.tile_layer.attribution",
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        )?
        .set_default("map.polyline_color", "blue")?
        .set_default("map.icons.icon_url", format!("{}/marker-icon.png", LEAFLET_IMAGES))?
        .set_default("map.icons.icon_retina_url", format!("{}/marker-icon-2x.png", LEAFLET_IMAGES))?
        .set_default("map.icons.shadow_url", format!("{}/marker-shadow.png", LEAFLET_IMAGES))?
        .set_default("server.bind_addr", "0.0.0.0:3000")?)
}

fn load_with<S>(source: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = with_defaults()?.add_source(source).build()?;

    Ok(settings.try_deserialize()?)
}

/// Built-in defaults, overridden by `config/street_map.*` when present
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_with(config::File::with_name("config/street_map").required(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::street::LatLng;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults_without_file() {
        let config = load_with(File::with_name("config/does_not_exist").required(false)).unwrap();

        assert_eq!(config.streets.endpoint, "http://localhost:8080/api/streets");
        assert_eq!(config.streets.timeout(), Duration::from_secs(30));
        assert_eq!(config.map.viewport.center, LatLng::new(33.6844, 73.0479));
        assert_eq!(config.map.viewport.zoom, 12);
        assert_eq!(config.map.settings().polyline_style.color, "blue");
        assert!(config.map.icons.shadow_url.ends_with("marker-shadow.png"));
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [streets]
            endpoint = "http://streets.internal/api/streets"

            [map]
            polyline_color = "red"

            [map.viewport]
            zoom = 15
        "#;

        let config = load_with(File::from_str(toml, FileFormat::Toml)).unwrap();

        assert_eq!(config.streets.endpoint, "http://streets.internal/api/streets");
        assert_eq!(config.streets.timeout_secs, 30);
        assert_eq!(config.map.viewport.zoom, 15);
        assert_eq!(config.map.viewport.center.lat, 33.6844);
        assert_eq!(config.map.polyline_color, "red");
    }
}
