// Map canvas primitives
use super::street::{Endpoint, EndpointRole, LatLng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

/// Base tile source descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// Marker icon assets, handed to the canvas once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcons {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub title: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawInstruction {
    Marker {
        position: LatLng,
        role: EndpointRole,
        label: Label,
    },
    Polyline {
        vertices: Vec<LatLng>,
        color: String,
        label: String,
    },
}

impl DrawInstruction {
    pub fn marker(endpoint: &Endpoint) -> Self {
        DrawInstruction::Marker {
            position: endpoint.position,
            role: endpoint.role,
            label: Label {
                title: endpoint.name.clone(),
                caption: endpoint.caption(),
            },
        }
    }
}

/// Draw instructions produced for a single street.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub instructions: Vec<DrawInstruction>,
}
