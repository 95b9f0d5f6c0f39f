// Scene canvas - Records draw instructions into a serializable scene
use crate::application::map_view::MapCanvas;
use crate::domain::map::{DrawInstruction, MarkerIcons, TileLayer, Viewport};
use serde::Serialize;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub viewport: Option<Viewport>,
    pub tile_layer: Option<TileLayer>,
    pub icons: MarkerIcons,
    pub instructions: Vec<DrawInstruction>,
}

/// Read side of a `SceneCanvas`, shared with the HTTP handlers
#[derive(Clone)]
pub struct SceneHandle(Arc<RwLock<Scene>>);

impl SceneHandle {
    pub fn snapshot(&self) -> Scene {
        match self.0.read() {
            Ok(scene) => scene.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

pub struct SceneCanvas {
    scene: Arc<RwLock<Scene>>,
}

impl SceneCanvas {
    pub fn new(icons: MarkerIcons) -> Self {
        Self {
            scene: Arc::new(RwLock::new(Scene {
                viewport: None,
                tile_layer: None,
                icons,
                instructions: Vec::new(),
            })),
        }
    }

    pub fn handle(&self) -> SceneHandle {
        SceneHandle(self.scene.clone())
    }

    fn update(&self, f: impl FnOnce(&mut Scene)) {
        match self.scene.write() {
            Ok(mut scene) => f(&mut scene),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl MapCanvas for SceneCanvas {
    fn set_viewport(&mut self, viewport: &Viewport) {
        self.update(|scene| scene.viewport = Some(viewport.clone()));
    }

    fn set_tile_layer(&mut self, tile_layer: &TileLayer) {
        self.update(|scene| scene.tile_layer = Some(tile_layer.clone()));
    }

    fn draw(&mut self, instruction: DrawInstruction) {
        self.update(|scene| scene.instructions.push(instruction));
    }
}
