// Application state for HTTP handlers
use crate::application::map_view::Presentation;
use crate::infrastructure::scene_canvas::SceneHandle;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub presentation: watch::Receiver<Presentation>,
    pub scene: SceneHandle,
}
