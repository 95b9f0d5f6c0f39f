// Map view - Presents the fetch lifecycle and feeds the map canvas
use crate::application::geometry_projector::draw_batches;
use crate::application::street_data_loader::StreetDataLoader;
use crate::domain::fetch_state::FetchState;
use crate::domain::map::{DrawInstruction, PolylineStyle, TileLayer, Viewport};
use std::fmt;
use tokio::sync::watch;

/// Drawing surface the view hands its primitives to.
pub trait MapCanvas: Send {
    fn set_viewport(&mut self, viewport: &Viewport);
    fn set_tile_layer(&mut self, tile_layer: &TileLayer);
    fn draw(&mut self, instruction: DrawInstruction);
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub viewport: Viewport,
    pub tile_layer: TileLayer,
    pub polyline_style: PolylineStyle,
}

/// What the view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Loading,
    Error(String),
    Map { streets: usize },
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presentation::Loading => write!(f, "Loading..."),
            Presentation::Error(reason) => write!(f, "Error: {}", reason),
            Presentation::Map { streets } => write!(f, "Map with {} streets", streets),
        }
    }
}

pub struct MapView<C: MapCanvas> {
    loader: StreetDataLoader,
    canvas: C,
    settings: MapSettings,
    state: watch::Receiver<FetchState>,
    mounted: bool,
    drawn: Option<usize>,
}

impl<C: MapCanvas> MapView<C> {
    pub fn new(loader: StreetDataLoader, canvas: C, settings: MapSettings) -> Self {
        let state = loader.subscribe();
        Self {
            loader,
            canvas,
            settings,
            state,
            mounted: false,
            drawn: None,
        }
    }

    /// Activate the loader on first mount and render the initial state.
    pub fn mount(&mut self) -> Presentation {
        if !self.mounted {
            self.mounted = true;
            self.loader.activate();
        }
        self.render()
    }

    /// Render whatever the loader currently reports.
    ///
    /// Canvas instructions are issued once, the first time `Ready` is seen.
    pub fn render(&mut self) -> Presentation {
        let state = self.state.borrow_and_update();
        match &*state {
            FetchState::Pending => Presentation::Loading,
            FetchState::Failed(reason) => Presentation::Error(reason.clone()),
            FetchState::Ready(records) => {
                let streets = match self.drawn {
                    Some(streets) => streets,
                    None => {
                        self.canvas.set_viewport(&self.settings.viewport);
                        self.canvas.set_tile_layer(&self.settings.tile_layer);

                        let mut streets = 0;
                        for batch in draw_batches(records, &self.settings.polyline_style) {
                            streets += 1;
                            for instruction in batch.instructions {
                                self.canvas.draw(instruction);
                            }
                        }
                        tracing::debug!("Drew {} of {} streets", streets, records.len());
                        self.drawn = Some(streets);
                        streets
                    }
                };
                Presentation::Map { streets }
            }
        }
    }

    /// Wait for the loader to settle, then render the terminal state.
    ///
    /// If the loader is cancelled first, the view stays on `Loading`.
    pub async fn settle(&mut self) -> Presentation {
        while !self.state.borrow().is_terminal() {
            if self.state.changed().await.is_err() {
                break;
            }
        }
        self.render()
    }

    pub fn unmount(mut self) -> C {
        self.loader.cancel();
        self.canvas
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
