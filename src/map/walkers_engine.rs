//! Map engine backed by the `walkers` slippy-map widget.

use super::error::MapError;
use super::mapbox::{validate_token, MapStyle, MapboxTileSource, MAX_ZOOM};
use super::{MapEngine, MapOptions};
use eframe::egui;
use geo_types::Coord;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use walkers::sources::Attribution;
use walkers::{
    HttpTiles, Map, MapMemory, Plugin, Position, Projector, TextureWithUv, TileId, Tiles,
};
use web_time::Instant;

/// How long a map may go without a single tile before it is reported.
const TILE_LOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Live walkers map: tile fetcher, view memory and home position.
pub struct WalkersEngine {
    tiles: TrackedTiles,
    memory: MapMemory,
    home: Position,
    watch: TileWatch,
}

impl MapEngine for WalkersEngine {
    fn create(ctx: &egui::Context, options: &MapOptions) -> Result<Self, MapError> {
        let token = validate_token(options.access_token.as_deref())?;
        let style = MapStyle::parse(&options.style)?;

        if !(0.0..=MAX_ZOOM).contains(&options.zoom) {
            return Err(MapError::InvalidZoom(options.zoom));
        }
        let mut memory = MapMemory::default();
        memory
            .set_zoom(options.zoom)
            .map_err(|_| MapError::InvalidZoom(options.zoom))?;

        let home = walkers::lat_lon(options.center.latitude(), options.center.longitude());
        let tiles = HttpTiles::new(MapboxTileSource::new(style, token), ctx.clone());

        Ok(Self {
            tiles: TrackedTiles::new(tiles),
            memory,
            home,
            watch: TileWatch::default(),
        })
    }

    fn zoom_in(&mut self) {
        if self.memory.zoom_in().is_err() {
            log::debug!("Already at maximum zoom");
        }
    }

    fn zoom_out(&mut self) {
        if self.memory.zoom_out().is_err() {
            log::debug!("Already at minimum zoom");
        }
    }

    fn show(&mut self, ui: &mut egui::Ui) -> Option<Coord<f64>> {
        let clicked = Arc::new(Mutex::new(None));
        let map_rect = ui.available_rect_before_wrap();

        let plugin = ClickPlugin {
            clicked: clicked.clone(),
        };
        ui.add(Map::new(Some(&mut self.tiles), &mut self.memory, self.home).with_plugin(plugin));

        let in_progress = self.tiles.inner.stats().in_progress;
        self.watch.observe(Instant::now(), self.tiles.served_any, in_progress);

        ui.painter().text(
            map_rect.max - egui::vec2(5.0, 5.0),
            egui::Align2::RIGHT_BOTTOM,
            "© Mapbox © OpenStreetMap",
            egui::FontId::proportional(10.0),
            egui::Color32::from_black_alpha(150),
        );

        let mut slot = clicked.lock().ok()?;
        slot.take()
    }

    fn load_error(&self) -> Option<MapError> {
        self.watch.stalled.then_some(MapError::TilesUnavailable)
    }
}

/// Tile fetcher that remembers whether any tile was ever drawn.
struct TrackedTiles {
    inner: HttpTiles,
    served_any: bool,
}

impl TrackedTiles {
    fn new(inner: HttpTiles) -> Self {
        Self {
            inner,
            served_any: false,
        }
    }
}

impl Tiles for TrackedTiles {
    fn at(&mut self, tile_id: TileId) -> Option<TextureWithUv> {
        let tile = self.inner.at(tile_id);
        self.served_any |= tile.is_some();
        tile
    }

    fn attribution(&self) -> Attribution {
        self.inner.attribution()
    }

    fn tile_size(&self) -> u32 {
        self.inner.tile_size()
    }
}

/// Notices a map that never receives a tile, e.g. a revoked access token.
///
/// The tile fetcher only logs download failures, so the map would otherwise
/// stay blank without any visible error.
#[derive(Debug, Default)]
struct TileWatch {
    first_shown: Option<Instant>,
    loaded: bool,
    stalled: bool,
}

impl TileWatch {
    /// Records one drawn frame. Returns whether the map counts as stalled.
    fn observe(&mut self, now: Instant, tiles_loaded: bool, in_progress: usize) -> bool {
        if tiles_loaded {
            if self.stalled {
                log::info!("Map tiles are loading again");
            }
            self.loaded = true;
            self.stalled = false;
            return false;
        }
        if self.loaded || self.stalled {
            return self.stalled;
        }

        let first_shown = *self.first_shown.get_or_insert(now);
        if in_progress == 0 && now.saturating_duration_since(first_shown) >= TILE_LOAD_TIMEOUT {
            log::warn!(
                "No map tile loaded within {:?}; check the network and the access token",
                TILE_LOAD_TIMEOUT
            );
            self.stalled = true;
        }
        self.stalled
    }
}

/// Captures the geographic position of a click on the map surface.
struct ClickPlugin {
    clicked: Arc<Mutex<Option<Coord<f64>>>>,
}

impl Plugin for ClickPlugin {
    fn run(
        self: Box<Self>,
        _ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        if !response.clicked() {
            return;
        }
        let Some(screen_pos) = response.interact_pointer_pos() else {
            return;
        };

        let position = projector.unproject(screen_pos.to_vec2());
        if let Ok(mut slot) = self.clicked.lock() {
            *slot = Some(Coord {
                x: position.x(),
                y: position.y(),
            });
        }
    }
}
