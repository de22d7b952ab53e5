use orrery_engine::{
    Game, EngineContext, RenderContext,
    InputEvent, InputQueue, VectorState,
    FixedTimestep, FrameClock, AssetManifest, LoadOutcome,
    flatten_events,
};
use glam::Vec2;

use crate::canvas::CanvasPainter;
use crate::error::WebError;
use crate::images::ImageLoader;

/// Drives one `Game` from the page's animation frames: fixed-step updates,
/// asset gating, drawing and painting. Usually owned by `export_game!`.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    vectors: VectorState,
    timestep: FixedTimestep,
    clock: FrameClock,
    images: ImageLoader,
    painter: Option<CanvasPainter>,
    /// Surface size handed to `render`; updated as soon as the canvas changes.
    viewport: Vec2,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self::with_seed(game, config.seed)
    }

    /// Build a runner whose context RNG starts from `seed`.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        Self {
            timestep: FixedTimestep::new(config.fixed_dt),
            game,
            ctx: EngineContext::with_seed(seed),
            input: InputQueue::new(),
            vectors: VectorState::new(),
            clock: FrameClock::new(),
            images: ImageLoader::new(),
            painter: None,
            viewport: Vec2::new(config.world_width, config.world_height),
            initialized: false,
        }
    }

    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Paint into the canvas with the given element id from now on.
    pub fn attach_canvas(&mut self, canvas_id: &str) -> Result<(), WebError> {
        let painter = CanvasPainter::from_element_id(canvas_id)?;
        self.painter = Some(painter);
        self.sync_viewport();
        Ok(())
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Parse a manifest and start fetching every texture it lists.
    /// A bad manifest is logged and ignored; the game runs on flat colors.
    pub fn load_manifest(&mut self, json: &str, base_url: &str) {
        let manifest = match AssetManifest::from_json(json) {
            Ok(manifest) => manifest,
            Err(err) => {
                log::error!("asset manifest rejected: {err}");
                return;
            }
        };
        for (key, url) in manifest.texture_urls(base_url) {
            self.ctx.assets.request(key);
            if let Err(err) = self.images.load(key, &url) {
                log::error!("could not start loading {key}: {err}");
                self.ctx.assets.settle(key, LoadOutcome::Failed);
            }
        }
        log::info!("queued {} texture(s)", self.ctx.assets.pending_count());
    }

    /// Run one display frame: settle assets, step simulation, draw, paint.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        self.ctx.now_ms = now_ms;

        self.sync_viewport();
        self.images.drain_into(&mut self.ctx.assets);

        let dt = self.clock.sample(now_ms);
        if self.ctx.assets.is_settled() {
            // Fixed timestep accumulation; input goes to the first step only.
            let steps = self.timestep.accumulate(dt);
            if steps > 0 {
                // Frames without a step keep the previous step's events.
                self.ctx.clear_frame_data();
            }
            for _ in 0..steps {
                self.game.update(&mut self.ctx, &self.input);
                self.input.drain();
            }
        } else {
            // Nothing is interactive behind the loading screen.
            self.input.retain(|e| {
                !matches!(
                    e,
                    InputEvent::PointerMove { .. } | InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. }
                )
            });
        }

        self.vectors.clear();
        {
            let mut render_ctx = RenderContext {
                vectors: &mut self.vectors,
                assets: &self.ctx.assets,
                now_ms,
                viewport: self.viewport,
            };
            self.game.render(&mut render_ctx);
        }

        if let Some(painter) = &self.painter {
            if let Err(err) = painter.paint(self.vectors.commands(), &self.images) {
                log::error!("paint failed: {err}");
            }
        }
    }

    /// Events from the most recent simulation step, flattened as
    /// `[kind, a, b, c]*`. Stays readable on frames that ran no step.
    pub fn events(&self) -> Vec<f32> {
        flatten_events(&self.ctx.events)
    }

    /// Record a new surface size: `render` sees it this frame, `update`
    /// gets it as a `Resize` input on its next step.
    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.input.push(InputEvent::Resize { width, height });
    }

    fn sync_viewport(&mut self) {
        let Some(painter) = &self.painter else {
            return;
        };
        match painter.fit_to_window() {
            Ok(Some((width, height))) => self.resize(width, height),
            Ok(None) => {}
            Err(err) => log::warn!("viewport sync failed: {err}"),
        }
    }
}
