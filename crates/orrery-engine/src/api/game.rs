use glam::Vec2;

use crate::api::types::GameEvent;
use crate::assets::registry::AssetGate;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::systems::vector::VectorState;

/// Startup settings a game hands to the runner.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Simulation step in seconds.
    pub fixed_dt: f32,
    /// Initial world width in canvas pixels, used until the first resize.
    pub world_width: f32,
    /// Initial world height in canvas pixels, used until the first resize.
    pub world_height: f32,
    /// Seed for the context RNG. Hosts usually replace it with a random one.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            seed: 42,
        }
    }
}

/// Hooks the runner calls on a game.
pub trait Game {
    /// Read once, before `init`.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext);

    /// Fixed-step simulation tick. Consume input, advance animation state.
    /// Not called until every queued asset has settled.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Draw one display frame. Called every frame, including while assets load.
    fn render(&mut self, ctx: &mut RenderContext);
}

/// State shared with `init` and `update`.
pub struct EngineContext {
    /// Wall-clock time of the current frame, in milliseconds.
    pub now_ms: f64,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    pub assets: AssetGate,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(GameConfig::default().seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            now_ms: 0.0,
            rng: Rng::new(seed),
            events: Vec::new(),
            assets: AssetGate::new(),
        }
    }

    /// Queue an event for the host page; read back after the tick.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drop last tick's events.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// What `render` may touch: the draw list and a read-only asset view.
pub struct RenderContext<'a> {
    pub vectors: &'a mut VectorState,
    pub assets: &'a AssetGate,
    pub now_ms: f64,
    /// Current drawing surface size. Tracks the canvas even while `update`
    /// is held back, so loading screens can fill the window.
    pub viewport: Vec2,
}
