pub mod api;
pub mod core;
pub mod systems;
pub mod input;
pub mod assets;
pub mod extensions;

pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{GameEvent, flatten_events};
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, FrameClock};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{AssetGate, LoadOutcome};
pub use systems::vector::{VectorState, VectorColor, VectorCommand, Glow, TextAlign, estimate_text_width};

// Extensions
pub use extensions::{Easing, progress};
