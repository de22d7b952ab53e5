use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod game;
pub mod hit;
pub mod hud;
pub mod locale;
pub mod orbit;
pub mod starfield;
pub mod view;
use game::Orrery;

orrery_web::export_game!(Orrery, "solar-system");
