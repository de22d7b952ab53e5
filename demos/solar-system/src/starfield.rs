/// Twinkling background stars, fixed in screen space.
///
/// The whole field is rebuilt when the viewport changes size; stars carry
/// no identity across rebuilds.

use glam::Vec2;
use orrery_engine::{Rng, VectorColor, VectorState};

pub const STAR_COUNT: usize = 300;
pub const BACKGROUND: u32 = 0x080b10;

const MAX_SIZE: f32 = 1.5;
/// Stars at or below this size are not drawn.
const MIN_VISIBLE_SIZE: f32 = 0.1;
const MIN_TWINKLE: f32 = 0.001;
const TWINKLE_SPREAD: f32 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
    /// Twinkle frequency in radians per millisecond.
    pub twinkle: f32,
}

impl Star {
    fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.next_f32() * width, rng.next_f32() * height),
            size: rng.next_f32() * MAX_SIZE,
            opacity: rng.next_f32(),
            twinkle: rng.range_f32(MIN_TWINKLE, MIN_TWINKLE + TWINKLE_SPREAD),
        }
    }

    /// Opacity at wall-clock time `t_ms`.
    pub fn brightness(&self, t_ms: f64) -> f32 {
        let phase = (t_ms * self.twinkle as f64).sin() as f32;
        self.opacity * (0.5 + 0.5 * phase)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
    bounds: Vec2,
}

impl Starfield {
    pub fn generate(rng: &mut Rng, width: f32, height: f32) -> Self {
        let mut field = Self::default();
        field.regenerate(rng, width, height);
        field
    }

    /// Replace every star with a fresh one inside the new bounds.
    pub fn regenerate(&mut self, rng: &mut Rng, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.stars.clear();
        self.stars.extend((0..STAR_COUNT).map(|_| Star::random(rng, width, height)));
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn draw(&self, vectors: &mut VectorState, now_ms: f64) {
        for star in &self.stars {
            let p = star.pos;
            let inside = p.x > 0.0 && p.x < self.bounds.x && p.y > 0.0 && p.y < self.bounds.y;
            if !inside || star.size <= MIN_VISIBLE_SIZE {
                continue;
            }
            let color = VectorColor::WHITE.with_alpha(star.brightness(now_ms));
            vectors.fill_circle(p, star.size, color, None);
        }
    }
}
