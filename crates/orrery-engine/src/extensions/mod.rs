// extensions/mod.rs
//
// Optional helpers outside the frame contract; games call them directly.

pub mod easing;

pub use easing::{Easing, progress};
