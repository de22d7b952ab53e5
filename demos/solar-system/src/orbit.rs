/// Circular orbit math. Pure functions, no engine dependencies.
///
/// Angles advance by a fixed amount per simulation tick; screen positions
/// are recomputed from the angle every frame.

use std::f32::consts::TAU;

use glam::Vec2;

/// Moons in the detail view move slower; their orbits are drawn much larger.
pub const DETAIL_SPEED_SCALE: f32 = 0.3;
/// Detail view magnification relative to the global zoom factor.
pub const DETAIL_ZOOM_SCALE: f32 = 5.0;
/// Outer bodies are drawn this much larger than their catalog radius.
pub const OUTER_RADIUS_BOOST: f32 = 1.5;

/// Screen position of a body on a circular orbit around `center`.
pub fn orbit_position(center: Vec2, angle: f32, distance: f32, zoom: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * (distance * zoom)
}

/// Angle after one tick, wrapped into [0, 2π).
pub fn advance(angle: f32, base_speed: f32, multiplier: f32) -> f32 {
    (angle + base_speed * multiplier).rem_euclid(TAU)
}

/// Effective speed multiplier; hovering any body freezes every orbit.
pub fn speed_multiplier(speed_factor: f32, paused_by_hover: bool) -> f32 {
    if paused_by_hover {
        0.0
    } else {
        speed_factor
    }
}

/// Outer bodies never shrink below their zoom-1.0 size.
pub fn outer_radius(radius: f32, zoom: f32) -> f32 {
    radius * zoom.max(1.0) * OUTER_RADIUS_BOOST
}

/// Zoom used by the planet detail view.
pub fn detail_zoom(zoom: f32) -> f32 {
    zoom * DETAIL_ZOOM_SCALE
}

/// Signed shortest difference `a - b` between two angles.
pub fn angle_delta(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    if d > TAU / 2.0 {
        d - TAU
    } else {
        d
    }
}
