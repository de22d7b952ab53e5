use glam::Vec2;

use crate::bodies::{BodyRef, Catalog};

/// Extra pick radius for the focal planet in the detail view.
pub const FOCAL_TOLERANCE: f32 = 20.0;
/// Extra pick radius for everything else.
pub const SATELLITE_TOLERANCE: f32 = 5.0;

/// Bodies the pointer can land on, in priority order.
/// Overview: planets, then outer bodies. Detail: the planet, then its moons.
pub fn candidates(catalog: &Catalog, active: Option<usize>) -> Vec<(BodyRef, f32)> {
    match active {
        None => (0..catalog.planets.len())
            .map(|i| (BodyRef::Planet(i), SATELLITE_TOLERANCE))
            .chain((0..catalog.outer.len()).map(|i| (BodyRef::Outer(i), SATELLITE_TOLERANCE)))
            .collect(),
        Some(planet) => {
            let moons = catalog.planets.get(planet).map_or(0, |p| p.moons.len());
            std::iter::once((BodyRef::Planet(planet), FOCAL_TOLERANCE))
                .chain((0..moons).map(|moon| (BodyRef::Moon { planet, moon }, SATELLITE_TOLERANCE)))
                .collect()
        }
    }
}

/// First candidate whose last drawn circle, grown by its tolerance,
/// contains `pointer`. Bodies never drawn are skipped. Order breaks ties,
/// not distance.
pub fn hit_test(catalog: &Catalog, active: Option<usize>, pointer: Vec2) -> Option<BodyRef> {
    candidates(catalog, active).into_iter().find_map(|(body, tolerance)| {
        let screen = catalog.body(body)?.screen?;
        (pointer.distance(screen.center) < screen.radius + tolerance).then_some(body)
    })
}
