/// Solar System: a 2D orrery with an overview and a per-planet moon view.
///
/// Vectors only: every frame is a draw list replayed onto a Canvas2D.
/// Simulation (orbits, input, view state) runs in fixed ticks; drawing
/// records where each body landed so the next tick can hit-test it.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use orrery_engine::*;

use crate::bodies::{BodyRef, Catalog, CelestialBody, ScreenCircle};
use crate::hit;
use crate::hud;
use crate::locale::{Locale, TextKey};
use crate::orbit;
use crate::starfield::{self, Starfield};
use crate::view::{Direction, ViewState};

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 1280.0;
const WORLD_H: f32 = 720.0;

// ── Custom event kinds from the page ─────────────────────────────────

/// a = speed slider percent.
pub const CUSTOM_SET_SPEED: u32 = 1;
/// a = zoom slider percent.
pub const CUSTOM_SET_ZOOM: u32 = 2;
pub const CUSTOM_BACK: u32 = 3;
pub const CUSTOM_RESET: u32 = 4;

/// Text command: locale code.
pub const COMMAND_SET_LOCALE: u32 = 1;

const KEY_ESCAPE: u32 = 27;

// ── Game event kinds to the page ─────────────────────────────────────

/// a = view (0 overview, 1 zooming in, 2 detail, 3 zooming out), b = planet index or -1,
/// c = transition progress.
pub const EVENT_VIEW: f32 = 1.0;
/// a = speed percent, b = zoom percent, c = 1 while the loading overlay is up.
pub const EVENT_FACTORS: f32 = 2.0;
/// a = locale index.
pub const EVENT_LOCALE: f32 = 3.0;

// ── Controls ─────────────────────────────────────────────────────────

pub const INITIAL_SPEED_PERCENT: f32 = 100.0;
pub const INITIAL_ZOOM_PERCENT: f32 = 100.0;
/// Reset and language switches apply behind the loading overlay after this delay.
pub const DEFERRED_MS: f64 = 500.0;

// ── Drawing ──────────────────────────────────────────────────────────

const FOCAL_GLOW: f32 = 10.0;
const PLANET_ORBIT_ALPHA: f32 = 0.1;
const MOON_ORBIT_ALPHA: f32 = 0.2;
const GUIDE_FADE: f32 = 0.5;
const OUTER_FADE: f32 = 0.7;
const RING_COLOR: VectorColor = VectorColor::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 0.5);
const TEXTURE_RIM: VectorColor = VectorColor::new(1.0, 1.0, 1.0, 0.2);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Deferred {
    Reset,
    SetLocale(Locale),
}

pub struct Orrery {
    catalog: Catalog,
    view: ViewState,
    locale: Locale,
    /// Orbit speed multiplier (slider percent / 100).
    speed_factor: f32,
    /// Size and distance multiplier (slider percent / 100).
    zoom_factor: f32,
    /// Body under the pointer; freezes every orbit while set.
    hovered: Option<BodyRef>,
    pointer: Vec2,
    viewport: Vec2,
    starfield: Starfield,
    /// Actions waiting for their due time, in request order.
    pending: Vec<(f64, Deferred)>,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::solar_system(),
            view: ViewState::Overview,
            locale: Locale::default(),
            speed_factor: INITIAL_SPEED_PERCENT / 100.0,
            zoom_factor: INITIAL_ZOOM_PERCENT / 100.0,
            hovered: None,
            pointer: Vec2::ZERO,
            viewport: Vec2::new(WORLD_W, WORLD_H),
            starfield: Starfield::default(),
            pending: Vec::new(),
        }
    }

    fn center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        let now = ctx.now_ms;
        match event {
            InputEvent::Resize { width, height } => {
                self.viewport = Vec2::new(*width, *height);
                self.starfield.regenerate(&mut ctx.rng, *width, *height);
            }
            InputEvent::PointerMove { x, y } => self.interact(Vec2::new(*x, *y), false, now),
            InputEvent::PointerUp { x, y } => self.interact(Vec2::new(*x, *y), true, now),
            InputEvent::KeyDown { key_code: KEY_ESCAPE } => self.back(now),
            InputEvent::Custom { kind, a, .. } => match *kind {
                CUSTOM_SET_SPEED => self.speed_factor = a.max(0.0) / 100.0,
                CUSTOM_SET_ZOOM => self.zoom_factor = a.max(0.0) / 100.0,
                CUSTOM_BACK => self.back(now),
                CUSTOM_RESET => self.defer(now, Deferred::Reset),
                other => log::debug!("ignoring custom event {other}"),
            },
            InputEvent::Command { kind: COMMAND_SET_LOCALE, text } => self.request_locale(text, now),
            _ => {}
        }
    }

    /// Hover on move, navigate on click.
    fn interact(&mut self, pointer: Vec2, click: bool, now: f64) {
        if self.view.is_transitioning() {
            self.hovered = None;
            return;
        }
        let active = self.view.active_planet();
        if click && active.is_some() && hud::back_button(self.locale).contains(pointer) {
            self.back(now);
            return;
        }

        let hit = hit::hit_test(&self.catalog, active, pointer);
        if click && active.is_none() {
            if let Some(BodyRef::Planet(planet)) = hit {
                if self.catalog.planets[planet].can_zoom && self.view.begin_zoom_in(planet, now) {
                    log::debug!("zooming into {}", self.catalog.planets[planet].official_name);
                    self.hovered = None;
                }
            }
            if hit.is_some() {
                return;
            }
        }

        self.hovered = hit;
        self.pointer = pointer;
    }

    fn back(&mut self, now: f64) {
        if self.view.begin_zoom_out(now) {
            self.hovered = None;
        }
    }

    fn request_locale(&mut self, code: &str, now: f64) {
        let locale = match Locale::from_code(code) {
            Ok(locale) => locale,
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };
        if self.pending_locale().unwrap_or(self.locale) == locale {
            return;
        }
        self.defer(now, Deferred::SetLocale(locale));
    }

    fn pending_locale(&self) -> Option<Locale> {
        self.pending.iter().rev().find_map(|(_, action)| match action {
            Deferred::SetLocale(locale) => Some(*locale),
            Deferred::Reset => None,
        })
    }

    fn defer(&mut self, now: f64, action: Deferred) {
        if action == Deferred::Reset && self.pending.iter().any(|(_, a)| *a == Deferred::Reset) {
            return;
        }
        self.pending.push((now + DEFERRED_MS, action));
    }

    fn apply_due(&mut self, ctx: &mut EngineContext) {
        let now = ctx.now_ms;
        let (due, waiting): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = waiting;
        for (_, action) in due {
            match action {
                Deferred::Reset => self.reset(&mut ctx.rng),
                Deferred::SetLocale(locale) => {
                    log::info!("language set to {}", locale.code());
                    self.locale = locale;
                }
            }
        }
    }

    /// Initial speed and zoom, straight back to the overview, fresh stars.
    fn reset(&mut self, rng: &mut Rng) {
        self.speed_factor = INITIAL_SPEED_PERCENT / 100.0;
        self.zoom_factor = INITIAL_ZOOM_PERCENT / 100.0;
        self.view.force_overview();
        self.hovered = None;
        // Detail-view circles would otherwise stay hittable until the next draw.
        self.catalog.forget_screens();
        self.starfield.regenerate(rng, self.viewport.x, self.viewport.y);
    }

    // ── Simulation ─────────────────────────────────────────────────

    /// Advance every orbit in the scenes visible at `now`.
    fn step_orbits(&mut self, now: f64) {
        let multiplier = orbit::speed_multiplier(self.speed_factor, self.hovered.is_some());
        let blend = self.view.blend(now);
        if blend.shows_overview() {
            for body in self.catalog.planets.iter_mut().chain(self.catalog.outer.iter_mut()) {
                body.angle = orbit::advance(body.angle, body.speed, multiplier);
            }
        }
        if let Some(planet) = blend.shows_detail() {
            let moon_multiplier = multiplier * orbit::DETAIL_SPEED_SCALE;
            for moon in &mut self.catalog.planets[planet].moons {
                moon.angle = orbit::advance(moon.angle, moon.speed, moon_multiplier);
            }
        }
    }

    fn emit_events(&self, ctx: &mut EngineContext) {
        let now = ctx.now_ms;
        let (code, planet, progress) = match self.view {
            ViewState::Overview => (0.0, -1.0, 0.0),
            ViewState::Detail(p) => (2.0, p as f32, 1.0),
            ViewState::Transitioning(t) => {
                let code = match t.direction {
                    Direction::In => 1.0,
                    Direction::Out => 3.0,
                };
                (code, t.target as f32, t.progress(now))
            }
        };
        ctx.emit_event(GameEvent { kind: EVENT_VIEW, a: code, b: planet, c: progress });
        ctx.emit_event(GameEvent {
            kind: EVENT_FACTORS,
            a: self.speed_factor * 100.0,
            b: self.zoom_factor * 100.0,
            c: if self.pending.is_empty() { 0.0 } else { 1.0 },
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_LOCALE,
            a: self.locale.index() as f32,
            ..GameEvent::default()
        });
    }

    // ── Drawing ────────────────────────────────────────────────────

    fn title(&self) -> String {
        let detail_title = |planet: usize| {
            format!("{} {}", self.catalog.planets[planet].name, self.locale.text(TextKey::ViewPlanetDetail))
        };
        match self.view {
            ViewState::Detail(planet) => detail_title(planet),
            ViewState::Transitioning(t) if t.direction == Direction::Out => detail_title(t.target),
            _ => self.locale.text(TextKey::ViewSolarSystem).to_string(),
        }
    }

    fn draw_overview(&mut self, vectors: &mut VectorState, assets: &AssetGate, alpha: f32) {
        let center = self.center();
        let zoom = self.zoom_factor;

        let sun = &self.catalog.sun;
        draw_body(vectors, assets, sun, center, sun.radius * zoom, sun.glow, alpha);

        let guide = VectorColor::WHITE.with_alpha(PLANET_ORBIT_ALPHA).fade(alpha * GUIDE_FADE);
        for planet in &mut self.catalog.planets {
            vectors.stroke_circle(center, planet.distance * zoom, 1.0, guide);

            let pos = orbit::orbit_position(center, planet.angle, planet.distance, zoom);
            let radius = planet.radius * zoom;
            planet.screen = Some(ScreenCircle::new(pos, radius));
            draw_body(vectors, assets, planet, pos, radius, planet.glow, alpha);

            if planet.ringed {
                vectors.stroke_ellipse(
                    pos,
                    Vec2::new(radius * 2.0, radius * 0.5),
                    planet.angle + FRAC_PI_2,
                    2.0 * zoom,
                    RING_COLOR.fade(alpha * GUIDE_FADE),
                );
            }
        }

        for body in &mut self.catalog.outer {
            let pos = orbit::orbit_position(center, body.angle, body.distance, zoom);
            let radius = orbit::outer_radius(body.radius, zoom);
            body.screen = Some(ScreenCircle::new(pos, radius));
            let color = VectorColor::from_rgb_u32(body.color).fade(alpha * OUTER_FADE);
            vectors.fill_circle(pos, radius, color, None);
        }
    }

    fn draw_detail(&mut self, vectors: &mut VectorState, assets: &AssetGate, planet: usize, alpha: f32) {
        let center = self.center();
        let zoom = orbit::detail_zoom(self.zoom_factor);
        let locale = self.locale;
        let Some(focal) = self.catalog.planets.get_mut(planet) else {
            return;
        };

        let main_radius = focal.radius * zoom;
        draw_body(vectors, assets, focal, center, main_radius, Some(FOCAL_GLOW), alpha);
        focal.screen = Some(ScreenCircle::new(center, main_radius));

        if focal.moons.is_empty() {
            hud::draw_no_moons(vectors, center, main_radius, focal.name, locale, alpha);
            return;
        }

        let guide = VectorColor::WHITE.with_alpha(MOON_ORBIT_ALPHA).fade(alpha * GUIDE_FADE);
        for moon in &mut focal.moons {
            vectors.stroke_circle(center, moon.distance * zoom, 1.0, guide);
            let pos = orbit::orbit_position(center, moon.angle, moon.distance, zoom);
            let radius = moon.radius * zoom;
            moon.screen = Some(ScreenCircle::new(pos, radius));
            draw_body(vectors, assets, moon, pos, radius, moon.glow, alpha);
        }
    }

    fn draw_overlays(&self, vectors: &mut VectorState) {
        hud::draw_title(vectors, &self.title(), self.viewport);
        hud::draw_status(vectors, self.locale, self.speed_factor, self.zoom_factor, self.viewport);

        if let Some(planet) = self.view.active_planet() {
            hud::draw_back_button(vectors, self.locale);
            let lines = hud::panel_lines(&self.catalog.planets[planet], self.locale);
            hud::draw_panel(vectors, &lines, self.viewport);
        }

        if !self.view.is_transitioning() {
            if let Some(body) = self.hovered.and_then(|b| self.catalog.body(b)) {
                let detail_mode = self.view.active_planet().is_some();
                let lines = hud::tooltip_lines(body, self.locale, detail_mode);
                hud::draw_tooltip(vectors, &lines, self.pointer, self.viewport);
            }
        }

        if !self.pending.is_empty() {
            hud::draw_loading(vectors, self.locale, self.viewport);
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

/// Textured disk when the texture loaded, flat color otherwise.
fn draw_body(
    vectors: &mut VectorState,
    assets: &AssetGate,
    body: &CelestialBody,
    center: Vec2,
    radius: f32,
    glow: Option<f32>,
    alpha: f32,
) {
    let color = VectorColor::from_rgb_u32(body.color);
    let glow = glow.map(|blur| Glow { blur, color: color.fade(alpha) });
    if assets.has_texture(body.official_name) {
        vectors.texture_circle(body.official_name, center, radius, alpha, TEXTURE_RIM, glow);
    } else {
        vectors.fill_circle(center, radius, color.fade(alpha), glow);
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let config = self.config();
        self.viewport = Vec2::new(config.world_width, config.world_height);
        self.starfield = Starfield::generate(&mut ctx.rng, self.viewport.x, self.viewport.y);
        log::info!(
            "{} planets, {} outer bodies, locale {}",
            self.catalog.planets.len(),
            self.catalog.outer.len(),
            self.locale.code()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.apply_due(ctx);

        for event in input.iter() {
            self.handle_input(ctx, event);
        }

        let now = ctx.now_ms;
        self.step_orbits(now);
        if self.view.advance(now) {
            log::debug!("view settled: {:?}", self.view);
        }

        self.emit_events(ctx);
    }

    fn render(&mut self, ctx: &mut RenderContext) {
        let vectors = &mut *ctx.vectors;
        vectors.clear_screen(VectorColor::from_rgb_u32(starfield::BACKGROUND));
        self.starfield.draw(vectors, ctx.now_ms);

        self.catalog.forget_screens();
        if !ctx.assets.is_settled() {
            hud::draw_loading(vectors, self.locale, ctx.viewport);
            return;
        }

        let blend = self.view.blend(ctx.now_ms);
        let detail = blend.shows_detail();
        if blend.overview_on_top {
            if let Some(planet) = detail {
                self.draw_detail(vectors, ctx.assets, planet, blend.detail);
            }
            if blend.shows_overview() {
                self.draw_overview(vectors, ctx.assets, blend.overview);
            }
        } else {
            if blend.shows_overview() {
                self.draw_overview(vectors, ctx.assets, blend.overview);
            }
            if let Some(planet) = detail {
                self.draw_detail(vectors, ctx.assets, planet, blend.detail);
            }
        }

        self.draw_overlays(vectors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, JUPITER, MERCURY, PLUTO};
    use crate::orbit::angle_delta;
    use crate::view::TRANSITION_MS;

    struct Harness {
        game: Orrery,
        ctx: EngineContext,
        assets: AssetGate,
        vectors: VectorState,
    }

    impl Harness {
        fn new() -> Self {
            let mut game = Orrery::new();
            let mut ctx = EngineContext::new();
            game.init(&mut ctx);
            let mut h = Self { game, ctx, assets: AssetGate::new(), vectors: VectorState::new() };
            h.draw();
            h
        }

        fn tick(&mut self, events: Vec<InputEvent>) {
            let mut input = InputQueue::new();
            for e in events {
                input.push(e);
            }
            self.ctx.clear_frame_data();
            self.game.update(&mut self.ctx, &input);
        }

        fn idle(&mut self, ticks: usize) {
            for _ in 0..ticks {
                self.tick(Vec::new());
            }
        }

        fn at(&mut self, now_ms: f64) {
            self.ctx.now_ms = now_ms;
        }

        fn draw(&mut self) {
            self.vectors.clear();
            let mut rctx = RenderContext {
                vectors: &mut self.vectors,
                assets: &self.assets,
                now_ms: self.ctx.now_ms,
                viewport: self.game.viewport,
            };
            self.game.render(&mut rctx);
        }

        fn screen_of(&self, body: BodyRef) -> Vec2 {
            self.game.catalog.body(body).and_then(|b| b.screen).expect("body drawn").center
        }

        fn click(&mut self, pos: Vec2) {
            self.tick(vec![InputEvent::PointerUp { x: pos.x, y: pos.y }]);
        }

        fn hover(&mut self, pos: Vec2) {
            self.tick(vec![InputEvent::PointerMove { x: pos.x, y: pos.y }]);
        }

        fn custom(&mut self, kind: u32, a: f32) {
            self.tick(vec![InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }]);
        }

        fn texts(&self) -> Vec<String> {
            self.vectors
                .commands()
                .iter()
                .filter_map(|c| match c {
                    VectorCommand::Text { text, .. } => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }

        fn event(&self, kind: f32) -> GameEvent {
            *self.ctx.events.iter().rev().find(|e| e.kind == kind).expect("event emitted")
        }

        fn zoom_into(&mut self, planet: usize) {
            let pos = self.screen_of(BodyRef::Planet(planet));
            self.click(pos);
            assert!(self.game.view.is_transitioning());
            let now = self.ctx.now_ms + TRANSITION_MS;
            self.at(now);
            self.idle(1);
            assert_eq!(self.game.view, ViewState::Detail(planet));
            self.draw();
        }
    }

    #[test]
    fn angles_advance_by_speed_times_factor() {
        let mut h = Harness::new();
        h.custom(CUSTOM_SET_SPEED, 250.0);
        let before: Vec<f32> = h.game.catalog.planets.iter().map(|p| p.angle).collect();
        let outer_before: Vec<f32> = h.game.catalog.outer.iter().map(|b| b.angle).collect();

        let n = 120;
        h.idle(n);

        for (planet, start) in h.game.catalog.planets.iter().zip(&before) {
            let expected = start + n as f32 * planet.speed * 2.5;
            assert!(angle_delta(planet.angle, expected).abs() < 1e-3, "{}", planet.official_name);
        }
        for (body, start) in h.game.catalog.outer.iter().zip(&outer_before) {
            let expected = start + n as f32 * body.speed * 2.5;
            assert!(angle_delta(body.angle, expected).abs() < 1e-4);
        }
    }

    #[test]
    fn hovering_pauses_every_orbit_until_pointer_leaves() {
        let mut h = Harness::new();
        let earth = h.screen_of(BodyRef::Planet(EARTH));
        h.hover(earth);
        assert_eq!(h.game.hovered, Some(BodyRef::Planet(EARTH)));

        let frozen: Vec<f32> = h.game.catalog.planets.iter().map(|p| p.angle).collect();
        h.idle(30);
        let now: Vec<f32> = h.game.catalog.planets.iter().map(|p| p.angle).collect();
        assert_eq!(frozen, now);

        h.hover(Vec2::new(1.0, 1.0));
        assert_eq!(h.game.hovered, None);
        h.idle(1);
        assert!(h.game.catalog.planets[MERCURY].angle != frozen[MERCURY]);
    }

    #[test]
    fn full_transition_keeps_factors_and_clears_active_planet() {
        let mut h = Harness::new();
        h.custom(CUSTOM_SET_SPEED, 150.0);
        h.custom(CUSTOM_SET_ZOOM, 80.0);
        h.draw();

        h.zoom_into(JUPITER);
        assert_eq!(h.game.view.active_planet(), Some(JUPITER));

        h.custom(CUSTOM_BACK, 0.0);
        assert!(h.game.view.is_transitioning());
        assert_eq!(h.game.view.active_planet(), None);
        let now = h.ctx.now_ms + TRANSITION_MS;
        h.at(now);
        h.idle(1);

        assert_eq!(h.game.view, ViewState::Overview);
        assert_eq!(h.game.view.active_planet(), None);
        assert!((h.game.speed_factor - 1.5).abs() < 1e-6);
        assert!((h.game.zoom_factor - 0.8).abs() < 1e-6);
    }

    #[test]
    fn clicking_outer_body_never_transitions() {
        let mut h = Harness::new();
        let pluto = h.screen_of(BodyRef::Outer(PLUTO));
        h.click(pluto);
        assert_eq!(h.game.view, ViewState::Overview);
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let mut h = Harness::new();
        h.click(Vec2::new(2.0, 2.0));
        assert_eq!(h.game.view, ViewState::Overview);
    }

    #[test]
    fn pointer_is_ignored_mid_transition() {
        let mut h = Harness::new();
        let earth = h.screen_of(BodyRef::Planet(EARTH));
        h.click(earth);
        h.hover(earth);
        assert_eq!(h.game.hovered, None);
    }

    #[test]
    fn no_moons_prompt_in_detail_view() {
        let mut h = Harness::new();
        h.zoom_into(MERCURY);
        let texts = h.texts();
        assert!(texts.contains(&"[ Information System Prompt ]".to_string()));
        assert!(texts.contains(&"(水星 (Mercury)) This planet has no known moons.".to_string()));
    }

    #[test]
    fn detail_view_draws_moons_and_panel() {
        let mut h = Harness::new();
        h.zoom_into(JUPITER);
        let texts = h.texts();
        assert!(texts.contains(&"木星 (Jupiter) Satellite System View".to_string()));
        assert!(texts.contains(&"Known Moons Count: 2".to_string()));
        assert!(!texts.iter().any(|t| t.contains("no known moons")));

        let io = h.screen_of(BodyRef::Moon { planet: JUPITER, moon: 0 });
        assert!(io.distance(h.game.center()) > 0.0);
    }

    #[test]
    fn detail_moons_move_at_reduced_speed() {
        let mut h = Harness::new();
        h.zoom_into(EARTH);
        let start = h.game.catalog.planets[EARTH].moons[0].angle;
        let planet_start = h.game.catalog.planets[EARTH].angle;
        h.idle(10);
        let moon = &h.game.catalog.planets[EARTH].moons[0];
        let expected = start + 10.0 * moon.speed * orbit::DETAIL_SPEED_SCALE;
        assert!(angle_delta(moon.angle, expected).abs() < 1e-4);
        assert_eq!(h.game.catalog.planets[EARTH].angle, planet_start, "overview is hidden");
    }

    #[test]
    fn escape_and_back_button_leave_detail() {
        let mut h = Harness::new();
        h.zoom_into(EARTH);
        h.tick(vec![InputEvent::KeyDown { key_code: KEY_ESCAPE }]);
        assert!(h.game.view.is_transitioning());

        let mut h = Harness::new();
        h.zoom_into(EARTH);
        let button = hud::back_button(h.game.locale);
        h.click(button.pos + button.size / 2.0);
        assert!(h.game.view.is_transitioning());
    }

    #[test]
    fn back_in_overview_is_ignored() {
        let mut h = Harness::new();
        h.custom(CUSTOM_BACK, 0.0);
        assert_eq!(h.game.view, ViewState::Overview);
    }

    #[test]
    fn reset_applies_after_delay() {
        let mut h = Harness::new();
        h.custom(CUSTOM_SET_SPEED, 300.0);
        h.custom(CUSTOM_SET_ZOOM, 50.0);
        h.draw();
        h.zoom_into(EARTH);
        let stars_before = h.game.starfield.stars()[0];

        let asked = h.ctx.now_ms;
        h.custom(CUSTOM_RESET, 0.0);
        assert_eq!(h.event(EVENT_FACTORS).c, 1.0);
        h.draw();
        assert!(h.texts().contains(&"Loading Assets...".to_string()));
        assert_eq!(h.game.view, ViewState::Detail(EARTH));

        h.at(asked + DEFERRED_MS);
        h.idle(1);
        assert_eq!(h.game.view, ViewState::Overview);
        assert_eq!(h.game.speed_factor, 1.0);
        assert_eq!(h.game.zoom_factor, 1.0);
        assert_ne!(h.game.starfield.stars()[0], stars_before);
        let factors = h.event(EVENT_FACTORS);
        assert_eq!((factors.a, factors.b, factors.c), (100.0, 100.0, 0.0));
    }

    #[test]
    fn reset_from_detail_leaves_no_stale_hit_targets() {
        let mut h = Harness::new();
        h.zoom_into(JUPITER);
        let focal = h.game.catalog.planets[JUPITER].screen.expect("focal drawn");
        assert_eq!(focal.center, h.game.center());

        h.custom(CUSTOM_RESET, 0.0);
        let due = h.ctx.now_ms + DEFERRED_MS;
        h.at(due);
        // Reset and a move in the same tick, before any overview draw.
        let near_sun = h.game.center() + Vec2::new(-30.0, -70.0);
        h.hover(near_sun);
        assert_eq!(h.game.view, ViewState::Overview);
        assert_eq!(h.game.hovered, None);
        assert!(h.game.catalog.planets[JUPITER].screen.is_none());
    }

    #[test]
    fn hovering_a_moon_freezes_detail_orbits() {
        let mut h = Harness::new();
        h.zoom_into(EARTH);
        let luna = BodyRef::Moon { planet: EARTH, moon: 0 };
        let pos = h.screen_of(luna);
        h.hover(pos);
        assert_eq!(h.game.hovered, Some(luna));

        let frozen = h.game.catalog.planets[EARTH].moons[0].angle;
        h.idle(20);
        assert_eq!(h.game.catalog.planets[EARTH].moons[0].angle, frozen);

        h.draw();
        assert!(h.texts().iter().any(|t| t.contains("Moon") || t.contains("月球")));
    }

    #[test]
    fn loading_overlay_fills_render_viewport() {
        let mut h = Harness::new();
        h.assets.request("Earth");
        h.vectors.clear();
        let mut rctx = RenderContext {
            vectors: &mut h.vectors,
            assets: &h.assets,
            now_ms: 0.0,
            viewport: Vec2::new(1920.0, 1080.0),
        };
        h.game.render(&mut rctx);
        let covers = h.vectors.commands().iter().any(|c| {
            matches!(c, VectorCommand::FillRect { size, .. } if *size == Vec2::new(1920.0, 1080.0))
        });
        assert!(covers);
    }

    #[test]
    fn reset_cancels_transition_in_flight() {
        let mut h = Harness::new();
        let earth = h.screen_of(BodyRef::Planet(EARTH));
        h.click(earth);
        h.custom(CUSTOM_RESET, 0.0);
        h.at(DEFERRED_MS);
        h.idle(1);
        assert_eq!(h.game.view, ViewState::Overview);
    }

    #[test]
    fn locale_switch_is_deferred() {
        let mut h = Harness::new();
        h.tick(vec![InputEvent::Command { kind: COMMAND_SET_LOCALE, text: "zh-TW".into() }]);
        assert_eq!(h.game.locale, Locale::En);
        h.at(DEFERRED_MS);
        h.idle(1);
        assert_eq!(h.game.locale, Locale::ZhTw);
        assert_eq!(h.event(EVENT_LOCALE).a, Locale::ZhTw.index() as f32);
        h.draw();
        assert!(h.texts().contains(&"太陽系總覽模式".to_string()));
    }

    #[test]
    fn unsupported_or_same_locale_is_a_no_op() {
        let mut h = Harness::new();
        h.tick(vec![InputEvent::Command { kind: COMMAND_SET_LOCALE, text: "fr".into() }]);
        assert!(h.game.pending.is_empty());
        h.tick(vec![InputEvent::Command { kind: COMMAND_SET_LOCALE, text: "en".into() }]);
        assert!(h.game.pending.is_empty());
        assert_eq!(h.game.locale, Locale::En);
    }

    #[test]
    fn resize_regenerates_stars_but_keeps_view() {
        let mut h = Harness::new();
        h.custom(CUSTOM_SET_ZOOM, 120.0);
        h.draw();
        h.zoom_into(EARTH);
        h.tick(vec![InputEvent::Resize { width: 400.0, height: 300.0 }]);
        assert_eq!(h.game.viewport, Vec2::new(400.0, 300.0));
        assert!(h.game.starfield.stars().iter().all(|s| s.pos.x < 400.0 && s.pos.y < 300.0));
        assert_eq!(h.game.view, ViewState::Detail(EARTH));
        assert!((h.game.zoom_factor - 1.2).abs() < 1e-6);
    }

    #[test]
    fn zoom_factor_scales_positions() {
        let mut h = Harness::new();
        let center = h.game.center();
        let at_one = h.screen_of(BodyRef::Planet(EARTH)).distance(center);
        h.custom(CUSTOM_SET_ZOOM, 200.0);
        h.draw();
        let at_two = h.screen_of(BodyRef::Planet(EARTH)).distance(center);
        assert!((at_one - 130.0).abs() < 1e-3);
        assert!((at_two - 260.0).abs() < 1e-3);
    }

    #[test]
    fn tooltip_follows_hover() {
        let mut h = Harness::new();
        let earth = h.screen_of(BodyRef::Planet(EARTH));
        h.hover(earth);
        h.draw();
        let texts = h.texts();
        assert!(texts.contains(&"地球 (Earth)".to_string()));
        assert!(texts.contains(&"** Click to enter detail view **".to_string()));
    }

    #[test]
    fn loading_screen_until_assets_settle() {
        let mut h = Harness::new();
        h.assets.request("Earth");
        h.draw();
        assert!(h.texts().contains(&"Loading Assets...".to_string()));
        assert!(!h.texts().contains(&"Solar System Overview".to_string()));

        h.assets.settle("Earth", LoadOutcome::Loaded);
        h.draw();
        let textured = h.vectors.commands().iter().any(|c| {
            matches!(c, VectorCommand::Texture { key, .. } if key == "Earth")
        });
        assert!(textured);
    }

    #[test]
    fn failed_texture_falls_back_to_flat_color() {
        let mut h = Harness::new();
        h.assets.request("Earth");
        h.assets.settle("Earth", LoadOutcome::Failed);
        h.draw();
        let earth_color = VectorColor::from_rgb_u32(0x4169E1);
        let flat = h.vectors.commands().iter().any(|c| {
            matches!(c, VectorCommand::FillCircle { color, .. } if *color == earth_color)
        });
        assert!(flat);
        assert!(!h.vectors.commands().iter().any(|c| matches!(c, VectorCommand::Texture { .. })));
    }

    #[test]
    fn view_event_tracks_state() {
        let mut h = Harness::new();
        h.idle(1);
        assert_eq!(h.event(EVENT_VIEW).a, 0.0);
        h.zoom_into(JUPITER);
        let e = h.event(EVENT_VIEW);
        assert_eq!((e.a, e.b, e.c), (2.0, JUPITER as f32, 1.0));
    }
}
