/// Static body catalog: the Sun, seven planets with their moons, and three
/// outer minor bodies.
///
/// Sizes and distances are screen pixels at zoom 1.0, exaggerated for
/// readability. Speeds are radians per simulation tick at speed factor 1.0.

use glam::Vec2;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const NEPTUNE: usize = 6;
pub const PLANET_COUNT: usize = 7;

/// Outer body index constants.
pub const PLUTO: usize = 0;
pub const ERIS: usize = 1;
pub const SEDNA: usize = 2;
pub const OUTER_COUNT: usize = 3;
/// Outer bodies all drift at this base speed.
pub const OUTER_SPEED: f32 = 0.0005;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 25.0;
pub const SUN_COLOR: u32 = 0xFFD700;
pub const SUN_GLOW: f32 = 50.0;

/// Where a body was last drawn. Only used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCircle {
    pub center: Vec2,
    pub radius: f32,
}

impl ScreenCircle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Descriptive text shown in tooltips and the detail panel.
/// Missing values render as a localized placeholder.
#[derive(Debug, Clone, Default)]
pub struct BodyInfo {
    pub kind: Option<&'static str>,
    pub mass: Option<&'static str>,
    pub temp: Option<&'static str>,
    pub fact: Option<&'static str>,
    pub diameter: Option<&'static str>,
    pub gravity: Option<&'static str>,
    pub day_length: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Display name.
    pub name: &'static str,
    /// English name, also the texture key.
    pub official_name: &'static str,
    pub radius: f32,
    /// Packed `0xRRGGBB` fallback color.
    pub color: u32,
    pub glow: Option<f32>,
    /// Orbit radius around the parent at zoom 1.0.
    pub distance: f32,
    /// Base angular speed per tick.
    pub speed: f32,
    /// Current orbital angle in radians.
    pub angle: f32,
    pub can_zoom: bool,
    /// Drawn with a ring ellipse.
    pub ringed: bool,
    pub info: BodyInfo,
    pub moons: Vec<CelestialBody>,
    /// Recomputed every drawn frame.
    pub screen: Option<ScreenCircle>,
}

impl CelestialBody {
    fn new(name: &'static str, official_name: &'static str, radius: f32, color: u32) -> Self {
        Self {
            name,
            official_name,
            radius,
            color,
            glow: None,
            distance: 0.0,
            speed: 0.0,
            angle: 0.0,
            can_zoom: false,
            ringed: false,
            info: BodyInfo::default(),
            moons: Vec::new(),
            screen: None,
        }
    }

    fn orbit(mut self, distance: f32, speed: f32, angle: f32) -> Self {
        self.distance = distance;
        self.speed = speed;
        self.angle = angle;
        self
    }

    fn info(mut self, info: BodyInfo) -> Self {
        self.info = info;
        self
    }

    fn zoomable(mut self) -> Self {
        self.can_zoom = true;
        self
    }

    fn with_moons(mut self, moons: Vec<CelestialBody>) -> Self {
        self.moons = moons;
        self
    }
}

/// Identifies one hoverable body in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRef {
    Planet(usize),
    Moon { planet: usize, moon: usize },
    Outer(usize),
}

/// Every body in the scene. Defined once at startup; only angles and
/// screen circles change afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sun: CelestialBody,
    pub planets: Vec<CelestialBody>,
    pub outer: Vec<CelestialBody>,
}

impl Catalog {
    pub fn solar_system() -> Self {
        let mut sun = CelestialBody::new("Sun", "Sol", SUN_RADIUS, SUN_COLOR);
        sun.glow = Some(SUN_GLOW);

        let mut saturn = CelestialBody::new("土星 (Saturn)", "Saturn", 15.0, 0xF4A460)
            .orbit(300.0, 0.0015, 5.1)
            .info(BodyInfo {
                kind: Some("气体巨星"),
                mass: Some("5.6 x 10²⁶ kg"),
                temp: Some("-178°C"),
                fact: Some("拥有复杂的行星环系统"),
                diameter: Some("120,536 km"),
                gravity: Some("10.44 m/s²"),
                day_length: Some("10.7 小时"),
            })
            .zoomable()
            .with_moons(vec![moon("土卫六 (Titan)", "Titan", 6.0, 45.0, 0.07, 0xFFA07A, 3.0)]);
        saturn.ringed = true;

        let planets = vec![
            CelestialBody::new("水星 (Mercury)", "Mercury", 4.0, 0xA9A9A9)
                .orbit(60.0, 0.04, 0.1)
                .info(BodyInfo {
                    kind: Some("岩石行星"),
                    mass: Some("3.3 x 10²³ kg"),
                    temp: Some("430°C"),
                    fact: None,
                    diameter: Some("4,880 km"),
                    gravity: Some("3.7 m/s²"),
                    day_length: Some("58.6 地球日"),
                })
                .zoomable(),
            CelestialBody::new("金星 (Venus)", "Venus", 8.0, 0xDEB887)
                .orbit(90.0, 0.015, 1.1)
                .info(BodyInfo {
                    kind: Some("岩石行星"),
                    mass: Some("4.8 x 10²⁴ kg"),
                    temp: Some("462°C"),
                    fact: None,
                    diameter: Some("12,104 km"),
                    gravity: Some("8.87 m/s²"),
                    day_length: Some("243 地球日"),
                })
                .zoomable(),
            CelestialBody::new("地球 (Earth)", "Earth", 9.0, 0x4169E1)
                .orbit(130.0, 0.01, 2.1)
                .info(BodyInfo {
                    kind: Some("岩石行星"),
                    mass: Some("5.9 x 10²⁴ kg"),
                    temp: Some("15°C"),
                    fact: Some("拥有生命和液态水"),
                    diameter: Some("12,742 km"),
                    gravity: Some("9.8 m/s²"),
                    day_length: Some("24 小时"),
                })
                .zoomable()
                .with_moons(vec![moon("月球", "Moon", 3.0, 25.0, 0.1, 0xC0C0C0, 0.0)]),
            CelestialBody::new("火星 (Mars)", "Mars", 6.0, 0xCD5C5C)
                .orbit(170.0, 0.008, 3.1)
                .info(BodyInfo {
                    kind: Some("岩石行星"),
                    mass: Some("6.4 x 10²³ kg"),
                    temp: Some("-63°C"),
                    fact: Some("红色星球，有极地冰盖"),
                    diameter: Some("6,779 km"),
                    gravity: Some("3.7 m/s²"),
                    day_length: Some("24.6 小时"),
                })
                .zoomable(),
            CelestialBody::new("木星 (Jupiter)", "Jupiter", 18.0, 0xD2B48C)
                .orbit(240.0, 0.002, 4.1)
                .info(BodyInfo {
                    kind: Some("气体巨星"),
                    mass: Some("1.8 x 10²⁷ kg"),
                    temp: Some("-145°C"),
                    fact: Some("太阳系最大，有大红斑"),
                    diameter: Some("142,984 km"),
                    gravity: Some("24.79 m/s²"),
                    day_length: Some("9.9 小时"),
                })
                .zoomable()
                .with_moons(vec![
                    moon("木卫一 (Io)", "Io", 5.0, 35.0, 0.08, 0xFFD700, 1.0),
                    moon("木卫二 (Europa)", "Europa", 4.0, 50.0, 0.05, 0xADD8E6, 2.0),
                ]),
            saturn,
            CelestialBody::new("海王星 (Neptune)", "Neptune", 12.0, 0x1E90FF)
                .orbit(380.0, 0.001, 6.1)
                .info(BodyInfo {
                    kind: Some("冰巨星"),
                    mass: Some("1.0 x 10²⁶ kg"),
                    temp: Some("-201°C"),
                    fact: None,
                    diameter: Some("49,244 km"),
                    gravity: Some("11.15 m/s²"),
                    day_length: Some("16.1 小时"),
                })
                .zoomable(),
        ];

        let outer = vec![
            CelestialBody::new("冥王星 (Pluto)", "Pluto", 5.0, 0x8B4513)
                .orbit(450.0, OUTER_SPEED, 1.5)
                .info(BodyInfo {
                    kind: Some("矮行星"),
                    mass: Some("1.3 x 10²² kg"),
                    diameter: Some("2,377 km"),
                    gravity: Some("0.62 m/s²"),
                    day_length: Some("6.4 地球日"),
                    ..BodyInfo::default()
                }),
            CelestialBody::new("阋神星 (Eris)", "Eris", 4.0, 0xDCDCDC)
                .orbit(550.0, OUTER_SPEED, 4.5)
                .info(BodyInfo {
                    kind: Some("矮行星/TNO"),
                    mass: Some("1.6 x 10²² kg"),
                    diameter: Some("2,326 km"),
                    ..BodyInfo::default()
                }),
            CelestialBody::new("赛德娜 (Sedna)", "Sedna", 4.0, 0xCD853F)
                .orbit(700.0, OUTER_SPEED, 5.5)
                .info(BodyInfo {
                    kind: Some("TNO"),
                    diameter: Some("约 995 km"),
                    ..BodyInfo::default()
                }),
        ];

        Self { sun, planets, outer }
    }

    pub fn body(&self, body: BodyRef) -> Option<&CelestialBody> {
        match body {
            BodyRef::Planet(i) => self.planets.get(i),
            BodyRef::Moon { planet, moon } => self.planets.get(planet)?.moons.get(moon),
            BodyRef::Outer(i) => self.outer.get(i),
        }
    }

    /// Drop every recorded screen circle. Until the next draw, nothing can
    /// be hit.
    pub fn forget_screens(&mut self) {
        self.sun.screen = None;
        for planet in &mut self.planets {
            planet.screen = None;
            for moon in &mut planet.moons {
                moon.screen = None;
            }
        }
        for body in &mut self.outer {
            body.screen = None;
        }
    }
}

fn moon(
    name: &'static str,
    official_name: &'static str,
    radius: f32,
    distance: f32,
    speed: f32,
    color: u32,
    angle: f32,
) -> CelestialBody {
    CelestialBody::new(name, official_name, radius, color)
        .orbit(distance, speed, angle)
        .info(BodyInfo {
            kind: Some("卫星"),
            ..BodyInfo::default()
        })
}
