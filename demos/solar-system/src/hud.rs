/// Canvas overlays: view title, tooltip, detail panel, back button,
/// status line, no-moons prompt and the loading screen.

use glam::Vec2;
use orrery_engine::{estimate_text_width, TextAlign, VectorColor, VectorState};

use crate::bodies::CelestialBody;
use crate::locale::{Locale, TextKey};

pub const ACCENT: u32 = 0x00c8ff;

const PADDING: f32 = 10.0;
const LINE_SPACING: f32 = 1.5;
const CARD_FILL: VectorColor = VectorColor::new(0.04, 0.06, 0.1, 0.85);
const TOOLTIP_OFFSET: f32 = 15.0;
const PANEL_MARGIN: f32 = 20.0;
const PANEL_TOP: f32 = 80.0;
const TITLE_Y: f32 = 36.0;
const TITLE_SIZE: f32 = 22.0;
const BUTTON_POS: Vec2 = Vec2::new(20.0, 20.0);
const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_TEXT_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Section,
    Body,
    Accent,
}

impl LineStyle {
    fn size(self) -> f32 {
        match self {
            LineStyle::Heading => 16.0,
            LineStyle::Section => 14.0,
            LineStyle::Body | LineStyle::Accent => 13.0,
        }
    }

    fn bold(self) -> bool {
        matches!(self, LineStyle::Heading | LineStyle::Section)
    }

    fn color(self) -> VectorColor {
        match self {
            LineStyle::Heading => VectorColor::WHITE,
            LineStyle::Section | LineStyle::Accent => VectorColor::from_rgb_u32(ACCENT),
            LineStyle::Body => VectorColor::WHITE.with_alpha(0.85),
        }
    }

    fn height(self) -> f32 {
        self.size() * LINE_SPACING
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self { text: text.into(), style }
    }
}

fn field(locale: Locale, label: TextKey, value: Option<&str>, fallback: TextKey) -> Line {
    let value = value.unwrap_or_else(|| locale.text(fallback));
    Line::new(LineStyle::Body, format!("{}: {}", locale.text(label), value))
}

fn distance_text(distance: f32, locale: Locale) -> String {
    if distance > 0.0 {
        format!("{distance:.0}")
    } else {
        locale.text(TextKey::NotAvailable).to_string()
    }
}

/// Tooltip content for a hovered body.
pub fn tooltip_lines(body: &CelestialBody, locale: Locale, detail_mode: bool) -> Vec<Line> {
    let (orbit_label, orbit_unit) = if detail_mode {
        (TextKey::PropOrbitPlanet, TextKey::UnitPlanetRadius)
    } else {
        (TextKey::PropOrbitSun, TextKey::UnitAu)
    };
    let info = &body.info;
    let mut lines = vec![
        Line::new(LineStyle::Heading, body.name),
        field(locale, TextKey::PropOfficialName, Some(body.official_name), TextKey::NotAvailable),
        field(locale, TextKey::PropType, info.kind, TextKey::Unknown),
        field(locale, TextKey::PropTemp, info.temp, TextKey::Unknown),
        field(locale, TextKey::PropMass, info.mass, TextKey::Unknown),
        Line::new(
            LineStyle::Body,
            format!(
                "📏 {}: {} {}",
                locale.text(orbit_label),
                distance_text(body.distance, locale),
                locale.text(orbit_unit)
            ),
        ),
    ];
    if let Some(fact) = info.fact {
        lines.push(Line::new(LineStyle::Body, format!("{}: {}", locale.text(TextKey::FactLabel), fact)));
    }
    if !detail_mode && body.can_zoom {
        lines.push(Line::new(LineStyle::Accent, locale.text(TextKey::ClickToZoom)));
    }
    lines
}

/// Side panel content for the planet in the detail view.
pub fn panel_lines(planet: &CelestialBody, locale: Locale) -> Vec<Line> {
    let info = &planet.info;
    let t = |key| locale.text(key);
    let speed_label = t(TextKey::SpeedLabel).trim_end_matches(':');
    vec![
        Line::new(LineStyle::Heading, planet.name),
        Line::new(LineStyle::Section, t(TextKey::DetailBaseProps)),
        field(locale, TextKey::PropOfficialName, Some(planet.official_name), TextKey::NotAvailable),
        field(locale, TextKey::PropType, info.kind, TextKey::Unknown),
        field(locale, TextKey::PropMass, info.mass, TextKey::Unknown),
        field(locale, TextKey::PropTemp, info.temp, TextKey::Unknown),
        Line::new(LineStyle::Section, t(TextKey::DetailOrbit)),
        Line::new(
            LineStyle::Body,
            format!(
                "{}: {} {}",
                t(TextKey::PropOrbitSun),
                distance_text(planet.distance, locale),
                t(TextKey::UnitAu)
            ),
        ),
        Line::new(LineStyle::Body, format!("{speed_label}: {}", planet.speed)),
        Line::new(LineStyle::Section, t(TextKey::DetailParams)),
        field(locale, TextKey::DetailDiameter, info.diameter, TextKey::NotAvailable),
        field(locale, TextKey::DetailGravity, info.gravity, TextKey::NotAvailable),
        field(locale, TextKey::DetailDayLength, info.day_length, TextKey::NotAvailable),
        Line::new(LineStyle::Body, format!("{}: {}", t(TextKey::DetailMoons), planet.moons.len())),
        Line::new(LineStyle::Section, t(TextKey::DetailFact)),
        Line::new(LineStyle::Body, info.fact.unwrap_or_else(|| t(TextKey::NoFact))),
    ]
}

/// Box size needed to show `lines`.
pub fn card_size(lines: &[Line]) -> Vec2 {
    let width = lines
        .iter()
        .map(|l| estimate_text_width(&l.text, l.style.size()))
        .fold(0.0, f32::max);
    let height: f32 = lines.iter().map(|l| l.style.height()).sum();
    Vec2::new(width + 2.0 * PADDING, height + 2.0 * PADDING)
}

fn draw_card(vectors: &mut VectorState, lines: &[Line], top_left: Vec2) {
    let size = card_size(lines);
    vectors.fill_rect(top_left, size.x, size.y, CARD_FILL);
    let mut y = top_left.y + PADDING;
    for line in lines {
        let h = line.style.height();
        let pos = Vec2::new(top_left.x + PADDING, y + h / 2.0);
        let (size, color) = (line.style.size(), line.style.color());
        if line.style.bold() {
            vectors.text_bold(&line.text, pos, size, TextAlign::Left, color);
        } else {
            vectors.text(&line.text, pos, size, TextAlign::Left, color);
        }
        y += h;
    }
}

/// Top-left corner for a tooltip at `pointer`, flipped to stay on screen.
pub fn tooltip_origin(size: Vec2, pointer: Vec2, viewport: Vec2) -> Vec2 {
    let mut origin = pointer + Vec2::splat(TOOLTIP_OFFSET);
    if origin.x + size.x > viewport.x {
        origin.x = pointer.x - TOOLTIP_OFFSET - size.x;
    }
    if origin.y + size.y > viewport.y {
        origin.y = pointer.y - TOOLTIP_OFFSET - size.y;
    }
    origin.max(Vec2::ZERO)
}

pub fn draw_tooltip(vectors: &mut VectorState, lines: &[Line], pointer: Vec2, viewport: Vec2) {
    let origin = tooltip_origin(card_size(lines), pointer, viewport);
    draw_card(vectors, lines, origin);
}

pub fn draw_panel(vectors: &mut VectorState, lines: &[Line], viewport: Vec2) {
    let size = card_size(lines);
    let origin = Vec2::new((viewport.x - size.x - PANEL_MARGIN).max(0.0), PANEL_TOP);
    draw_card(vectors, lines, origin);
}

pub fn draw_title(vectors: &mut VectorState, text: &str, viewport: Vec2) {
    let pos = Vec2::new(viewport.x / 2.0, TITLE_Y);
    vectors.text_bold(text, pos, TITLE_SIZE, TextAlign::Center, VectorColor::WHITE);
}

/// Speed and zoom readout in the bottom-left corner.
pub fn draw_status(vectors: &mut VectorState, locale: Locale, speed: f32, zoom: f32, viewport: Vec2) {
    let text = format!(
        "{} {speed:.2}x   {} {zoom:.2}x",
        locale.text(TextKey::SpeedLabel),
        locale.text(TextKey::ZoomLabel)
    );
    let pos = Vec2::new(PANEL_MARGIN, viewport.y - PANEL_MARGIN);
    vectors.text(&text, pos, 13.0, TextAlign::Left, VectorColor::WHITE.with_alpha(0.7));
}

/// Axis-aligned clickable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Button {
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.pos + self.size;
        p.x >= self.pos.x && p.y >= self.pos.y && p.x <= max.x && p.y <= max.y
    }
}

/// Back control shown in the settled detail view. Width follows the label.
pub fn back_button(locale: Locale) -> Button {
    let label = locale.text(TextKey::BackButton);
    let width = estimate_text_width(label, BUTTON_TEXT_SIZE) + 2.0 * PADDING;
    Button { pos: BUTTON_POS, size: Vec2::new(width, BUTTON_HEIGHT) }
}

pub fn draw_back_button(vectors: &mut VectorState, locale: Locale) {
    let button = back_button(locale);
    vectors.fill_rect(button.pos, button.size.x, button.size.y, CARD_FILL);
    let label_pos = Vec2::new(button.pos.x + PADDING, button.pos.y + button.size.y / 2.0);
    vectors.text(
        locale.text(TextKey::BackButton),
        label_pos,
        BUTTON_TEXT_SIZE,
        TextAlign::Left,
        VectorColor::from_rgb_u32(ACCENT),
    );
}

/// Shown under a focal planet that has no moons.
pub fn draw_no_moons(
    vectors: &mut VectorState,
    center: Vec2,
    main_radius: f32,
    planet_name: &str,
    locale: Locale,
    alpha: f32,
) {
    let below = |dy: f32| Vec2::new(center.x, center.y + main_radius + dy);
    vectors.text(
        locale.text(TextKey::InfoSystemPrompt),
        below(40.0),
        24.0,
        TextAlign::Center,
        VectorColor::from_rgb_u32(ACCENT).fade(alpha),
    );
    let dim = VectorColor::WHITE.with_alpha(0.7).fade(alpha);
    let message = format!("({planet_name}) {}", locale.text(TextKey::DetailNoMoons));
    vectors.text(&message, below(70.0), 16.0, TextAlign::Center, dim);
    vectors.text(locale.text(TextKey::DetailReturnPrompt), below(100.0), 16.0, TextAlign::Center, dim);
}

pub fn draw_loading(vectors: &mut VectorState, locale: Locale, viewport: Vec2) {
    vectors.fill_rect(Vec2::ZERO, viewport.x, viewport.y, VectorColor::BLACK.with_alpha(0.8));
    vectors.text_bold(
        locale.text(TextKey::LoadingText),
        viewport / 2.0,
        24.0,
        TextAlign::Center,
        VectorColor::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Catalog, EARTH, MERCURY, SEDNA};
    use orrery_engine::VectorCommand;

    fn texts(vectors: &VectorState) -> Vec<String> {
        vectors
            .commands()
            .iter()
            .filter_map(|c| match c {
                VectorCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn tooltip_offers_zoom_only_in_overview() {
        let catalog = Catalog::solar_system();
        let earth = &catalog.planets[EARTH];
        let overview = tooltip_lines(earth, Locale::En, false);
        assert_eq!(overview[0], Line::new(LineStyle::Heading, "地球 (Earth)"));
        assert_eq!(overview.last().unwrap().style, LineStyle::Accent);
        assert!(overview.iter().any(|l| l.text == "📏 Orbital Distance (vs Sun): 130 AU"));

        let detail = tooltip_lines(earth, Locale::En, true);
        assert!(detail.iter().all(|l| l.style != LineStyle::Accent));
        assert!(detail.iter().any(|l| l.text == "📏 Orbital Distance (vs Host): 130 x Planet Radius"));
    }

    #[test]
    fn tooltip_fills_missing_values() {
        let catalog = Catalog::solar_system();
        let sedna = &catalog.outer[SEDNA];
        let lines = tooltip_lines(sedna, Locale::En, false);
        assert!(lines.iter().any(|l| l.text == "⚖️ Mass: Unknown"));
        assert!(lines.iter().any(|l| l.text == "🌡️ Surface Temp: Unknown"));
        assert!(lines.iter().all(|l| l.style != LineStyle::Accent), "outer bodies cannot zoom");

        let zh = tooltip_lines(sedna, Locale::ZhCn, false);
        assert!(zh.iter().any(|l| l.text == "⚖️ 质量: 未知"));
    }

    #[test]
    fn panel_lists_every_section() {
        let catalog = Catalog::solar_system();
        let lines = panel_lines(&catalog.planets[MERCURY], Locale::En);
        let sections: Vec<_> = lines.iter().filter(|l| l.style == LineStyle::Section).map(|l| l.text.as_str()).collect();
        assert_eq!(
            sections,
            vec!["🛰️ Basic Properties", "🔭 Orbit & Period", "✨ Detailed Parameters", "💡 Scientific Facts"]
        );
        assert!(lines.iter().any(|l| l.text == "☄ Speed: 0.04"));
        assert!(lines.iter().any(|l| l.text == "Known Moons Count: 0"));
        assert_eq!(lines.last().unwrap().text, "No special information");
    }

    #[test]
    fn tooltip_flips_at_viewport_edge() {
        let size = Vec2::new(200.0, 100.0);
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(tooltip_origin(size, Vec2::new(100.0, 100.0), viewport), Vec2::new(115.0, 115.0));
        let flipped = tooltip_origin(size, Vec2::new(750.0, 580.0), viewport);
        assert_eq!(flipped, Vec2::new(535.0, 465.0));
    }

    #[test]
    fn card_grows_with_content() {
        let short = vec![Line::new(LineStyle::Body, "a")];
        let long = vec![Line::new(LineStyle::Body, "a much longer line"), Line::new(LineStyle::Body, "b")];
        let (s, l) = (card_size(&short), card_size(&long));
        assert!(l.x > s.x);
        assert!(l.y > s.y);
    }

    #[test]
    fn back_button_hit_area() {
        let button = back_button(Locale::En);
        assert!(button.contains(BUTTON_POS + Vec2::splat(5.0)));
        assert!(!button.contains(Vec2::new(5.0, 5.0)));
        assert!(!button.contains(BUTTON_POS + button.size + Vec2::ONE));
    }

    #[test]
    fn no_moons_prompt_text() {
        let mut vectors = VectorState::new();
        draw_no_moons(&mut vectors, Vec2::new(400.0, 300.0), 20.0, "水星 (Mercury)", Locale::En, 1.0);
        assert_eq!(
            texts(&vectors),
            vec![
                "[ Information System Prompt ]".to_string(),
                "(水星 (Mercury)) This planet has no known moons.".to_string(),
                "Click to return to the Solar System Overview".to_string(),
            ]
        );
        let VectorCommand::Text { pos, size, .. } = &vectors.commands()[0] else {
            panic!("expected text");
        };
        assert_eq!(*pos, Vec2::new(400.0, 360.0));
        assert_eq!(*size, 24.0);
    }

    #[test]
    fn status_line_formats_factors() {
        let mut vectors = VectorState::new();
        draw_status(&mut vectors, Locale::En, 1.5, 0.75, Vec2::new(800.0, 600.0));
        assert_eq!(texts(&vectors), vec!["☄ Speed: 1.50x   ☌ Zoom: 0.75x".to_string()]);
    }
}
