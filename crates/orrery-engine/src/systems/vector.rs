//! Retained 2D draw list.
//!
//! Games record shapes into a `VectorState` during `Game::render`; the web
//! bridge replays the list onto a canvas each frame.
//!
//! # Usage
//!
//! ```ignore
//! // In your Game::render():
//! ctx.vectors.clear_screen(VectorColor::from_rgb_u32(0x080b10));
//! ctx.vectors.fill_circle(Vec2::new(400.0, 300.0), 25.0, VectorColor::YELLOW, None);
//! ctx.vectors.stroke_circle(Vec2::new(400.0, 300.0), 130.0, 1.0, VectorColor::WHITE.with_alpha(0.05));
//! ```

use glam::Vec2;

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Multiply the current alpha by `factor` (used for scene fades).
    pub fn fade(self, factor: f32) -> Self {
        Self { a: self.a * factor.clamp(0.0, 1.0), ..self }
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0),
        )
    }

    // Named color constants
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Soft halo drawn behind a filled shape (canvas shadow blur).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: VectorColor,
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// One recorded drawing operation. Coordinates are canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorCommand {
    /// Fill the whole surface.
    Clear { color: VectorColor },
    FillRect { pos: Vec2, size: Vec2, color: VectorColor },
    FillCircle { center: Vec2, radius: f32, color: VectorColor, glow: Option<Glow> },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: VectorColor },
    /// Ellipse outline; `rotation` in radians.
    StrokeEllipse { center: Vec2, radii: Vec2, rotation: f32, width: f32, color: VectorColor },
    /// Image clipped to a circle, outlined with `rim`.
    Texture {
        key: String,
        center: Vec2,
        radius: f32,
        alpha: f32,
        rim: VectorColor,
        glow: Option<Glow>,
    },
    /// Single line of text, vertically centered on `pos.y`.
    Text { text: String, pos: Vec2, size: f32, bold: bool, align: TextAlign, color: VectorColor },
}

/// Draw list for one frame.
///
/// Cleared by the runner before each `Game::render` and populated by drawing
/// commands. Degenerate shapes (non-positive radius, empty text) are dropped.
#[derive(Debug, Default)]
pub struct VectorState {
    commands: Vec<VectorCommand>,
}

impl VectorState {
    /// Create a new VectorState.
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// Clear the command list. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, in paint order.
    pub fn commands(&self) -> &[VectorCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paint the whole surface with a solid color.
    pub fn clear_screen(&mut self, color: VectorColor) {
        self.commands.push(VectorCommand::Clear { color });
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::FillRect {
            pos,
            size: Vec2::new(width, height),
            color,
        });
    }

    /// Fill a circle, optionally with a glow halo.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor, glow: Option<Glow>) {
        if radius <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::FillCircle { center, radius, color, glow });
    }

    /// Stroke a circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::StrokeCircle { center, radius, width, color });
    }

    /// Stroke a rotated ellipse outline.
    pub fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, width: f32, color: VectorColor) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::StrokeEllipse { center, radii, rotation, width, color });
    }

    /// Draw a named texture clipped to a circle.
    pub fn texture_circle(
        &mut self,
        key: &str,
        center: Vec2,
        radius: f32,
        alpha: f32,
        rim: VectorColor,
        glow: Option<Glow>,
    ) {
        if radius <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::Texture {
            key: key.to_string(),
            center,
            radius,
            alpha,
            rim,
            glow,
        });
    }

    /// Draw one line of text.
    pub fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: VectorColor) {
        self.push_text(text, pos, size, false, align, color);
    }

    /// Draw one line of bold text.
    pub fn text_bold(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: VectorColor) {
        self.push_text(text, pos, size, true, align, color);
    }

    fn push_text(&mut self, text: &str, pos: Vec2, size: f32, bold: bool, align: TextAlign, color: VectorColor) {
        if text.is_empty() || size <= 0.0 {
            return;
        }
        self.commands.push(VectorCommand::Text {
            text: text.to_string(),
            pos,
            size,
            bold,
            align,
            color,
        });
    }
}

/// Rough rendered width of `text` at `size` px in a monospace face.
/// CJK and other wide glyphs count double.
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    let cells: usize = text
        .chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum();
    cells as f32 * size * 0.55
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_color_constructors() {
        let c1 = VectorColor::new(0.5, 0.6, 0.7, 0.8);
        assert_eq!(c1.r, 0.5);
        assert_eq!(c1.a, 0.8);

        let c2 = VectorColor::rgb(0.1, 0.2, 0.3);
        assert_eq!(c2.a, 1.0);

        let c3 = VectorColor::rgb8(255, 128, 0);
        assert!((c3.r - 1.0).abs() < 0.01);
        assert!((c3.g - 0.5).abs() < 0.01);
        assert_eq!(c3.b, 0.0);
    }

    #[test]
    fn packed_hex_matches_components() {
        let royal_blue = VectorColor::from_rgb_u32(0x4169E1);
        assert_eq!(royal_blue, VectorColor::rgb8(0x41, 0x69, 0xE1));
    }

    #[test]
    fn css_string_rounds_channels() {
        let css = VectorColor::from_rgb_u32(0xFFD700).with_alpha(0.5).to_css();
        assert_eq!(css, "rgba(255, 215, 0, 0.5)");
    }

    #[test]
    fn fade_multiplies_alpha() {
        let c = VectorColor::WHITE.with_alpha(0.5).fade(0.5);
        assert!((c.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn degenerate_shapes_are_dropped() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE, None);
        state.stroke_circle(Vec2::ZERO, -1.0, 1.0, VectorColor::WHITE);
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(4.0, 0.0), 0.0, 1.0, VectorColor::WHITE);
        state.text("", Vec2::ZERO, 16.0, TextAlign::Left, VectorColor::WHITE);
        state.fill_rect(Vec2::ZERO, 0.0, 10.0, VectorColor::WHITE);
        assert!(state.is_empty());
    }

    #[test]
    fn commands_keep_paint_order() {
        let mut state = VectorState::new();
        state.clear_screen(VectorColor::BLACK);
        state.fill_circle(Vec2::new(5.0, 5.0), 2.0, VectorColor::YELLOW, None);
        state.text_bold("Sol", Vec2::new(5.0, 10.0), 12.0, TextAlign::Center, VectorColor::WHITE);
        assert_eq!(state.len(), 3);
        assert!(matches!(state.commands()[0], VectorCommand::Clear { .. }));
        assert!(matches!(state.commands()[2], VectorCommand::Text { bold: true, .. }));

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn wide_glyphs_measure_wider() {
        let ascii = estimate_text_width("ab", 10.0);
        let cjk = estimate_text_width("地球", 10.0);
        assert!(cjk > ascii);
        assert!((ascii - 11.0).abs() < 1e-4);
    }
}
