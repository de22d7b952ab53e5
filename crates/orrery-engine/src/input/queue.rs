/// Everything the host page can tell the simulation.
///
/// Coordinates are canvas pixels, already corrected for CSS scaling.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    /// Release; the orrery treats this as the click.
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// `key_code` follows `KeyboardEvent.keyCode`.
    KeyDown { key_code: u32 },
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
    /// Numeric control from the page (sliders, buttons). Meaning of
    /// `a`, `b`, `c` depends on `kind`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
    /// Textual control from the page, e.g. a locale code.
    Command { kind: u32, text: String },
}

/// Events collected between fixed steps, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self { pending: Vec::with_capacity(16) }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Keep only the events `keep` accepts, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&InputEvent) -> bool) {
        self.pending.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
