/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Flatten into `[kind, a, b, c]`.
    pub fn to_array(self) -> [f32; Self::FLOATS] {
        [self.kind, self.a, self.b, self.c]
    }
}

/// Flatten a batch of events into one float list for the host.
pub fn flatten_events(events: &[GameEvent]) -> Vec<f32> {
    let mut out = Vec::with_capacity(events.len() * GameEvent::FLOATS);
    for event in events {
        out.extend_from_slice(&event.to_array());
    }
    out
}
