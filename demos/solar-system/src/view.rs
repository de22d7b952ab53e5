//! Overview / detail view state and the timed cross-fade between them.

use orrery_engine::{progress, Easing};

/// Cross-fade length in wall-clock milliseconds.
pub const TRANSITION_MS: f64 = 800.0;
/// Scenes at or below this opacity are neither drawn nor animated.
pub const CULL_ALPHA: f32 = 0.05;

const TRANSITION_EASING: Easing = Easing::SineInOut;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Overview to detail.
    In,
    /// Detail back to overview.
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    pub started_at_ms: f64,
    /// Planet index being entered or left.
    pub target: usize,
}

impl Transition {
    /// Linear progress in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f32 {
        progress(self.started_at_ms, now_ms, TRANSITION_MS)
    }

    pub fn eased(&self, now_ms: f64) -> f32 {
        TRANSITION_EASING.apply(self.progress(now_ms))
    }
}

/// Which view is showing. A transition carries its own target, so there is
/// never both an active planet and a transition target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Overview,
    Detail(usize),
    Transitioning(Transition),
}

/// Opacities for one frame. `overview + detail == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBlend {
    pub overview: f32,
    pub detail: f32,
    /// Planet the detail scene shows, if any.
    pub planet: Option<usize>,
    /// Draw the overview after the detail scene.
    pub overview_on_top: bool,
}

impl SceneBlend {
    pub fn shows_overview(&self) -> bool {
        self.overview > CULL_ALPHA
    }

    pub fn shows_detail(&self) -> Option<usize> {
        self.planet.filter(|_| self.detail > CULL_ALPHA)
    }
}

impl ViewState {
    /// Planet of a settled detail view.
    pub fn active_planet(&self) -> Option<usize> {
        match self {
            ViewState::Detail(planet) => Some(*planet),
            _ => None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, ViewState::Transitioning(_))
    }

    /// Start zooming into `planet`. Only valid from the overview.
    pub fn begin_zoom_in(&mut self, planet: usize, now_ms: f64) -> bool {
        if *self != ViewState::Overview {
            return false;
        }
        *self = ViewState::Transitioning(Transition {
            direction: Direction::In,
            started_at_ms: now_ms,
            target: planet,
        });
        true
    }

    /// Start returning to the overview. Only valid from a settled detail view.
    pub fn begin_zoom_out(&mut self, now_ms: f64) -> bool {
        let ViewState::Detail(planet) = *self else {
            return false;
        };
        *self = ViewState::Transitioning(Transition {
            direction: Direction::Out,
            started_at_ms: now_ms,
            target: planet,
        });
        true
    }

    /// Commit a finished transition. Returns true when the state flipped.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let ViewState::Transitioning(t) = *self else {
            return false;
        };
        if t.progress(now_ms) < 1.0 {
            return false;
        }
        *self = match t.direction {
            Direction::In => ViewState::Detail(t.target),
            Direction::Out => ViewState::Overview,
        };
        true
    }

    /// Jump straight to the overview, dropping any transition in flight.
    pub fn force_overview(&mut self) {
        *self = ViewState::Overview;
    }

    pub fn blend(&self, now_ms: f64) -> SceneBlend {
        match *self {
            ViewState::Overview => SceneBlend {
                overview: 1.0,
                detail: 0.0,
                planet: None,
                overview_on_top: true,
            },
            ViewState::Detail(planet) => SceneBlend {
                overview: 0.0,
                detail: 1.0,
                planet: Some(planet),
                overview_on_top: false,
            },
            ViewState::Transitioning(t) => {
                let eased = t.eased(now_ms);
                let detail = match t.direction {
                    Direction::In => eased,
                    Direction::Out => 1.0 - eased,
                };
                SceneBlend {
                    overview: 1.0 - detail,
                    detail,
                    planet: Some(t.target),
                    overview_on_top: t.direction == Direction::Out,
                }
            }
        }
    }
}
