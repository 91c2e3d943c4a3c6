//! Displayed state of one item's load.
//!
//! `Idle -> Loading(0) -> Loading(n)* -> Finalizing -> Loaded | Errored`.
//! A new selection restarts at `Loading(0)` whatever the current phase;
//! the widget's own fetch is not cancelled, late events simply overwrite
//! the display.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading {
        percent: u8,
    },
    Finalizing,
    Loaded,
    Errored,
}

impl LoadPhase {
    pub fn in_flight(&self) -> bool {
        matches!(self, LoadPhase::Loading { .. } | LoadPhase::Finalizing)
    }

    /// Percentage shown by the overlay in this phase.
    pub fn percent(&self) -> Option<u8> {
        match self {
            LoadPhase::Loading { percent } => Some(*percent),
            LoadPhase::Finalizing => Some(100),
            _ => None,
        }
    }
}

/// `round(fraction * 100)` clamped to `0..=100`; `None` for NaN.
pub fn percent_from_fraction(fraction: f64) -> Option<u8> {
    if fraction.is_nan() {
        return None;
    }
    let percent = (fraction * 100.0).round().clamp(0.0, 100.0);
    Some(percent as u8)
}

/// Identifies the cycle a deferred task was scheduled for.
#[derive(Clone)]
pub struct CycleToken {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl CycleToken {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

#[derive(Debug, Default)]
pub struct LoadCycle {
    phase: LoadPhase,
    generation: Rc<Cell<u64>>,
}

impl LoadCycle {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn token(&self) -> CycleToken {
        CycleToken {
            generation: Rc::clone(&self.generation),
            issued: self.generation.get(),
        }
    }

    /// Abandon whatever was in flight and start over at 0%.
    pub fn begin(&mut self) {
        self.generation.set(self.generation.get() + 1);
        self.phase = LoadPhase::Loading { percent: 0 };
    }

    /// Record a progress report. Returns the percentage to display, or
    /// `None` when the report carries no usable number.
    pub fn progress(&mut self, fraction: f64) -> Option<u8> {
        let percent = percent_from_fraction(fraction)?;
        self.phase = if percent >= 100 {
            LoadPhase::Finalizing
        } else {
            LoadPhase::Loading { percent }
        };
        Some(percent)
    }

    pub fn finish(&mut self) {
        self.phase = LoadPhase::Loaded;
    }

    pub fn fail(&mut self) {
        self.phase = LoadPhase::Errored;
    }
}
