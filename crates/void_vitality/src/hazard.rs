//! Hazard (poison fog) status timer

use serde::{Deserialize, Serialize};

/// Whether the entity is standing in a hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardState {
    Clear,
    InHazard,
}

impl Default for HazardState {
    fn default() -> Self {
        Self::Clear
    }
}

/// Periodic damage timer for hazard exposure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardStatus {
    /// Seconds between damage ticks
    pub damage_interval: f32,
    state: HazardState,
    /// Seconds since the last damage tick (or since entering)
    #[serde(skip)]
    timer: f32,
}

impl HazardStatus {
    pub fn new(damage_interval: f32) -> Self {
        Self {
            damage_interval,
            state: HazardState::Clear,
            timer: 0.0,
        }
    }

    pub fn state(&self) -> HazardState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == HazardState::InHazard
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Enter the hazard. The timer restarts even if already inside.
    pub fn enter(&mut self) {
        self.state = HazardState::InHazard;
        self.timer = 0.0;
    }

    /// Leave the hazard. Any partial interval is dropped on the next enter.
    pub fn exit(&mut self) {
        self.state = HazardState::Clear;
    }

    /// Advance the timer by one frame.
    ///
    /// Returns true when a damage tick is due. The timer then resets to zero;
    /// overshoot past the interval is discarded, not carried forward.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.state != HazardState::InHazard {
            return false;
        }

        self.timer += delta_time;
        if self.timer >= self.damage_interval {
            self.timer = 0.0;
            return true;
        }
        false
    }
}
