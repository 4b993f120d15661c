//! Events emitted by the vitality controller

use crate::error::VitalityError;

/// Something that happened to the entity since the last drain
#[derive(Debug, Clone, PartialEq)]
pub enum VitalityEvent {
    /// Damage was taken
    Damaged { amount: u32, new_health: u32 },
    /// Health was restored
    Healed { amount: u32, new_health: u32 },
    /// Health reached zero
    Died,
    /// Entity came back. `position` is `None` if no spawn point resolved.
    Respawned { position: Option<[f32; 3]> },
    /// Entered a hazard
    HazardEntered,
    /// Left a hazard
    HazardExited,
    /// Hazard timer elapsed and dealt damage
    HazardTick,
    /// Non-fatal problem (missing reference, no spawn point)
    Fault(VitalityError),
}

impl VitalityEvent {
    pub fn is_fault(&self) -> bool {
        matches!(self, VitalityEvent::Fault(_))
    }
}
