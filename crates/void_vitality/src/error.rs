//! Error types for the vitality system

use std::fmt;
use thiserror::Error;

/// An external reference the controller can be wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// Panel shown while the character is dead
    DeathPanel,
    /// Row of health indicators
    StatusIndicators,
    /// Material/colour sink
    Appearance,
    /// Higher-level player controller
    Controller,
    /// The entity body (transform and active flag)
    Body,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::DeathPanel => "death panel",
            Collaborator::StatusIndicators => "status indicators",
            Collaborator::Appearance => "appearance",
            Collaborator::Controller => "controller",
            Collaborator::Body => "body",
        };
        f.write_str(name)
    }
}

/// Vitality system errors
///
/// Only config errors are ever returned as `Err`. The other variants are
/// reported through the log and [`crate::VitalityEvent::Fault`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VitalityError {
    /// A sink or collaborator reference is unset
    #[error("Missing {0} reference")]
    ConfigurationMissing(Collaborator),

    /// No respawn source produced a position
    #[error("No respawn position available (scene object '{scene_name}' not found)")]
    RespawnPositionUnavailable {
        /// Name that was searched for in the scene
        scene_name: String,
    },

    /// Configuration values out of range
    #[error("Invalid vitality configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Failed to parse vitality configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for VitalityError {
    fn from(e: serde_json::Error) -> Self {
        VitalityError::Config(e.to_string())
    }
}

/// Result type for vitality operations
pub type Result<T> = std::result::Result<T, VitalityError>;
