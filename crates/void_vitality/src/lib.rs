//! Void Vitality - Character Health, Hazard Status and Respawn
//!
//! This crate tracks the vital state of a single playable character.
//!
//! # Features
//!
//! - Integer hit points with damage, healing and death
//! - Hazard ("poison fog") status with periodic damage
//! - Colour fade feedback while inside a hazard
//! - Respawn with a registry -> local -> scene-name spawn point fallback
//! - Injected sinks for appearance, HUD, movement and the entity body
//!
//! # Example
//!
//! ```ignore
//! use void_vitality::prelude::*;
//!
//! let collaborators = Collaborators::new()
//!     .with_appearance(material)
//!     .with_display(hud);
//!
//! let config = VitalityConfig::default().with_max_health(3);
//! let locator = SpawnChain::from_config(&config, SpawnRegistry::global());
//! let mut vitality = VitalityController::new(config, collaborators, locator)?;
//!
//! vitality.enter_hazard();
//! vitality.update(delta_time);
//! if vitality.is_dead() {
//!     vitality.respawn();
//! }
//! ```

pub mod collaborators;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod hazard;
pub mod respawn;
pub mod tint;

pub mod prelude {
    pub use crate::collaborators::{
        AppearanceSink, Collaborators, EntityBody, MovementControl, StatusDisplaySink,
    };
    pub use crate::config::VitalityConfig;
    pub use crate::controller::VitalityController;
    pub use crate::error::{Collaborator, Result, VitalityError};
    pub use crate::events::VitalityEvent;
    pub use crate::hazard::{HazardState, HazardStatus};
    pub use crate::respawn::{
        RespawnLocator, SceneIndex, SceneLookup, SpawnChain, SpawnPoint, SpawnRegistry,
        SpawnSource,
    };
    pub use crate::tint::{Color, TintBlend};
}

pub use prelude::*;
