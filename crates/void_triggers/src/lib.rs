//! Void Triggers - Hazard Volumes
//!
//! This crate turns an entity's position into hazard enter/exit calls.
//!
//! # Features
//!
//! - Box and sphere fog zones
//! - Overlapping zones merge into one hazard region
//! - Edge-triggered: the controller only hears about transitions
//!
//! # Example
//!
//! ```ignore
//! use void_triggers::prelude::*;
//!
//! let mut fog = FogTracker::new();
//! fog.add_zone(FogZone::sphere("swamp", [10.0, 0.0, 0.0], 4.0));
//!
//! // Each frame, before vitality.update()
//! fog.update(player_position, &mut vitality);
//! ```

pub mod zone;

pub mod prelude {
    pub use crate::zone::{FogShape, FogTracker, FogTransition, FogZone, HazardReceiver};
}

pub use prelude::*;
