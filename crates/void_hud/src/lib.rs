//! Void HUD - Character Status Elements
//!
//! This crate provides the HUD side of the vitality system.
//!
//! # Features
//!
//! - Row of health icons ("N of M hearts")
//! - Death panel whose button and shortcut key respawn the character
//! - Shared handle that the controller writes and the renderer reads
//!
//! # Example
//!
//! ```ignore
//! use void_hud::prelude::*;
//!
//! let hud = StatusHud::new(HealthIcons::new(3), Some(DeathPanel::default()));
//! let collaborators = Collaborators::new().with_display(hud.clone());
//!
//! // Later, in the render pass
//! let state = hud.snapshot();
//! for (i, lit) in state.icons.iter_visible() { /* draw */ }
//!
//! // Input handling
//! if hud.handle_key(pressed_key, &mut vitality) { /* consumed */ }
//! ```

pub mod status;

pub mod prelude {
    pub use crate::status::{DeathPanel, HealthIcons, IconStyle, StatusHud, StatusHudState};
}

pub use prelude::*;
