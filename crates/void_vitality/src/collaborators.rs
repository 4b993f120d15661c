//! Interfaces to the rest of the entity
//!
//! The controller never looks up sibling components at runtime. Everything it
//! talks to is injected through [`Collaborators`], and every slot is optional.

use crate::error::Result;
use crate::tint::Color;

/// Receives the blended colour once per frame
pub trait AppearanceSink {
    fn set_color(&mut self, color: Color);
}

/// UI that shows remaining health and the death panel
pub trait StatusDisplaySink {
    /// Show `count` health indicators
    fn set_active_count(&mut self, count: u32);

    /// Show or hide the death panel.
    ///
    /// Returns `ConfigurationMissing(DeathPanel)` if the UI has no panel.
    fn set_death_panel_visible(&mut self, visible: bool) -> Result<()>;
}

/// Something that moves the entity and can be switched off
pub trait MovementControl {
    fn set_enabled(&mut self, enabled: bool);

    /// Clear any internal motion state (velocity, buffered jumps)
    fn reset(&mut self) {}

    /// Accept or ignore player input while enabled
    fn set_input_enabled(&mut self, _enabled: bool) {}
}

/// The entity's transform and active flag
pub trait EntityBody {
    fn set_position(&mut self, position: [f32; 3]);

    fn set_active(&mut self, active: bool);
}

/// Injected references for a controller
#[derive(Default)]
pub struct Collaborators {
    pub appearance: Option<Box<dyn AppearanceSink>>,
    pub display: Option<Box<dyn StatusDisplaySink>>,
    /// Low-level locomotion that tracks its own kinematic state
    pub locomotion: Option<Box<dyn MovementControl>>,
    /// Higher-level player controller
    pub controller: Option<Box<dyn MovementControl>>,
    pub body: Option<Box<dyn EntityBody>>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(mut self, sink: impl AppearanceSink + 'static) -> Self {
        self.appearance = Some(Box::new(sink));
        self
    }

    pub fn with_display(mut self, sink: impl StatusDisplaySink + 'static) -> Self {
        self.display = Some(Box::new(sink));
        self
    }

    pub fn with_locomotion(mut self, control: impl MovementControl + 'static) -> Self {
        self.locomotion = Some(Box::new(control));
        self
    }

    pub fn with_controller(mut self, control: impl MovementControl + 'static) -> Self {
        self.controller = Some(Box::new(control));
        self
    }

    pub fn with_body(mut self, body: impl EntityBody + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("appearance", &self.appearance.is_some())
            .field("display", &self.display.is_some())
            .field("locomotion", &self.locomotion.is_some())
            .field("controller", &self.controller.is_some())
            .field("body", &self.body.is_some())
            .finish()
    }
}
