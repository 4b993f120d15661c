//! Health, hazard status and respawn for a single character

use crate::collaborators::Collaborators;
use crate::config::VitalityConfig;
use crate::error::{Collaborator, Result, VitalityError};
use crate::events::VitalityEvent;
use crate::hazard::{HazardState, HazardStatus};
use crate::respawn::RespawnLocator;
use crate::tint::{Color, TintBlend};

/// Owns the health, hazard and respawn state of one character.
///
/// Driven by [`update`](Self::update) once per frame and by discrete calls
/// from triggers and UI. Nothing here is fatal: missing collaborators and
/// failed spawn lookups are logged and queued as [`VitalityEvent::Fault`].
pub struct VitalityController {
    config: VitalityConfig,
    current_health: u32,
    hazard: HazardStatus,
    tint: TintBlend,
    collaborators: Collaborators,
    locator: Box<dyn RespawnLocator>,
    events: Vec<VitalityEvent>,
    /// Events that were already queued when the last `update` returned
    stale_events: usize,
}

impl VitalityController {
    /// Create a controller at full health.
    ///
    /// The death panel is hidden and the indicators are synced immediately so
    /// the UI is correct before the first frame.
    pub fn new(
        config: VitalityConfig,
        collaborators: Collaborators,
        locator: impl RespawnLocator + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let mut controller = Self {
            current_health: config.max_health,
            hazard: HazardStatus::new(config.hazard_damage_interval),
            tint: TintBlend::new(
                config.base_color,
                config.hazard_color,
                config.color_blend_rate,
            ),
            config,
            collaborators,
            locator: Box::new(locator),
            events: Vec::new(),
            stale_events: 0,
        };

        for (present, which) in [
            (controller.collaborators.appearance.is_some(), Collaborator::Appearance),
            (controller.collaborators.display.is_some(), Collaborator::StatusIndicators),
            (controller.collaborators.body.is_some(), Collaborator::Body),
        ] {
            if !present {
                controller.report(VitalityError::ConfigurationMissing(which));
            }
        }

        if controller.collaborators.display.is_some() {
            controller.set_death_panel(false);
        }
        controller.refresh_display();

        Ok(controller)
    }

    /// Advance hazard damage and the colour fade by one frame.
    ///
    /// Events left undrained since before the previous `update` are dropped,
    /// so the queue holds at most about one frame of history. Events queued
    /// since then (e.g. by a trigger earlier this frame) are kept.
    pub fn update(&mut self, delta_time: f32) {
        let delta_time = delta_time.max(0.0);
        self.events.drain(..self.stale_events);

        if self.hazard.tick(delta_time) && !self.is_dead() {
            self.events.push(VitalityEvent::HazardTick);
            self.take_damage(1);
        }

        if let Some(color) = self.tint.step(self.hazard.is_active(), delta_time) {
            if let Some(appearance) = self.collaborators.appearance.as_mut() {
                appearance.set_color(color);
            }
        }

        self.stale_events = self.events.len();
    }

    /// Entity stepped into a hazard. Restarts the damage timer.
    pub fn enter_hazard(&mut self) {
        let was_active = self.hazard.is_active();
        self.hazard.enter();
        if !was_active {
            log::debug!("Entered hazard");
            self.events.push(VitalityEvent::HazardEntered);
        }
    }

    /// Entity left the hazard
    pub fn exit_hazard(&mut self) {
        if self.hazard.is_active() {
            log::debug!("Exited hazard");
            self.events.push(VitalityEvent::HazardExited);
        }
        self.hazard.exit();
    }

    /// Apply damage. Ignored once dead.
    pub fn take_damage(&mut self, amount: u32) {
        if self.is_dead() {
            return;
        }

        self.current_health = self.current_health.saturating_sub(amount);
        self.events.push(VitalityEvent::Damaged {
            amount,
            new_health: self.current_health,
        });
        self.refresh_display();

        if self.current_health == 0 {
            self.die();
        }
    }

    /// Restore health up to the maximum.
    ///
    /// Healing does not revive: it is ignored while dead.
    pub fn heal(&mut self, amount: u32) {
        if self.is_dead() {
            log::debug!("Ignoring heal of {} while dead", amount);
            return;
        }

        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.config.max_health);
        self.events.push(VitalityEvent::Healed {
            amount,
            new_health: self.current_health,
        });
        self.refresh_display();
    }

    fn die(&mut self) {
        log::info!("Character died");
        self.events.push(VitalityEvent::Died);

        self.set_death_panel(true);

        // Both controllers go off so no buffered input moves the body.
        if let Some(controller) = self.collaborators.controller.as_mut() {
            controller.set_enabled(false);
        }
        if let Some(locomotion) = self.collaborators.locomotion.as_mut() {
            locomotion.set_enabled(false);
        }
    }

    /// Bring the character back at full health.
    ///
    /// Safe to call repeatedly and while alive; each call runs the whole
    /// sequence again.
    pub fn respawn(&mut self) {
        log::info!("Respawning character");

        self.current_health = self.config.max_health;
        self.refresh_display();

        // Hidden before the spawn lookup so a failed lookup still clears it.
        self.set_death_panel(false);

        let position = self.locator.resolve();
        match position {
            Some(position) => self.move_to(position),
            None => {
                let scene_name = self.locator.scene_name().to_string();
                self.report(VitalityError::RespawnPositionUnavailable { scene_name });
            }
        }

        if let Some(locomotion) = self.collaborators.locomotion.as_mut() {
            locomotion.set_enabled(true);
        }
        match self.collaborators.controller.as_mut() {
            Some(controller) => {
                controller.set_enabled(true);
                controller.reset();
                controller.set_input_enabled(true);
                log::debug!("Controller reset and re-enabled");
            }
            None => self.report(VitalityError::ConfigurationMissing(Collaborator::Controller)),
        }

        if let Some(body) = self.collaborators.body.as_mut() {
            body.set_active(true);
        }

        let base = self.tint.reset();
        if let Some(appearance) = self.collaborators.appearance.as_mut() {
            appearance.set_color(base);
        }

        self.exit_hazard();
        self.events.push(VitalityEvent::Respawned { position });
    }

    fn move_to(&mut self, position: [f32; 3]) {
        let Some(body) = self.collaborators.body.as_mut() else {
            self.report(VitalityError::ConfigurationMissing(Collaborator::Body));
            return;
        };

        log::info!("Moving character to {:?}", position);

        // Locomotion keeps its own kinematic state and would undo the teleport.
        match self.collaborators.locomotion.as_mut() {
            Some(locomotion) => {
                locomotion.set_enabled(false);
                body.set_position(position);
                locomotion.set_enabled(true);
            }
            None => body.set_position(position),
        }
    }

    fn refresh_display(&mut self) {
        if let Some(display) = self.collaborators.display.as_mut() {
            display.set_active_count(self.current_health);
        }
    }

    fn set_death_panel(&mut self, visible: bool) {
        let result = match self.collaborators.display.as_mut() {
            Some(display) => display.set_death_panel_visible(visible),
            None => Err(VitalityError::ConfigurationMissing(Collaborator::DeathPanel)),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    fn report(&mut self, error: VitalityError) {
        match &error {
            VitalityError::ConfigurationMissing(Collaborator::DeathPanel)
            | VitalityError::RespawnPositionUnavailable { .. } => log::error!("{}", error),
            _ => log::warn!("{}", error),
        }
        self.events.push(VitalityEvent::Fault(error));
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_health(&self) -> u32 {
        self.config.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    /// Health as a fraction (0.0 - 1.0)
    pub fn health_fraction(&self) -> f32 {
        self.current_health as f32 / self.config.max_health as f32
    }

    pub fn is_in_hazard(&self) -> bool {
        self.hazard.is_active()
    }

    pub fn hazard_state(&self) -> HazardState {
        self.hazard.state()
    }

    /// Seconds accumulated towards the next hazard tick
    pub fn hazard_timer(&self) -> f32 {
        self.hazard.timer()
    }

    /// Colour currently shown
    pub fn current_color(&self) -> Color {
        self.tint.current()
    }

    pub fn config(&self) -> &VitalityConfig {
        &self.config
    }

    pub fn locator(&self) -> &dyn RespawnLocator {
        self.locator.as_ref()
    }

    pub fn locator_mut(&mut self) -> &mut dyn RespawnLocator {
        self.locator.as_mut()
    }

    /// Swap sinks or controllers at runtime (e.g. once the UI has loaded)
    pub fn collaborators_mut(&mut self) -> &mut Collaborators {
        &mut self.collaborators
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[VitalityEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<VitalityEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.events)
    }
}

impl std::fmt::Debug for VitalityController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VitalityController")
            .field("current_health", &self.current_health)
            .field("max_health", &self.config.max_health)
            .field("hazard", &self.hazard)
            .field("color", &self.tint.current())
            .field("collaborators", &self.collaborators)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::respawn::{SpawnChain, SpawnRegistry};

    fn controller(max_health: u32) -> VitalityController {
        let config = VitalityConfig::default().with_max_health(max_health);
        VitalityController::new(config, Collaborators::new(), SpawnChain::new(SpawnRegistry::new()))
            .unwrap()
    }

    #[test]
    fn test_starts_full() {
        let c = controller(3);
        assert_eq!(c.current_health(), 3);
        assert_eq!(c.max_health(), 3);
        assert!(!c.is_dead());
        assert!(!c.is_in_hazard());
        assert_eq!(c.current_color(), Color::WHITE);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = VitalityConfig::default().with_max_health(0);
        let result = VitalityController::new(
            config,
            Collaborators::new(),
            SpawnChain::new(SpawnRegistry::new()),
        );
        assert!(matches!(result, Err(VitalityError::InvalidConfig(_))));
    }

    #[test]
    fn test_damage_clamps_and_kills() {
        let mut c = controller(3);
        c.take_damage(10);
        assert_eq!(c.current_health(), 0);
        assert!(c.is_dead());

        c.take_damage(1);
        assert_eq!(c.current_health(), 0);
    }

    #[test]
    fn test_heal_clamps_and_ignores_dead() {
        let mut c = controller(4);
        c.take_damage(3);
        c.heal(1);
        assert_eq!(c.current_health(), 2);
        c.heal(u32::MAX);
        assert_eq!(c.current_health(), 4);

        c.take_damage(4);
        c.drain_events();
        c.heal(2);
        assert!(c.is_dead());
        assert_eq!(c.current_health(), 0);
        assert!(c.events().is_empty());
    }

    #[test]
    fn test_missing_references_reported_at_start() {
        let mut c = controller(2);
        let faults: Vec<_> = c.drain_events().into_iter().filter(|e| e.is_fault()).collect();
        assert!(faults.contains(&VitalityEvent::Fault(VitalityError::ConfigurationMissing(
            Collaborator::Appearance
        ))));
        assert!(faults.contains(&VitalityEvent::Fault(VitalityError::ConfigurationMissing(
            Collaborator::StatusIndicators
        ))));
    }

    #[test]
    fn test_respawn_without_any_references() {
        let mut c = controller(2);
        c.take_damage(2);
        c.enter_hazard();
        c.drain_events();

        c.respawn();
        assert_eq!(c.current_health(), 2);
        assert!(!c.is_dead());
        assert!(!c.is_in_hazard());

        let events = c.drain_events();
        assert!(events.contains(&VitalityEvent::Fault(
            VitalityError::RespawnPositionUnavailable {
                scene_name: "SpawnPoint".to_string()
            }
        )));
        assert_eq!(events.last(), Some(&VitalityEvent::Respawned { position: None }));
    }
}
