//! Walks a character through a poison fog until it dies, then respawns it.
//!
//! Run with `RUST_LOG=debug cargo run -p void_triggers --example fog_walk`.

use void_hud::prelude::*;
use void_triggers::prelude::*;
use void_vitality::prelude::*;

/// Body that just remembers where it is
#[derive(Default)]
struct Puppet {
    position: [f32; 3],
}

impl EntityBody for Puppet {
    fn set_position(&mut self, position: [f32; 3]) {
        log::info!("Puppet teleported from {:?} to {:?}", self.position, position);
        self.position = position;
    }

    fn set_active(&mut self, active: bool) {
        log::debug!("Puppet active: {}", active);
    }
}

struct Tint;

impl AppearanceSink for Tint {
    fn set_color(&mut self, color: Color) {
        log::trace!("Tint {:?}", color.to_array());
    }
}

struct Walker;

impl MovementControl for Walker {
    fn set_enabled(&mut self, enabled: bool) {
        log::debug!("Walker enabled: {}", enabled);
    }

    fn reset(&mut self) {
        log::debug!("Walker reset");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = VitalityConfig::default().with_max_health(3);
    let hud = StatusHud::new(
        HealthIcons::new(config.max_health as usize),
        Some(DeathPanel::default()),
    );

    let registry = SpawnRegistry::global();
    registry.register(SpawnPoint::new("camp", [0.0, 0.0, 0.0]));

    let locator = SpawnChain::from_config(&config, registry);
    let collaborators = Collaborators::new()
        .with_appearance(Tint)
        .with_display(hud.clone())
        .with_controller(Walker)
        .with_body(Puppet::default());
    let mut vitality = VitalityController::new(config, collaborators, locator)?;

    let mut fog =
        FogTracker::new().with_zone(FogZone::cuboid("bog", [15.0, 0.0, 0.0], [20.0, 4.0, 20.0]));

    let dt = 1.0 / 30.0;
    let mut x = 0.0;
    let mut frame = 0u32;
    while !vitality.is_dead() && frame < 10_000 {
        fog.update([x, 0.0, 0.0], &mut vitality);
        vitality.update(dt);
        x += 2.0 * dt;
        frame += 1;

        for event in vitality.drain_events() {
            log::info!("frame {}: {:?}", frame, event);
        }
    }

    log::info!(
        "Died after {} frames, hearts shown: {}, panel visible: {}",
        frame,
        hud.shown_icons(),
        hud.death_panel_visible()
    );

    // Player hits the panel's shortcut
    hud.handle_key("R", &mut vitality);
    fog.reset();
    for event in vitality.drain_events() {
        log::info!("{:?}", event);
    }
    log::info!(
        "Respawned with {}/{} health, panel visible: {}",
        vitality.current_health(),
        vitality.max_health(),
        hud.death_panel_visible()
    );

    Ok(())
}
