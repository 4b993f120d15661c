//! Status HUD driven by a vitality controller

use void_hud::prelude::*;
use void_vitality::prelude::*;

fn controller(hud: &StatusHud, max_health: u32) -> VitalityController {
    VitalityController::new(
        VitalityConfig::default().with_max_health(max_health),
        Collaborators::new().with_display(hud.clone()),
        SpawnChain::new(SpawnRegistry::new()),
    )
    .unwrap()
}

#[test]
fn test_icons_track_health() {
    let hud = StatusHud::new(HealthIcons::new(3), Some(DeathPanel::default()));
    let mut vitality = controller(&hud, 3);
    assert_eq!(hud.shown_icons(), 3);

    vitality.take_damage(2);
    assert_eq!(hud.shown_icons(), 1);

    vitality.heal(1);
    assert_eq!(hud.shown_icons(), 2);
}

#[test]
fn test_death_panel_cycle() {
    let hud = StatusHud::new(HealthIcons::new(2), Some(DeathPanel::default()));
    let mut vitality = controller(&hud, 2);
    assert!(!hud.death_panel_visible());

    vitality.take_damage(1);
    assert!(!hud.death_panel_visible());
    vitality.take_damage(1);
    assert!(hud.death_panel_visible());
    assert_eq!(hud.shown_icons(), 0);

    vitality.respawn();
    assert!(!hud.death_panel_visible());
    assert_eq!(hud.shown_icons(), 2);
}

#[test]
fn test_hud_without_panel_reports_fault() {
    let hud = StatusHud::new(HealthIcons::new(2), None);
    let mut vitality = controller(&hud, 2);
    vitality.drain_events();

    vitality.take_damage(2);
    let missing = VitalityEvent::Fault(VitalityError::ConfigurationMissing(Collaborator::DeathPanel));
    assert!(vitality.drain_events().contains(&missing));

    // Attaching the panel later makes the next respawn hide it cleanly
    hud.set_death_panel(Some(DeathPanel::default()));
    vitality.respawn();
    assert!(!vitality.drain_events().contains(&missing));
}

#[test]
fn test_respawn_button_pressed_twice() {
    let hud = StatusHud::new(HealthIcons::new(3), Some(DeathPanel::default()));
    let mut vitality = controller(&hud, 3);
    vitality.take_damage(3);
    assert!(hud.death_panel_visible());
    vitality.drain_events();

    hud.press_respawn(&mut vitality);
    hud.press_respawn(&mut vitality);

    assert_eq!(vitality.current_health(), 3);
    assert!(!vitality.is_dead());
    assert!(!hud.death_panel_visible());
    assert_eq!(hud.shown_icons(), 3);

    let respawns = vitality
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, VitalityEvent::Respawned { .. }))
        .count();
    assert_eq!(respawns, 2);
}

#[test]
fn test_respawn_shortcut_key() {
    let hud = StatusHud::new(
        HealthIcons::new(2),
        Some(DeathPanel::default().with_button("Try again", "Enter")),
    );
    let mut vitality = controller(&hud, 2);
    vitality.take_damage(2);

    assert!(!hud.handle_key("R", &mut vitality));
    assert!(vitality.is_dead());
    assert!(hud.death_panel_visible());

    assert!(hud.handle_key("enter", &mut vitality));
    assert_eq!(vitality.current_health(), 2);
    assert!(!hud.death_panel_visible());
}

#[test]
fn test_shortcut_ignored_without_panel() {
    let hud = StatusHud::new(HealthIcons::new(2), None);
    let mut vitality = controller(&hud, 2);
    vitality.take_damage(2);

    assert!(!hud.handle_key("R", &mut vitality));
    assert!(vitality.is_dead());
}
