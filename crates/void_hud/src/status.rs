//! Health icons and death panel

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use void_vitality::{Collaborator, Result, StatusDisplaySink, VitalityController, VitalityError};

/// Icon visual style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconStyle {
    /// Icon tint (RGBA)
    pub color: [f32; 4],
    /// Icon size in pixels
    pub size: f32,
    /// Gap between icons
    pub spacing: f32,
    /// Icon image name
    pub image: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            color: [0.9, 0.1, 0.2, 1.0], // Red
            size: 32.0,
            spacing: 6.0,
            image: "heart".to_string(),
        }
    }
}

/// A row of health icons.
///
/// Icon `i` is shown while `i < health`. A slot can be left unassigned
/// (`None`); it is skipped rather than treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthIcons {
    /// Screen position X
    pub x: f32,
    /// Screen position Y
    pub y: f32,
    pub style: IconStyle,
    slots: Vec<Option<bool>>,
}

impl HealthIcons {
    /// Create a row of `count` icons, all shown
    pub fn new(count: usize) -> Self {
        Self::from_slots(vec![Some(true); count])
    }

    /// Create a row from explicit slots (`None` = no icon assigned)
    pub fn from_slots(slots: Vec<Option<bool>>) -> Self {
        Self {
            x: 20.0,
            y: 20.0,
            style: IconStyle::default(),
            slots,
        }
    }

    /// Set position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set style
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the first `count` icons and hide the rest
    pub fn set_active_count(&mut self, count: u32) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Some(shown) = slot {
                *shown = (i as u64) < count as u64;
            }
        }
    }

    /// Whether icon `index` is shown (`None` if the slot is empty or out of range)
    pub fn is_shown(&self, index: usize) -> Option<bool> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of icons currently shown
    pub fn shown_count(&self) -> usize {
        self.slots.iter().filter(|s| **s == Some(true)).count()
    }

    /// Total slots, assigned or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shown icons with their screen position
    pub fn iter_visible(&self) -> impl Iterator<Item = (usize, [f32; 2])> + '_ {
        let step = self.style.size + self.style.spacing;
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Some(true))
            .map(move |(i, _)| (i, [self.x + i as f32 * step, self.y]))
    }
}

/// Panel shown while the character is dead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathPanel {
    /// Headline text
    pub title: String,
    /// Label of the respawn button
    pub button_label: String,
    /// Keyboard shortcut for the button
    pub shortcut: String,
    /// Background color (RGBA)
    pub background_color: [f32; 4],
    /// Whether the panel is on screen
    pub visible: bool,
}

impl Default for DeathPanel {
    fn default() -> Self {
        Self {
            title: "You died".to_string(),
            button_label: "Respawn".to_string(),
            shortcut: "R".to_string(),
            background_color: [0.2, 0.2, 0.2, 0.8],
            visible: false,
        }
    }
}

impl DeathPanel {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_button(mut self, label: impl Into<String>, shortcut: impl Into<String>) -> Self {
        self.button_label = label.into();
        self.shortcut = shortcut.into();
        self
    }

    /// Whether `key` is the respawn shortcut (case-insensitive)
    pub fn is_shortcut(&self, key: &str) -> bool {
        !self.shortcut.is_empty() && self.shortcut.eq_ignore_ascii_case(key)
    }
}

/// Everything the HUD draws for the character status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHudState {
    pub icons: HealthIcons,
    pub death_panel: Option<DeathPanel>,
}

/// Shared status HUD.
///
/// Clones share state: hand one to the vitality controller as its display
/// sink and keep another for the render pass.
#[derive(Debug, Clone)]
pub struct StatusHud {
    state: Arc<RwLock<StatusHudState>>,
}

impl StatusHud {
    pub fn new(icons: HealthIcons, death_panel: Option<DeathPanel>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StatusHudState { icons, death_panel })),
        }
    }

    /// Copy of the current state for drawing
    pub fn snapshot(&self) -> StatusHudState {
        self.state.read().clone()
    }

    /// Number of icons currently shown
    pub fn shown_icons(&self) -> usize {
        self.state.read().icons.shown_count()
    }

    /// Whether the death panel is on screen (`false` if there is none)
    pub fn death_panel_visible(&self) -> bool {
        self.state
            .read()
            .death_panel
            .as_ref()
            .map_or(false, |panel| panel.visible)
    }

    /// Attach or remove the death panel
    pub fn set_death_panel(&self, panel: Option<DeathPanel>) {
        self.state.write().death_panel = panel;
    }

    /// Respawn button clicked. Safe to press repeatedly.
    pub fn press_respawn(&self, vitality: &mut VitalityController) {
        let label = self
            .state
            .read()
            .death_panel
            .as_ref()
            .map(|panel| panel.button_label.clone());
        log::info!("{} pressed", label.as_deref().unwrap_or("Respawn button"));

        // The read guard is gone: respawn() writes back through the sink.
        vitality.respawn();
    }

    /// Route a key press. Returns true if it was the respawn shortcut.
    ///
    /// The shortcut works whether or not the panel is on screen.
    pub fn handle_key(&self, key: &str, vitality: &mut VitalityController) -> bool {
        let matched = self
            .state
            .read()
            .death_panel
            .as_ref()
            .map_or(false, |panel| panel.is_shortcut(key));
        if matched {
            log::debug!("Respawn shortcut '{}' pressed", key);
            vitality.respawn();
        }
        matched
    }
}

impl StatusDisplaySink for StatusHud {
    fn set_active_count(&mut self, count: u32) {
        self.state.write().icons.set_active_count(count);
    }

    fn set_death_panel_visible(&mut self, visible: bool) -> Result<()> {
        match self.state.write().death_panel.as_mut() {
            Some(panel) => {
                panel.visible = visible;
                Ok(())
            }
            None => Err(VitalityError::ConfigurationMissing(Collaborator::DeathPanel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_follow_count() {
        let mut icons = HealthIcons::new(3);
        assert_eq!(icons.shown_count(), 3);

        icons.set_active_count(1);
        assert_eq!(icons.is_shown(0), Some(true));
        assert_eq!(icons.is_shown(1), Some(false));
        assert_eq!(icons.is_shown(2), Some(false));

        icons.set_active_count(10);
        assert_eq!(icons.shown_count(), 3);

        icons.set_active_count(0);
        assert_eq!(icons.shown_count(), 0);
    }

    #[test]
    fn test_empty_slots_skipped() {
        let mut icons = HealthIcons::from_slots(vec![Some(true), None, Some(true)]);
        icons.set_active_count(2);

        assert_eq!(icons.is_shown(0), Some(true));
        assert_eq!(icons.is_shown(1), None);
        assert_eq!(icons.is_shown(2), Some(false));
        assert_eq!(icons.is_shown(7), None);
    }

    #[test]
    fn test_empty_row_ignores_updates() {
        let mut icons = HealthIcons::new(0);
        icons.set_active_count(5);
        assert!(icons.is_empty());
        assert_eq!(icons.shown_count(), 0);
    }

    #[test]
    fn test_visible_positions() {
        let icons = HealthIcons::new(3).with_position(10.0, 5.0);
        let positions: Vec<_> = icons.iter_visible().collect();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], (0, [10.0, 5.0]));
        assert_eq!(positions[2], (2, [10.0 + 2.0 * 38.0, 5.0]));
    }

    #[test]
    fn test_hud_clones_share_state() {
        let hud = StatusHud::new(HealthIcons::new(2), Some(DeathPanel::default()));
        let mut sink = hud.clone();

        sink.set_active_count(1);
        sink.set_death_panel_visible(true).unwrap();

        assert_eq!(hud.shown_icons(), 1);
        assert!(hud.death_panel_visible());
    }

    #[test]
    fn test_shortcut_match() {
        let panel = DeathPanel::default();
        assert!(panel.is_shortcut("R"));
        assert!(panel.is_shortcut("r"));
        assert!(!panel.is_shortcut("Space"));

        let panel = panel.with_button("Try again", "");
        assert!(!panel.is_shortcut(""));
    }

    #[test]
    fn test_missing_panel() {
        let mut hud = StatusHud::new(HealthIcons::new(2), None);
        let err = hud.set_death_panel_visible(false).unwrap_err();
        assert_eq!(err, VitalityError::ConfigurationMissing(Collaborator::DeathPanel));
        assert!(!hud.death_panel_visible());
    }
}
