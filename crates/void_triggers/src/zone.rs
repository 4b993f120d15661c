//! Fog zones and overlap tracking

use serde::{Deserialize, Serialize};
use void_vitality::VitalityController;

/// Anything that can be told it entered or left a hazard
pub trait HazardReceiver {
    fn enter_hazard(&mut self);
    fn exit_hazard(&mut self);
}

impl HazardReceiver for VitalityController {
    fn enter_hazard(&mut self) {
        VitalityController::enter_hazard(self);
    }

    fn exit_hazard(&mut self) {
        VitalityController::exit_hazard(self);
    }
}

/// Extent of a fog zone around its centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum FogShape {
    /// Axis-aligned; `size` is the full width, height and depth
    Cuboid { size: [f32; 3] },
    Sphere { radius: f32 },
}

/// A region of poison fog placed in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FogZone {
    pub name: String,
    pub shape: FogShape,
    /// World position of the zone centre
    pub center: [f32; 3],
    /// Inactive zones are ignored
    pub enabled: bool,
}

impl FogZone {
    pub fn new(name: impl Into<String>, shape: FogShape, center: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            shape,
            center,
            enabled: true,
        }
    }

    /// Spherical cloud of `radius` around `center`
    pub fn sphere(name: impl Into<String>, center: [f32; 3], radius: f32) -> Self {
        Self::new(name, FogShape::Sphere { radius }, center)
    }

    /// Box-shaped fog bank, `size` edge to edge
    pub fn cuboid(name: impl Into<String>, center: [f32; 3], size: [f32; 3]) -> Self {
        Self::new(name, FogShape::Cuboid { size }, center)
    }

    /// Whether `point` is in the fog. Surfaces count as inside.
    pub fn contains(&self, point: [f32; 3]) -> bool {
        if !self.enabled {
            return false;
        }

        let offset = [
            point[0] - self.center[0],
            point[1] - self.center[1],
            point[2] - self.center[2],
        ];
        match self.shape {
            FogShape::Cuboid { size } => offset
                .iter()
                .zip(size)
                .all(|(d, extent)| d.abs() * 2.0 <= extent),
            FogShape::Sphere { radius } => {
                offset.iter().map(|d| d * d).sum::<f32>() <= radius * radius
            }
        }
    }
}

/// Edge reported by [`FogTracker::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FogTransition {
    Entered,
    Exited,
}

/// Tracks whether one entity is inside any fog zone
#[derive(Debug, Clone, Default)]
pub struct FogTracker {
    zones: Vec<FogZone>,
    inside: bool,
}

impl FogTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, zone: FogZone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn add_zone(&mut self, zone: FogZone) {
        self.zones.push(zone);
    }

    /// Remove a zone by name. Takes effect on the next update.
    pub fn remove_zone(&mut self, name: &str) -> Option<FogZone> {
        let index = self.zones.iter().position(|z| z.name == name)?;
        Some(self.zones.remove(index))
    }

    pub fn zone_mut(&mut self, name: &str) -> Option<&mut FogZone> {
        self.zones.iter_mut().find(|z| z.name == name)
    }

    pub fn zones(&self) -> &[FogZone] {
        &self.zones
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Check `position` against every zone and notify `receiver` on a change.
    ///
    /// Overlapping zones count as one region: moving from one into another
    /// does not produce an exit/enter pair.
    pub fn update(
        &mut self,
        position: [f32; 3],
        receiver: &mut impl HazardReceiver,
    ) -> Option<FogTransition> {
        let now_inside = self.zones.iter().any(|zone| zone.contains(position));

        let transition = match (self.inside, now_inside) {
            (false, true) => {
                log::debug!("Entered fog at {:?}", position);
                receiver.enter_hazard();
                Some(FogTransition::Entered)
            }
            (true, false) => {
                log::debug!("Left fog at {:?}", position);
                receiver.exit_hazard();
                Some(FogTransition::Exited)
            }
            _ => None,
        };

        self.inside = now_inside;
        transition
    }

    /// Forget the inside flag without notifying (e.g. after a teleport)
    pub fn reset(&mut self) {
        self.inside = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        enters: u32,
        exits: u32,
    }

    impl HazardReceiver for Counter {
        fn enter_hazard(&mut self) {
            self.enters += 1;
        }

        fn exit_hazard(&mut self) {
            self.exits += 1;
        }
    }

    #[test]
    fn test_cuboid_bounds() {
        let bank = FogZone::cuboid("bank", [10.0, 0.0, 0.0], [4.0, 2.0, 4.0]);
        assert!(bank.contains([10.0, 0.0, 0.0]));
        assert!(bank.contains([12.0, 1.0, -2.0]));
        assert!(!bank.contains([10.0, 1.5, 0.0]));
        assert!(!bank.contains([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_sphere_bounds() {
        let cloud = FogZone::sphere("cloud", [0.0, 5.0, 0.0], 2.0);
        assert!(cloud.contains([0.0, 7.0, 0.0]));
        assert!(cloud.contains([1.0, 6.0, 1.0]));
        assert!(!cloud.contains([1.5, 6.5, 0.0]));
    }

    #[test]
    fn test_shape_from_json() {
        let zone: FogZone = serde_json::from_str(
            r#"{"name":"marsh","shape":{"shape":"sphere","radius":3.0},"center":[1.0,0.0,0.0],"enabled":true}"#,
        )
        .unwrap();
        assert_eq!(zone.shape, FogShape::Sphere { radius: 3.0 });
        assert!(zone.contains([3.5, 0.0, 0.0]));
    }

    #[test]
    fn test_edges_only() {
        let mut fog = FogTracker::new()
            .with_zone(FogZone::sphere("pool", [5.0, 0.0, 0.0], 2.0));
        let mut counter = Counter::default();

        assert_eq!(fog.update([0.0, 0.0, 0.0], &mut counter), None);
        assert_eq!(fog.update([4.0, 0.0, 0.0], &mut counter), Some(FogTransition::Entered));
        assert_eq!(fog.update([5.0, 0.0, 0.0], &mut counter), None);
        assert_eq!(fog.update([9.0, 0.0, 0.0], &mut counter), Some(FogTransition::Exited));
        assert_eq!(fog.update([9.0, 0.0, 0.0], &mut counter), None);

        assert_eq!(counter.enters, 1);
        assert_eq!(counter.exits, 1);
    }

    #[test]
    fn test_overlapping_zones_are_one_region() {
        let mut fog = FogTracker::new()
            .with_zone(FogZone::cuboid("a", [0.0, 0.0, 0.0], [4.0, 4.0, 4.0]))
            .with_zone(FogZone::cuboid("b", [3.0, 0.0, 0.0], [4.0, 4.0, 4.0]));
        let mut counter = Counter::default();

        fog.update([0.0, 0.0, 0.0], &mut counter);
        fog.update([1.5, 0.0, 0.0], &mut counter);
        fog.update([4.5, 0.0, 0.0], &mut counter);
        assert_eq!((counter.enters, counter.exits), (1, 0));

        fog.update([10.0, 0.0, 0.0], &mut counter);
        assert_eq!((counter.enters, counter.exits), (1, 1));
    }

    #[test]
    fn test_disabled_zone_releases_entity() {
        let mut fog = FogTracker::new()
            .with_zone(FogZone::sphere("vent", [0.0, 0.0, 0.0], 1.0));
        let mut counter = Counter::default();

        fog.update([0.0, 0.0, 0.0], &mut counter);
        fog.zone_mut("vent").unwrap().enabled = false;
        assert_eq!(fog.update([0.0, 0.0, 0.0], &mut counter), Some(FogTransition::Exited));

        assert!(fog.remove_zone("vent").is_some());
        assert!(fog.remove_zone("vent").is_none());
    }
}
