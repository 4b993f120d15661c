//! Respawn point resolution
//!
//! A respawn position is looked up once, synchronously, when the entity
//! respawns. Sources are tried in a fixed order and the first hit wins:
//!
//! 1. the process-wide [`SpawnRegistry`] (last spawn point registered by the level)
//! 2. the entity's own spawn point (from config, or cached from step 3)
//! 3. a scene lookup by name, whose result is cached into step 2

use crate::config::VitalityConfig;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Default scene object name searched for as a last resort
pub const DEFAULT_SPAWN_POINT_NAME: &str = "SpawnPoint";

/// A named world position entities can respawn at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub name: String,
    pub position: [f32; 3],
}

impl SpawnPoint {
    pub fn new(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Shared "last known spawn point".
///
/// Cloning gives another handle to the same slot. The level (or a checkpoint)
/// registers points; controllers only read. The slot may be empty at any time.
#[derive(Debug, Clone, Default)]
pub struct SpawnRegistry {
    slot: Arc<RwLock<Option<SpawnPoint>>>,
}

static GLOBAL_REGISTRY: OnceLock<SpawnRegistry> = OnceLock::new();

impl SpawnRegistry {
    /// Create a standalone registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> SpawnRegistry {
        GLOBAL_REGISTRY.get_or_init(SpawnRegistry::new).clone()
    }

    /// Register a spawn point, replacing the previous one
    pub fn register(&self, point: SpawnPoint) {
        log::debug!("Spawn point '{}' registered at {:?}", point.name, point.position);
        *self.slot.write() = Some(point);
    }

    /// Forget the current spawn point
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Current spawn point, if any
    pub fn current(&self) -> Option<SpawnPoint> {
        self.slot.read().clone()
    }
}

/// Finds scene objects by name
pub trait SceneLookup {
    fn find(&self, name: &str) -> Option<SpawnPoint>;
}

/// In-memory name to position index
#[derive(Debug, Clone, Default)]
pub struct SceneIndex {
    objects: HashMap<String, [f32; 3]>,
}

impl SceneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, name: impl Into<String>, position: [f32; 3]) -> Self {
        self.insert(name, position);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, position: [f32; 3]) {
        self.objects.insert(name.into(), position);
    }

    pub fn remove(&mut self, name: &str) -> Option<[f32; 3]> {
        self.objects.remove(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneLookup for SceneIndex {
    fn find(&self, name: &str) -> Option<SpawnPoint> {
        self.objects
            .get(name)
            .map(|&position| SpawnPoint::new(name, position))
    }
}

impl<T: SceneLookup + ?Sized> SceneLookup for Arc<T> {
    fn find(&self, name: &str) -> Option<SpawnPoint> {
        (**self).find(name)
    }
}

/// Which source produced a respawn position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnSource {
    Registry,
    Local,
    SceneLookup,
}

/// Resolves where a dead entity comes back
pub trait RespawnLocator {
    /// Find a respawn position, or `None` if every source failed
    fn resolve(&mut self) -> Option<[f32; 3]>;

    /// Scene object name used by the last fallback, for diagnostics
    fn scene_name(&self) -> &str {
        DEFAULT_SPAWN_POINT_NAME
    }
}

/// The standard registry -> local -> scene fallback chain
pub struct SpawnChain {
    registry: SpawnRegistry,
    local: Option<SpawnPoint>,
    scene: Option<Box<dyn SceneLookup>>,
    scene_name: String,
}

impl SpawnChain {
    /// Create a chain reading from `registry`
    pub fn new(registry: SpawnRegistry) -> Self {
        Self {
            registry,
            local: None,
            scene: None,
            scene_name: DEFAULT_SPAWN_POINT_NAME.to_string(),
        }
    }

    /// Create a chain reading from the process-wide registry
    pub fn global() -> Self {
        Self::new(SpawnRegistry::global())
    }

    /// Create a chain with the local spawn point and scene name from `config`
    pub fn from_config(config: &VitalityConfig, registry: SpawnRegistry) -> Self {
        Self {
            registry,
            local: config.spawn_point.clone(),
            scene: None,
            scene_name: config.spawn_point_name.clone(),
        }
    }

    /// Set the entity's own spawn point
    pub fn with_local(mut self, point: SpawnPoint) -> Self {
        self.local = Some(point);
        self
    }

    /// Set the scene used for the name lookup
    pub fn with_scene(mut self, scene: impl SceneLookup + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    /// Set the scene object name to look up
    pub fn with_scene_name(mut self, name: impl Into<String>) -> Self {
        self.scene_name = name.into();
        self
    }

    /// The entity's own spawn point (configured or cached)
    pub fn local(&self) -> Option<&SpawnPoint> {
        self.local.as_ref()
    }

    pub fn set_local(&mut self, point: Option<SpawnPoint>) {
        self.local = point;
    }

    pub fn registry(&self) -> &SpawnRegistry {
        &self.registry
    }

    /// Walk the chain and report which source answered
    pub fn resolve_with_source(&mut self) -> Option<(SpawnPoint, SpawnSource)> {
        if let Some(point) = self.registry.current() {
            log::debug!("Respawn point from registry: '{}'", point.name);
            return Some((point, SpawnSource::Registry));
        }

        if let Some(point) = &self.local {
            log::debug!("Respawn point from local reference: '{}'", point.name);
            return Some((point.clone(), SpawnSource::Local));
        }

        let found = self
            .scene
            .as_ref()
            .and_then(|scene| scene.find(&self.scene_name))?;
        log::debug!("Respawn point found by name: '{}'", found.name);
        self.local = Some(found.clone());
        Some((found, SpawnSource::SceneLookup))
    }
}

impl RespawnLocator for SpawnChain {
    fn resolve(&mut self) -> Option<[f32; 3]> {
        self.resolve_with_source().map(|(point, _)| point.position)
    }

    fn scene_name(&self) -> &str {
        &self.scene_name
    }
}

impl std::fmt::Debug for SpawnChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpawnChain")
            .field("registry", &self.registry)
            .field("local", &self.local)
            .field("scene", &self.scene.is_some())
            .field("scene_name", &self.scene_name)
            .finish()
    }
}
