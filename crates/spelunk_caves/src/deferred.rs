//! # Deferred Actions
//!
//! Side effects scheduled while decorating and run once the whole chunk has
//! been decorated: procedural growth that may fail and creature spawns.
//!
//! Actions run strictly in insertion order, one at a time.

use crate::material::Material;
use crate::scope::WriteScope;
use crate::world::{CreatureKind, PlantKind, VoxelPos, WorldAccess};

/// A side effect postponed until decoration has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Ask the host to grow a plant at `at`; place `fallback` if it refuses.
    GrowPlant {
        /// Plant to grow.
        kind: PlantKind,
        /// Root voxel.
        at: VoxelPos,
        /// Single block placed when growth fails.
        fallback: Material,
    },
    /// Spawn a creature at `at`.
    SpawnCreature {
        /// Creature to spawn.
        kind: CreatureKind,
        /// Spawn voxel.
        at: VoxelPos,
    },
}

/// What draining a queue did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Plants the host grew.
    pub grown: u32,
    /// Plants replaced by their fallback block.
    pub fallbacks: u32,
    /// Creatures spawned.
    pub spawned: u32,
}

/// FIFO of deferred actions for one chunk.
#[derive(Clone, Debug, Default)]
pub struct DeferredActionQueue {
    actions: Vec<DeferredAction>,
}

impl DeferredActionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    pub fn push(&mut self, action: DeferredAction) {
        self.actions.push(action);
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Pending actions in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &DeferredAction> {
        self.actions.iter()
    }

    /// Runs every action in insertion order, consuming the queue.
    ///
    /// Fallback blocks are written through `scope`.
    pub fn drain<W: WorldAccess + ?Sized>(
        self,
        world: &mut W,
        scope: &mut WriteScope<'_>,
    ) -> DrainReport {
        let mut report = DrainReport::default();
        for action in self.actions {
            match action {
                DeferredAction::GrowPlant { kind, at, fallback } => {
                    if world.grow_procedural_plant(kind, at) {
                        report.grown += 1;
                    } else {
                        tracing::trace!(
                            x = at.x,
                            y = at.y,
                            z = at.z,
                            ?kind,
                            "growth failed, placing fallback"
                        );
                        scope.set(world, at, fallback);
                        report.fallbacks += 1;
                    }
                }
                DeferredAction::SpawnCreature { kind, at } => {
                    world.spawn_creature(kind, at);
                    report.spawned += 1;
                }
            }
        }
        report
    }
}
