//! # Surface Classifier
//!
//! Finds every replaceable voxel of a chunk that touches open cave space and
//! records a [`Context`] for it.
//!
//! ## Scan
//!
//! Each column is scanned from the world floor up to (excluding) its highest
//! solid voxel. For a replaceable voxel the six neighbours are inspected:
//!
//! - a sky-exposed neighbour disqualifies the voxel: it is surface terrain
//! - an empty or liquid neighbour exposes that face
//! - a soft neighbour (rail, crop, flower, fence) exposes that face when it
//!   touches empty or liquid space itself
//!
//! Neighbours outside the world's height range are ignored.

use crate::config::DecoratorConfig;
use crate::context::{Context, ContextMap, MIN_OPEN_DEPTH};
use crate::direction::{Direction, FaceSet};
use crate::world::{ChunkCoord, VoxelPos, VoxelStore};

/// Builds the context map of a chunk.
pub struct SurfaceClassifier<'a> {
    config: &'a DecoratorConfig,
}

impl<'a> SurfaceClassifier<'a> {
    /// Creates a classifier using the replaceable set of `config`.
    #[must_use]
    pub const fn new(config: &'a DecoratorConfig) -> Self {
        Self { config }
    }

    /// Classifies every cave-facing voxel of `chunk`.
    pub fn classify<S: VoxelStore + ?Sized>(&self, store: &S, chunk: ChunkCoord) -> ContextMap {
        let mut contexts = ContextMap::new();
        let lo = store.min_height();
        for (x, z) in chunk.columns() {
            let hi = store.highest_solid_y(x, z).min(store.max_height());
            for y in lo..hi {
                let pos = VoxelPos::new(x, y, z);
                if let Some(context) = self.inspect(store, pos) {
                    contexts.insert(pos, context);
                }
            }
        }
        contexts
    }

    /// Classifies a single voxel. `None` if it is not a cave surface.
    pub fn inspect<S: VoxelStore + ?Sized>(&self, store: &S, pos: VoxelPos) -> Option<Context> {
        if !self.config.is_replaceable(store.get(pos).material()) {
            return None;
        }
        let faces = exposed_faces(store, pos)?;
        if faces.is_empty() {
            return None;
        }
        let above = if faces.contains(Direction::Up) {
            cavity_depth(store, pos, Direction::Up)
        } else {
            0
        };
        let floor = faces.contains(Direction::Up) && above >= MIN_OPEN_DEPTH;
        let below = if !floor && faces.contains(Direction::Down) {
            cavity_depth(store, pos, Direction::Down)
        } else {
            0
        };
        Some(Context::from_scan(faces, above, below))
    }
}

/// Faces of `pos` touching open cave space. `None` if any neighbour sees
/// the sky.
pub fn exposed_faces<S: VoxelStore + ?Sized>(store: &S, pos: VoxelPos) -> Option<FaceSet> {
    let mut faces = FaceSet::EMPTY;
    for direction in Direction::ALL {
        let neighbor = pos.neighbor(direction);
        if !store.in_height_range(neighbor.y) {
            continue;
        }
        let state = store.get(neighbor);
        if state.is_sky_exposed() {
            return None;
        }
        if state.is_empty() || state.is_liquid() {
            faces.insert(direction);
        } else if state.is_soft() && touches_open_space(store, neighbor) {
            faces.insert(direction);
        }
    }
    Some(faces)
}

fn touches_open_space<S: VoxelStore + ?Sized>(store: &S, pos: VoxelPos) -> bool {
    Direction::ALL.into_iter().any(|direction| {
        let neighbor = pos.neighbor(direction);
        if !store.in_height_range(neighbor.y) {
            return false;
        }
        let state = store.get(neighbor);
        state.is_empty() || state.is_liquid()
    })
}

/// Consecutive empty, liquid or soft voxels from `pos` (exclusive) in
/// `direction`, stopping at the world's height bounds.
pub fn cavity_depth<S: VoxelStore + ?Sized>(store: &S, pos: VoxelPos, direction: Direction) -> u32 {
    let mut depth = 0;
    let mut cursor = pos.neighbor(direction);
    while store.in_height_range(cursor.y) && store.get(cursor).is_inside() {
        depth += 1;
        cursor = cursor.neighbor(direction);
    }
    depth
}
