//! In-memory world: entity table plus occlusion raycasts.
//!
//! # Data layout
//!
//! Entities live in a single `Vec<Entity>` indexed by `EntityId`.  They come
//! in two kinds:
//!
//! - **static** — obstacles.  Never move after spawning; their bounding boxes
//!   are indexed in an R-tree (via `rstar`) so a raycast only narrow-phases
//!   the colliders whose boxes overlap the ray segment's box.
//! - **dynamic** — the agent and the pursuer.  Movable; few in number, so
//!   they are tested linearly on every raycast.
//!
//! # Raycast semantics
//!
//! The first collider entered within `max_distance` wins; exact ties go to
//! the lower `EntityId` so results never depend on R-tree iteration order.

use rstar::{RTree, RTreeObject, AABB};

use ev_core::geom::yaw_towards;
use ev_core::{EntityId, Vec3};

use crate::{OcclusionQuery, RayHit, Scene, Shape, Tag, WorldError, WorldResult};

// ── R-tree collider entry ─────────────────────────────────────────────────────

/// Entry stored in the static-collider index: an entity's bounding box.
#[derive(Clone)]
struct ColliderEntry {
    envelope: AABB<[f32; 3]>,
    id:       EntityId,
}

impl RTreeObject for ColliderEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// One row of the entity table.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position:  Vec3,
    /// Heading about +Y in radians; zero faces +Z.
    pub yaw:       f32,
    pub collider:  Option<Shape>,
    pub tag:       Tag,
    pub is_static: bool,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Entity table implementing [`OcclusionQuery`] and [`Scene`].
pub struct World {
    entities:   Vec<Entity>,
    dynamic:    Vec<EntityId>,
    static_idx: RTree<ColliderEntry>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities:   Vec::new(),
            dynamic:    Vec::new(),
            static_idx: RTree::new(),
        }
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Add an immovable collider (an obstacle, usually) and index it.
    pub fn spawn_static(&mut self, position: Vec3, shape: Shape, tag: Tag) -> WorldResult<EntityId> {
        let id = id_for(self.entities.len())?;
        let (min, max) = shape.bounds(position);
        self.static_idx.insert(ColliderEntry {
            envelope: AABB::from_corners(min.to_array(), max.to_array()),
            id,
        });
        self.entities.push(Entity {
            position,
            yaw: 0.0,
            collider: Some(shape),
            tag,
            is_static: true,
        });
        Ok(id)
    }

    /// Add a movable entity.  `collider` may be `None` for pure markers.
    pub fn spawn_dynamic(
        &mut self,
        position: Vec3,
        collider: Option<Shape>,
        tag: Tag,
    ) -> WorldResult<EntityId> {
        let id = id_for(self.entities.len())?;
        self.entities.push(Entity { position, yaw: 0.0, collider, tag, is_static: false });
        self.dynamic.push(id);
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn static_count(&self) -> usize {
        self.static_idx.size()
    }

    #[inline]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Ids of every entity carrying `tag`, ascending.
    pub fn tagged(&self, tag: Tag) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.tag == tag)
            .filter_map(|(i, _)| EntityId::try_from(i).ok())
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move a dynamic entity.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> WorldResult<()> {
        let entity = self.entity_mut(id)?;
        if entity.is_static {
            return Err(WorldError::StaticEntity(id));
        }
        entity.position = position;
        Ok(())
    }

    /// Turn `id` about +Y to face `target`.  A target directly above or
    /// below leaves the heading unchanged.
    pub fn face_towards(&mut self, id: EntityId, target: Vec3) -> WorldResult<()> {
        let entity = self.entity_mut(id)?;
        if let Some(yaw) = yaw_towards(entity.position, target) {
            entity.yaw = yaw;
        }
        Ok(())
    }

    fn entity_mut(&mut self, id: EntityId) -> WorldResult<&mut Entity> {
        self.entities
            .get_mut(id.index())
            .ok_or(WorldError::EntityNotFound(id))
    }
}

/// Id of the entity stored at table row `row`.
pub(crate) fn id_for(row: usize) -> WorldResult<EntityId> {
    EntityId::try_from(row).map_err(|_| WorldError::TooManyEntities(row))
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl OcclusionQuery for World {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        if !(max_distance > 0.0) {
            return None;
        }

        // Broad phase: statics whose boxes overlap the segment's box.
        let end = origin + direction * max_distance;
        let segment_box = AABB::from_corners(origin.min(end).to_array(), origin.max(end).to_array());
        let statics = self
            .static_idx
            .locate_in_envelope_intersecting(&segment_box)
            .map(|entry| entry.id);

        let mut best: Option<(f32, EntityId)> = None;
        for id in statics.chain(self.dynamic.iter().copied()) {
            let entity = &self.entities[id.index()];
            let Some(shape) = entity.collider else { continue };
            let Some(t) = shape.ray_entry(entity.position, origin, direction) else { continue };
            if t > max_distance {
                continue;
            }
            let closer = match best {
                None            => true,
                Some((bt, bid)) => t < bt || (t == bt && id < bid),
            };
            if closer {
                best = Some((t, id));
            }
        }

        best.map(|(t, id)| RayHit {
            entity:   id,
            point:    origin + direction * t,
            distance: t,
            tag:      self.entities[id.index()].tag,
        })
    }
}

impl Scene for World {
    #[inline]
    fn position(&self, entity: EntityId) -> Option<Vec3> {
        self.entity(entity).map(|e| e.position)
    }
}
