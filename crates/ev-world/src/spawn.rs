//! Session-start obstacle scatter.

use rand::Rng;
use tracing::info;

use ev_core::{EntityId, ObstacleConfig, Vec3};

use crate::{Shape, Tag, World, WorldResult};

/// Spawn `config.count` static cubes tagged [`Tag::Obstacle`].
///
/// X and Z are drawn independently and uniformly from `config.spawn_range`;
/// every cube centre sits at `config.spawn_height`.  Overlapping cubes are
/// allowed.  Returns the new ids in spawn order.
pub fn spawn_obstacles<R: Rng>(
    world:  &mut World,
    config: &ObstacleConfig,
    rng:    &mut R,
) -> WorldResult<Vec<EntityId>> {
    config.validate()?;

    let (lo, hi) = config.spawn_range;
    let shape = Shape::cube(config.cube_size);

    let ids = (0..config.count)
        .map(|_| {
            let x = rng.gen_range(lo..hi);
            let z = rng.gen_range(lo..hi);
            world.spawn_static(Vec3::new(x, config.spawn_height, z), shape, Tag::Obstacle)
        })
        .collect::<WorldResult<Vec<EntityId>>>()?;

    info!(
        count = ids.len(),
        cube_size = config.cube_size,
        "spawned obstacles in [{lo}, {hi})"
    );
    Ok(ids)
}
