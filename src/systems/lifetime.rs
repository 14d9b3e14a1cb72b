use std::sync::Arc;

use entity_component::{EntityContainer, EntityGroup};

use crate::{
    components::{ActorType, Position, TimeToLive},
    prelude::ArcRwLock,
};

use super::System;

/// Despawns expired projectiles and every actor that left the arena.
///
/// Entities are removed from the container while the groups are iterated, the groups pick the
/// removals up on their next iteration.
pub struct LifetimeSystem {
    entity_container: ArcRwLock<EntityContainer>,
    projectiles: Arc<EntityGroup<ActorType>>,
    actors: Arc<EntityGroup<ActorType>>,

    arena_half_extent: f32,
}

impl LifetimeSystem {
    pub fn new(entity_container: ArcRwLock<EntityContainer>, arena_half_extent: f32) -> Self {
        let (projectiles, actors) = {
            let mut entity_container = entity_container.write();
            (
                entity_container.entity_group([ActorType::Projectile]),
                entity_container.entity_group([ActorType::Enemy, ActorType::Projectile]),
            )
        };

        Self {
            entity_container,
            projectiles,
            actors,

            arena_half_extent,
        }
    }
}

impl System for LifetimeSystem {
    fn tick(&mut self, delta_time_in_secs: f32) {
        let entity_container = &self.entity_container;

        self.projectiles.for_each(|projectile| {
            let mut is_expired = false;
            projectile.change_component(|time_to_live: &mut TimeToLive| {
                time_to_live.0 -= delta_time_in_secs;
                is_expired = time_to_live.0 <= 0.0;
            });

            if is_expired {
                log::trace!("Projectile expired, id = {:?}", projectile.id());
                entity_container.write().remove_entity(&projectile.id());
            }
        });

        let arena_half_extent = self.arena_half_extent;
        self.actors.for_each_filtered(
            |actor| {
                actor
                    .get_component_ref::<Position>()
                    .is_some_and(|position| {
                        position.0.x.abs() > arena_half_extent
                            || position.0.y.abs() > arena_half_extent
                    })
            },
            |actor| {
                log::trace!("Actor left the arena, id = {:?}", actor.id());
                entity_container.write().remove_entity(&actor.id());
            },
        );
    }
}
