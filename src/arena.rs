use std::sync::Arc;

use entity_component::{Entity, EntityContainer};
use parking_lot::Mutex;
use vek::Vec2;

use crate::{
    components::{ActorType, Position},
    config::ArenaConfig,
    prelude::{arc_rw_lock_new, ArcRwLock},
    systems::{
        lifetime::LifetimeSystem,
        movement::MovementSystem,
        spawner::SpawnerSystem,
        stats::{ArenaStats, StatsSystem},
        SystemContainer,
    },
};

const STATS_REPORT_INTERVAL_IN_SECS: f32 = 1.0;

pub struct Arena {
    entity_container: ArcRwLock<EntityContainer>,
    player: Arc<Entity>,
    system_container: SystemContainer,
    stats: Arc<Mutex<ArenaStats>>,
}

impl Arena {
    pub fn new(config: &ArenaConfig) -> Self {
        let entity_container = arc_rw_lock_new(EntityContainer::new());

        let player = entity_container
            .write()
            .entity_builder()
            .with_types([ActorType::Player])
            .with_component(Position(Vec2::zero()))
            .build();

        let (moving_entities, enemies, projectiles) = {
            let mut entity_container = entity_container.write();
            (
                entity_container.entity_group([ActorType::Enemy, ActorType::Projectile]),
                entity_container.entity_group([ActorType::Enemy]),
                entity_container.entity_group([ActorType::Projectile]),
            )
        };

        let stats_system = StatsSystem::new(enemies, projectiles, STATS_REPORT_INTERVAL_IN_SECS);
        let stats = stats_system.stats();

        let mut system_container = SystemContainer::new();
        system_container.add_system(SpawnerSystem::new(
            entity_container.clone(),
            player.clone(),
            config.spawn_interval_in_secs,
            config.projectile_ttl_in_secs,
            config.arena_half_extent * 0.9,
        ));
        system_container.add_system(MovementSystem::new(moving_entities));
        system_container.add_system(LifetimeSystem::new(
            entity_container.clone(),
            config.arena_half_extent,
        ));
        system_container.add_system(stats_system);

        log::info!(
            "Arena created, systems = {}, player = {:?}",
            system_container.len(),
            player.id()
        );

        Self {
            entity_container,
            player,
            system_container,
            stats,
        }
    }

    pub fn tick(&mut self, delta_time_in_secs: f32) {
        self.system_container.tick(delta_time_in_secs);
    }

    pub fn entity_container(&self) -> &ArcRwLock<EntityContainer> {
        &self.entity_container
    }

    pub fn player(&self) -> &Arc<Entity> {
        &self.player
    }

    pub fn stats(&self) -> ArenaStats {
        *self.stats.lock()
    }
}
