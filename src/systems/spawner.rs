use std::sync::Arc;

use entity_component::{Entity, EntityContainer};
use vek::Vec2;

use crate::{
    components::{ActorType, Position, TimeToLive, Velocity},
    prelude::ArcRwLock,
};

use super::System;

const ENEMY_SPEED: f32 = 2.0;
const PROJECTILE_SPEED: f32 = 8.0;
const GOLDEN_ANGLE: f32 = 2.399_963;
const MAX_WAVES_PER_TICK: usize = 8;

/// Spawns an enemy on the rim of the arena and fires a projectile from the player at regular
/// intervals.
///
/// Enemies are created inactive and activated on the next tick.
pub struct SpawnerSystem {
    entity_container: ArcRwLock<EntityContainer>,
    player: Arc<Entity>,

    spawn_interval_in_secs: f32,
    projectile_ttl_in_secs: f32,
    spawn_radius: f32,

    elapsed_in_secs: f32,
    spawn_count: usize,
    waiting_enemies: Vec<Arc<Entity>>,
}

impl SpawnerSystem {
    pub fn new(
        entity_container: ArcRwLock<EntityContainer>,
        player: Arc<Entity>,
        spawn_interval_in_secs: f32,
        projectile_ttl_in_secs: f32,
        spawn_radius: f32,
    ) -> Self {
        Self {
            entity_container,
            player,

            spawn_interval_in_secs,
            projectile_ttl_in_secs,
            spawn_radius,

            elapsed_in_secs: 0.0,
            spawn_count: 0,
            waiting_enemies: Vec::new(),
        }
    }

    pub fn spawn_count(&self) -> usize {
        self.spawn_count
    }

    fn spawn_wave(&mut self) {
        let angle = self.spawn_count as f32 * GOLDEN_ANGLE;
        let direction = Vec2::new(angle.cos(), angle.sin());

        let player_position = self
            .player
            .get_component_ref::<Position>()
            .map(|position| position.0)
            .unwrap_or_else(Vec2::zero);

        let mut entity_container = self.entity_container.write();

        let enemy = entity_container
            .entity_builder()
            .with_types([ActorType::Enemy])
            .with_component(Position(player_position + direction * self.spawn_radius))
            .with_component(Velocity(-direction * ENEMY_SPEED))
            .inactive()
            .build();

        let projectile = entity_container
            .entity_builder()
            .with_types([ActorType::Projectile])
            .with_component(Position(player_position))
            .with_component(Velocity(direction * PROJECTILE_SPEED))
            .with_component(TimeToLive(self.projectile_ttl_in_secs))
            .build();

        log::debug!(
            "Wave spawned, enemy = {:?}, projectile = {:?}",
            enemy.id(),
            projectile.id()
        );

        self.waiting_enemies.push(enemy);
        self.spawn_count += 1;
    }
}

impl System for SpawnerSystem {
    fn tick(&mut self, delta_time_in_secs: f32) {
        for enemy in self.waiting_enemies.drain(..) {
            enemy.set_active(true);
        }

        self.elapsed_in_secs += delta_time_in_secs;

        let due_wave_count = f32::floor(self.elapsed_in_secs / self.spawn_interval_in_secs);
        let wave_count = if due_wave_count > MAX_WAVES_PER_TICK as f32 {
            log::warn!(
                "Spawner is falling behind, due waves = {}, spawned waves = {}",
                due_wave_count,
                MAX_WAVES_PER_TICK
            );
            self.elapsed_in_secs = 0.0;

            MAX_WAVES_PER_TICK
        } else {
            self.elapsed_in_secs -= due_wave_count * self.spawn_interval_in_secs;

            due_wave_count as usize
        };

        for _ in 0..wave_count {
            self.spawn_wave();
        }
    }
}
