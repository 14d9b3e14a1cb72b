use std::sync::Arc;

use entity_component::EntityGroup;
use parking_lot::Mutex;

use crate::components::ActorType;

use super::System;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ArenaStats {
    pub active_enemies: usize,
    pub active_projectiles: usize,
    pub report_count: usize,
}

/// Counts the active actors and logs them once per reporting interval.
pub struct StatsSystem {
    enemies: Arc<EntityGroup<ActorType>>,
    projectiles: Arc<EntityGroup<ActorType>>,

    report_interval_in_secs: f32,
    elapsed_in_secs: f32,

    stats: Arc<Mutex<ArenaStats>>,
}

impl StatsSystem {
    pub fn new(
        enemies: Arc<EntityGroup<ActorType>>,
        projectiles: Arc<EntityGroup<ActorType>>,
        report_interval_in_secs: f32,
    ) -> Self {
        Self {
            enemies,
            projectiles,

            report_interval_in_secs,
            elapsed_in_secs: 0.0,

            stats: Arc::new(Mutex::new(ArenaStats::default())),
        }
    }

    /// Shared view of the latest report.
    pub fn stats(&self) -> Arc<Mutex<ArenaStats>> {
        self.stats.clone()
    }

    fn report(&mut self) {
        let mut active_enemies = 0;
        self.enemies.for_each(|_| active_enemies += 1);

        let mut active_projectiles = 0;
        self.projectiles.for_each(|_| active_projectiles += 1);

        let mut stats = self.stats.lock();
        stats.active_enemies = active_enemies;
        stats.active_projectiles = active_projectiles;
        stats.report_count += 1;

        log::info!(
            "Arena stats, active enemies = {}, active projectiles = {}",
            active_enemies,
            active_projectiles
        );
    }
}

impl System for StatsSystem {
    fn tick(&mut self, delta_time_in_secs: f32) {
        self.elapsed_in_secs += delta_time_in_secs;

        if self.elapsed_in_secs >= self.report_interval_in_secs {
            self.elapsed_in_secs -= self.report_interval_in_secs;
            self.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use entity_component::EntityContainer;

    use super::*;

    #[test]
    fn reports_active_counts() {
        let mut entity_container = EntityContainer::new();

        let enemies = entity_container.entity_group([ActorType::Enemy]);
        let projectiles = entity_container.entity_group([ActorType::Projectile]);

        let mut stats_system = StatsSystem::new(enemies, projectiles, 1.0);
        let stats = stats_system.stats();

        entity_container
            .entity_builder()
            .with_types([ActorType::Enemy])
            .build();
        entity_container
            .entity_builder()
            .with_types([ActorType::Enemy])
            .inactive()
            .build();
        entity_container
            .entity_builder()
            .with_types([ActorType::Projectile])
            .build();

        stats_system.tick(0.5);
        assert_eq!(*stats.lock(), ArenaStats::default());

        stats_system.tick(0.5);
        assert_eq!(
            *stats.lock(),
            ArenaStats {
                active_enemies: 1,
                active_projectiles: 1,
                report_count: 1,
            }
        );
    }

    #[test]
    fn leftover_time_carries_over_to_the_next_report() {
        let mut entity_container = EntityContainer::new();

        let enemies = entity_container.entity_group([ActorType::Enemy]);
        let projectiles = entity_container.entity_group([ActorType::Projectile]);

        let mut stats_system = StatsSystem::new(enemies, projectiles, 1.0);
        let stats = stats_system.stats();

        stats_system.tick(0.75);
        assert_eq!(stats.lock().report_count, 0);

        stats_system.tick(0.75);
        assert_eq!(stats.lock().report_count, 1);

        // 0.5 left over from the previous report
        stats_system.tick(0.75);
        assert_eq!(stats.lock().report_count, 2);
    }
}
