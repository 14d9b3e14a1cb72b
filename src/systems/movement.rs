use std::sync::Arc;

use entity_component::EntityGroup;

use crate::components::{ActorType, Position, Velocity};

use super::System;

pub struct MovementSystem {
    moving_entities: Arc<EntityGroup<ActorType>>,
}

impl MovementSystem {
    pub fn new(moving_entities: Arc<EntityGroup<ActorType>>) -> Self {
        Self { moving_entities }
    }
}

impl System for MovementSystem {
    fn tick(&mut self, delta_time_in_secs: f32) {
        self.moving_entities.for_each(|entity| {
            let velocity = if let Some(component) = entity.get_component_ref::<Velocity>() {
                component.0
            } else {
                return;
            };

            entity.change_component(|position: &mut Position| {
                position.0 += velocity * delta_time_in_secs;
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use entity_component::EntityContainer;
    use vek::Vec2;

    use super::*;

    #[test]
    fn active_entities_are_moved() {
        let mut entity_container = EntityContainer::new();

        let moving_entities =
            entity_container.entity_group([ActorType::Enemy, ActorType::Projectile]);
        let mut movement_system = MovementSystem::new(moving_entities);

        let enemy = entity_container
            .entity_builder()
            .with_types([ActorType::Enemy])
            .with_component(Position(Vec2::new(0.0, 0.0)))
            .with_component(Velocity(Vec2::new(2.0, -4.0)))
            .build();
        let sleeping_enemy = entity_container
            .entity_builder()
            .with_types([ActorType::Enemy])
            .with_component(Position(Vec2::new(1.0, 1.0)))
            .with_component(Velocity(Vec2::new(2.0, 2.0)))
            .inactive()
            .build();
        let player = entity_container
            .entity_builder()
            .with_types([ActorType::Player])
            .with_component(Position(Vec2::new(0.0, 0.0)))
            .with_component(Velocity(Vec2::new(1.0, 1.0)))
            .build();

        movement_system.tick(0.5);

        assert_eq!(
            *enemy.get_component_ref::<Position>().unwrap(),
            Position(Vec2::new(1.0, -2.0))
        );
        assert_eq!(
            *sleeping_enemy.get_component_ref::<Position>().unwrap(),
            Position(Vec2::new(1.0, 1.0))
        );
        assert_eq!(
            *player.get_component_ref::<Position>().unwrap(),
            Position(Vec2::new(0.0, 0.0))
        );
    }
}
