use std::{
    collections::BTreeMap,
    sync::{Arc, Weak},
};

use super::{
    component_storage::ComponentStorage, Entity, EntityBuilder, EntityGroup, EntityId,
    EntityType, EntityWorldListener, TypeComponent,
};

/// Owns the entities of a world and notifies the registered listeners about them.
pub struct EntityContainer {
    entities: BTreeMap<EntityId, Arc<Entity>>,
    next_entity_id: u64,

    listeners: Vec<Weak<dyn EntityWorldListener>>,
}

impl Default for EntityContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityContainer {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_entity_id: 0,

            listeners: Vec::new(),
        }
    }

    pub fn entity_builder(&mut self) -> EntityBuilder<'_> {
        EntityBuilder::new(self)
    }

    /// Creates a group populated with the current entities of the given types and registers it
    /// as a listener of this container.
    pub fn entity_group<T: EntityType>(
        &mut self,
        types: impl IntoIterator<Item = T>,
    ) -> Arc<EntityGroup<T>> {
        let types = types.into_iter().collect::<Vec<T>>();

        let initial_entities = self
            .entities
            .values()
            .filter(|entity| {
                entity
                    .get_component_ref::<TypeComponent<T>>()
                    .is_some_and(|type_component| type_component.is_any_type_of(&types))
            })
            .cloned()
            .collect::<Vec<Arc<Entity>>>();

        log::debug!(
            "Creating entity group, types = {:?}, initial entity count = {}",
            types,
            initial_entities.len()
        );

        let entity_group = Arc::new(EntityGroup::new(&initial_entities, types));
        self.add_world_listener(&entity_group);

        entity_group
    }

    /// The listener is held weakly, it stops receiving notifications once it is dropped.
    pub fn add_world_listener<ListenerType>(&mut self, listener: &Arc<ListenerType>)
    where
        ListenerType: EntityWorldListener + 'static,
    {
        let listener = Arc::downgrade(listener) as Weak<dyn EntityWorldListener>;
        self.listeners.push(listener);
    }

    pub(super) fn add_entity(
        &mut self,
        components: ComponentStorage,
        is_active: bool,
    ) -> Arc<Entity> {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;

        let entity = Arc::new(Entity::new(id, is_active, components));
        self.entities.insert(id, entity.clone());

        log::trace!("Entity added, id = {:?}", id);

        self.notify_listeners(|listener| listener.on_entity_added(&entity));

        entity
    }

    pub fn remove_entity(&mut self, entity_id: &EntityId) -> bool {
        if let Some(entity) = self.entities.remove(entity_id) {
            log::trace!("Entity removed, id = {:?}", entity_id);

            self.notify_listeners(|listener| listener.on_entity_removed(&entity));

            true
        } else {
            false
        }
    }

    pub fn entity(&self, entity_id: &EntityId) -> Option<Arc<Entity>> {
        self.entities.get(entity_id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entity>> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn notify_listeners(&mut self, f: impl Fn(&dyn EntityWorldListener)) {
        let listener_count = self.listeners.len();

        self.listeners.retain(|listener| {
            if let Some(listener) = listener.upgrade() {
                f(listener.as_ref());

                true
            } else {
                false
            }
        });

        if listener_count != self.listeners.len() {
            log::debug!(
                "Dropped world listeners removed, count = {}",
                listener_count - self.listeners.len()
            );
        }
    }
}
