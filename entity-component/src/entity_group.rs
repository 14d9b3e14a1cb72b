use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::{Entity, EntityType, EntityWorldListener, TypeComponent};

/// A group of entities of particular types.
///
/// The group listens for changes of an entity world and tracks the entities whose
/// [`TypeComponent`] carries at least one of the group's types. Changes reported by the world are
/// queued and merged into the group only when the group is iterated, so iteration order and
/// content never change under a running [`EntityGroup::for_each`] call.
///
/// Entities are referenced weakly, their lifetime is controlled by the world.
pub struct EntityGroup<T: EntityType> {
    types: Vec<T>,
    entities: Mutex<Vec<Weak<Entity>>>,

    to_be_handled_entities: Mutex<PendingEntities>,
}

#[derive(Default)]
struct PendingEntities {
    to_be_added: Vec<Weak<Entity>>,
    to_be_removed: Vec<Weak<Entity>>,
}

impl PendingEntities {
    fn is_empty(&self) -> bool {
        self.to_be_added.is_empty() && self.to_be_removed.is_empty()
    }
}

impl<T: EntityType> EntityGroup<T> {
    /// `initial_entities` is taken as is, the caller is responsible for passing entities of the
    /// given types only. Repeated `types` are stored once.
    pub fn new<'a>(
        initial_entities: impl IntoIterator<Item = &'a Arc<Entity>>,
        types: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut unique_types = Vec::new();
        for entity_type in types {
            if !unique_types.contains(&entity_type) {
                unique_types.push(entity_type);
            }
        }

        Self {
            types: unique_types,
            entities: Mutex::new(initial_entities.into_iter().map(Arc::downgrade).collect()),

            to_be_handled_entities: Mutex::new(PendingEntities::default()),
        }
    }

    pub fn types(&self) -> &[T] {
        &self.types
    }

    /// Calls `action` for every active entity of the group, in the order the entities joined it.
    pub fn for_each(&self, mut action: impl FnMut(&Arc<Entity>)) {
        for entity in self.update().iter().filter_map(Weak::upgrade) {
            if entity.is_active() {
                action(&entity);
            }
        }
    }

    /// Same as [`EntityGroup::for_each`], skipping the entities `filter` rejects.
    ///
    /// `filter` is evaluated before the active flag and must not have side effects.
    pub fn for_each_filtered(
        &self,
        filter: impl Fn(&Entity) -> bool,
        mut action: impl FnMut(&Arc<Entity>),
    ) {
        for entity in self.update().iter().filter_map(Weak::upgrade) {
            if filter(&entity) && entity.is_active() {
                action(&entity);
            }
        }
    }

    /// Membership as of the last iteration, queued changes are not taken into account.
    pub fn contains(&self, entity: &Entity) -> bool {
        self.entities
            .lock()
            .iter()
            .any(|entity_ref| std::ptr::eq(entity_ref.as_ptr(), entity))
    }

    /// Number of entities as of the last iteration, inactive ones included.
    pub fn len(&self) -> usize {
        self.entities.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.lock().is_empty()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.to_be_handled_entities.lock().is_empty()
    }

    fn is_tracked(&self, entity: &Entity) -> bool {
        entity
            .get_component_ref::<TypeComponent<T>>()
            .is_some_and(|type_component| type_component.is_any_type_of(&self.types))
    }

    /// Merges the queued changes and returns a snapshot of the entities.
    ///
    /// Every queued addition is applied before any queued removal. The queues are not
    /// re-checked against the types of the group. Entities already dropped by the world are
    /// pruned.
    fn update(&self) -> Vec<Weak<Entity>> {
        let pending = std::mem::take(&mut *self.to_be_handled_entities.lock());

        let mut entities = self.entities.lock();

        if !pending.is_empty() {
            log::trace!(
                "Updating entity group, types = {:?}, added = {}, removed = {}",
                self.types,
                pending.to_be_added.len(),
                pending.to_be_removed.len(),
            );

            for entity in pending.to_be_added {
                if !entities
                    .iter()
                    .any(|entity_ref| Weak::ptr_eq(entity_ref, &entity))
                {
                    entities.push(entity);
                }
            }

            entities.retain(|entity_ref| {
                !pending
                    .to_be_removed
                    .iter()
                    .any(|removed_ref| Weak::ptr_eq(removed_ref, entity_ref))
            });
        }

        let entity_count = entities.len();
        entities.retain(|entity_ref| entity_ref.strong_count() > 0);
        if entities.len() != entity_count {
            log::trace!(
                "Dropped entities pruned from entity group, types = {:?}, count = {}",
                self.types,
                entity_count - entities.len()
            );
        }

        entities.clone()
    }
}

impl<T: EntityType> EntityWorldListener for EntityGroup<T> {
    fn on_entity_added(&self, entity: &Arc<Entity>) {
        if self.is_tracked(entity) {
            log::trace!(
                "Entity queued for addition, id = {:?}, types = {:?}",
                entity.id(),
                self.types
            );

            self.to_be_handled_entities
                .lock()
                .to_be_added
                .push(Arc::downgrade(entity));
        }
    }

    fn on_entity_removed(&self, entity: &Arc<Entity>) {
        if self.is_tracked(entity) {
            log::trace!(
                "Entity queued for removal, id = {:?}, types = {:?}",
                entity.id(),
                self.types
            );

            self.to_be_handled_entities
                .lock()
                .to_be_removed
                .push(Arc::downgrade(entity));
        }
    }
}
