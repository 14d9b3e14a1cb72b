use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use super::{component::ComponentTrait, component_storage::ComponentStorage};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(pub u64);

pub type ComponentGuard<'a, ComponentType> = MappedRwLockReadGuard<'a, ComponentType>;

pub struct Entity {
    id: EntityId,
    is_active: AtomicBool,
    components: RwLock<ComponentStorage>,
}

impl Entity {
    pub(super) fn new(id: EntityId, is_active: bool, components: ComponentStorage) -> Self {
        Self {
            id,
            is_active: AtomicBool::new(is_active),
            components: RwLock::new(components),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::Relaxed)
    }

    pub fn set_active(&self, is_active: bool) {
        self.is_active.store(is_active, Ordering::Relaxed);
    }

    pub fn add_component<ComponentType>(&self, component: ComponentType) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.components.write().add_component(component)
    }

    pub fn remove_component<ComponentType>(&self) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.components.write().remove_component::<ComponentType>()
    }

    pub fn has_component<ComponentType>(&self) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.components.read().contains::<ComponentType>()
    }

    /// The returned guard keeps the component storage of this entity read-locked.
    pub fn get_component_ref<ComponentType>(&self) -> Option<ComponentGuard<'_, ComponentType>>
    where
        ComponentType: ComponentTrait,
    {
        RwLockReadGuard::try_map(self.components.read(), |components| {
            components.get_component_ref::<ComponentType>()
        })
        .ok()
    }

    pub fn change_component<ComponentType>(&self, f: impl FnOnce(&mut ComponentType)) -> bool
    where
        ComponentType: ComponentTrait,
    {
        if let Some(component_mut) = self
            .components
            .write()
            .get_component_mut::<ComponentType>()
        {
            f(component_mut);

            true
        } else {
            false
        }
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("is_active", &self.is_active())
            .finish()
    }
}
