use std::sync::Arc;

use super::{
    component::ComponentTrait, component_storage::ComponentStorage, Entity, EntityContainer,
    EntityType, TypeComponent,
};

pub struct EntityBuilder<'entity_container> {
    entity_container: &'entity_container mut EntityContainer,
    components: ComponentStorage,
    is_active: bool,
}

impl<'entity_container> EntityBuilder<'entity_container> {
    pub(super) fn new(entity_container: &'entity_container mut EntityContainer) -> Self {
        Self {
            entity_container,
            components: ComponentStorage::new(),
            is_active: true,
        }
    }

    /// A component of an already added type is ignored.
    pub fn with_component<ComponentType>(mut self, component: ComponentType) -> Self
    where
        ComponentType: ComponentTrait,
    {
        self.components.add_component(component);

        self
    }

    pub fn with_types<TagType>(self, types: impl IntoIterator<Item = TagType>) -> Self
    where
        TagType: EntityType,
    {
        self.with_component(TypeComponent::new(types))
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;

        self
    }

    pub fn build(self) -> Arc<Entity> {
        self.entity_container
            .add_entity(self.components, self.is_active)
    }
}
