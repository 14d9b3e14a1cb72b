use std::{any::TypeId, collections::BTreeMap};

use super::component::ComponentTrait;

#[derive(Default)]
pub(super) struct ComponentStorage {
    components: BTreeMap<TypeId, Box<dyn ComponentTrait>>,
}

impl ComponentStorage {
    pub fn new() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    /// Returns false and leaves the stored value untouched if a component of the same type exists.
    pub fn add_component<ComponentType>(&mut self, component: ComponentType) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.add_component_any(TypeId::of::<ComponentType>(), Box::new(component))
    }

    pub fn add_component_any(
        &mut self,
        component_type_id: TypeId,
        component: Box<dyn ComponentTrait>,
    ) -> bool {
        if self.components.contains_key(&component_type_id) {
            false
        } else {
            self.components.insert(component_type_id, component);
            true
        }
    }

    pub fn remove_component<ComponentType>(&mut self) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.components
            .remove(&TypeId::of::<ComponentType>())
            .is_some()
    }

    pub fn contains<ComponentType>(&self) -> bool
    where
        ComponentType: ComponentTrait,
    {
        self.components.contains_key(&TypeId::of::<ComponentType>())
    }

    pub fn get_component_ref<ComponentType>(&self) -> Option<&ComponentType>
    where
        ComponentType: ComponentTrait,
    {
        let component: &dyn ComponentTrait = self
            .components
            .get(&TypeId::of::<ComponentType>())?
            .as_ref();

        component.as_any().downcast_ref::<ComponentType>()
    }

    pub fn get_component_mut<ComponentType>(&mut self) -> Option<&mut ComponentType>
    where
        ComponentType: ComponentTrait,
    {
        let component: &mut dyn ComponentTrait = self
            .components
            .get_mut(&TypeId::of::<ComponentType>())?
            .as_mut();

        component.as_any_mut().downcast_mut::<ComponentType>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_read_modify_read_component() {
        let mut component_storage = ComponentStorage::new();

        // add a component
        assert!(component_storage.add_component("initial string".to_string()));

        // read the component
        assert_eq!(
            component_storage.get_component_ref::<String>().cloned(),
            Some("initial string".to_string())
        );

        // change the component
        let component_opt_mut = component_storage.get_component_mut::<String>();
        assert!(component_opt_mut.is_some());
        if let Some(component_mut) = component_opt_mut {
            *component_mut = "modified string".to_string();
        }

        // read the component
        assert_eq!(
            component_storage.get_component_ref::<String>().cloned(),
            Some("modified string".to_string())
        );

        // remove the component
        assert!(component_storage.remove_component::<String>());
        assert!(!component_storage.remove_component::<String>());

        // read the component
        assert!(component_storage.get_component_ref::<String>().is_none());
        assert!(!component_storage.contains::<String>());
    }

    #[test]
    fn adding_same_type_twice_keeps_the_first() {
        let mut component_storage = ComponentStorage::new();

        assert!(component_storage.add_component(1u32));
        assert!(!component_storage.add_component(2u32));

        assert_eq!(component_storage.get_component_ref::<u32>(), Some(&1));
    }

    #[test]
    fn components_of_different_types_live_side_by_side() {
        let mut component_storage = ComponentStorage::new();

        component_storage.add_component(7u32);
        component_storage.add_component("text".to_string());

        assert!(component_storage.contains::<u32>());
        assert!(component_storage.contains::<String>());
        assert!(!component_storage.contains::<u64>());
        assert!(component_storage.get_component_ref::<u64>().is_none());
    }
}
