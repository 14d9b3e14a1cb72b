use std::fmt::Debug;

/// Tag type used to classify entities, usually a fieldless enum.
pub trait EntityType: Copy + Eq + Debug + Send + Sync + 'static {}

impl<T> EntityType for T where T: Copy + Eq + Debug + Send + Sync + 'static {}

/// Attaches zero or more type tags to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeComponent<T: EntityType> {
    types: Vec<T>,
}

impl<T: EntityType> TypeComponent<T> {
    pub fn new(types: impl IntoIterator<Item = T>) -> Self {
        let mut ret = Self { types: Vec::new() };

        for entity_type in types {
            if !ret.types.contains(&entity_type) {
                ret.types.push(entity_type);
            }
        }

        ret
    }

    pub fn single(entity_type: T) -> Self {
        Self {
            types: vec![entity_type],
        }
    }

    pub fn is_type(&self, entity_type: &T) -> bool {
        self.types.contains(entity_type)
    }

    pub fn is_any_type_of(&self, entity_types: &[T]) -> bool {
        entity_types
            .iter()
            .any(|entity_type| self.is_type(entity_type))
    }

    pub fn types(&self) -> &[T] {
        &self.types
    }

    pub fn add_type(&mut self, entity_type: T) {
        if !self.is_type(&entity_type) {
            self.types.push(entity_type);
        }
    }

    pub fn remove_type(&mut self, entity_type: &T) {
        self.types
            .retain(|entity_type_ref| *entity_type_ref != *entity_type);
    }
}
