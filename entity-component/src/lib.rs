mod component;
mod component_storage;
mod entity;
mod entity_builder;
mod entity_container;
mod entity_group;
mod entity_world_listener;
mod type_component;

pub use component::*;
pub use entity::*;
pub use entity_builder::*;
pub use entity_container::*;
pub use entity_group::*;
pub use entity_world_listener::*;
pub use type_component::*;
