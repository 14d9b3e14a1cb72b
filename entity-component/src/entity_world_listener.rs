use std::sync::Arc;

use super::Entity;

/// Receives membership changes of an [`EntityContainer`](crate::EntityContainer).
///
/// Both callbacks take `&self`, a listener may be notified while one of its own methods is running
/// further up the stack.
pub trait EntityWorldListener: Send + Sync {
    fn on_entity_added(&self, entity: &Arc<Entity>);
    fn on_entity_removed(&self, entity: &Arc<Entity>);
}
