use std::sync::Arc;

use parking_lot::RwLock;

pub type ArcRwLock<T> = Arc<RwLock<T>>;

pub fn arc_rw_lock_new<T>(object: T) -> ArcRwLock<T> {
    Arc::new(RwLock::new(object))
}
