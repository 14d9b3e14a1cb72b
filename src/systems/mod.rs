pub mod lifetime;
pub mod movement;
pub mod spawner;
pub mod stats;

pub trait System: 'static {
    fn tick(&mut self, delta_time_in_secs: f32);
}

/// Ticks its systems in the order they were added.
#[derive(Default)]
pub struct SystemContainer {
    systems: Vec<Box<dyn System>>,
}

impl SystemContainer {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    pub fn add_system<SystemType: System>(&mut self, system: SystemType) {
        self.systems.push(Box::new(system));
    }

    pub fn tick(&mut self, delta_time_in_secs: f32) {
        for system in self.systems.iter_mut() {
            system.tick(delta_time_in_secs);
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    struct RecordingSystem {
        name: &'static str,
        log: Arc<Mutex<Vec<(&'static str, f32)>>>,
    }

    impl System for RecordingSystem {
        fn tick(&mut self, delta_time_in_secs: f32) {
            self.log.lock().push((self.name, delta_time_in_secs));
        }
    }

    #[test]
    fn systems_tick_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let mut system_container = SystemContainer::new();
        assert!(system_container.is_empty());

        system_container.add_system(RecordingSystem {
            name: "first",
            log: log.clone(),
        });
        system_container.add_system(RecordingSystem {
            name: "second",
            log: log.clone(),
        });
        assert_eq!(system_container.len(), 2);

        system_container.tick(0.5);

        assert_eq!(*log.lock(), vec![("first", 0.5), ("second", 0.5)]);
    }
}
