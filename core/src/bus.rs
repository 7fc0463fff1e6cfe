//! Per-run side channel for transitions.
//!
//! A fresh `Bus` is built for every Axon execution. Values are keyed by
//! their type, so a transition asks for `LiveState` rather than a string key.

use std::any::{Any, TypeId};
use std::collections::HashMap;

#[derive(Default)]
pub struct Bus {
    slots: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, replacing any earlier value of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) {
        self.slots.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref())
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus").field("slots", &self.slots.len()).finish()
    }
}
