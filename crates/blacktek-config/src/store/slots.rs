//! Fixed-size value container indexed by one key family.

use crate::ConfigKey;
use log::warn;
use std::marker::PhantomData;

/// `K::COUNT` values of type `T`, addressed by key or raw index.
#[derive(Debug, Clone)]
pub(super) struct Slots<K, T> {
    values: Box<[T]>,
    _family: PhantomData<K>,
}

impl<K: ConfigKey, T: Clone + Default> Slots<K, T> {
    pub(super) fn new() -> Self {
        Self {
            values: vec![T::default(); K::COUNT].into_boxed_slice(),
            _family: PhantomData,
        }
    }

    /// Bounds-checked read; out-of-range indices are logged and yield `None`.
    pub(super) fn read(&self, index: usize, op: &str) -> Option<&T> {
        let value = self.values.get(index);
        if value.is_none() {
            warn!(
                "[{op}] accessing invalid {} config index (index={index}, count={})",
                K::FAMILY,
                K::COUNT
            );
        }
        value
    }

    /// Bounds-checked write; returns whether the slot existed.
    pub(super) fn write(&mut self, index: usize, value: T, op: &str) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                warn!(
                    "[{op}] accessing invalid {} config index (index={index}, count={})",
                    K::FAMILY,
                    K::COUNT
                );
                false
            }
        }
    }

    /// Slot of a typed key. Typed keys are always in range.
    pub(super) fn slot_mut(&mut self, key: K) -> &mut T {
        &mut self.values[key.index()]
    }
}
