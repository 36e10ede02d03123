//! ListSymTable: association-list flavor.

use crate::chain::{self, Arena, ChainIter};
use crate::contract::SymTable;
use crate::error::{CreateError, InsertError};
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// A single chain of bindings, most recently inserted first.
///
/// Every lookup is a linear scan, so this flavor suits small or bounded
/// tables. Insertion is O(1) after the duplicate check.
pub struct ListSymTable<V> {
    slots: Arena<V>,
    head: Option<DefaultKey>,
}

impl<V> ListSymTable<V> {
    pub fn new() -> Self {
        debug!("creating list symbol table");
        Self {
            slots: SlotMap::with_key(),
            head: None,
        }
    }
}

impl<V> Default for ListSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SymTable<V> for ListSymTable<V> {
    type Iter<'a> = ChainIter<'a, V> where V: 'a;

    fn try_new() -> Result<Self, CreateError> {
        Ok(Self::new())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if chain::find(&self.slots, self.head, key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        let owned = chain::reserve_binding(&mut self.slots, key).map_err(|e| {
            debug!("list insert of {key:?} failed: {e}");
            InsertError::OutOfMemory(e)
        })?;
        chain::push_front(&mut self.slots, &mut self.head, owned, value);
        trace!("list insert {key:?}, len {}", self.slots.len());
        Ok(())
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let k = chain::find(&self.slots, self.head, key)?;
        Some(std::mem::replace(&mut self.slots[k].value, value))
    }

    fn contains(&self, key: &str) -> bool {
        chain::find(&self.slots, self.head, key).is_some()
    }

    fn get(&self, key: &str) -> Option<&V> {
        let k = chain::find(&self.slots, self.head, key)?;
        Some(&self.slots[k].value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let k = chain::find(&self.slots, self.head, key)?;
        Some(&mut self.slots[k].value)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let node = chain::unlink(&mut self.slots, &mut self.head, key)?;
        trace!("list remove {key:?}, len {}", self.slots.len());
        Some(node.into_value())
    }

    fn iter(&self) -> ChainIter<'_, V> {
        ChainIter::new(&self.slots, self.head)
    }

    fn for_each_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&str, &mut V),
    {
        chain::for_each_mut(&mut self.slots, self.head, &mut visit);
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for ListSymTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
