//! Chain: singly-linked bindings threaded through a shared slot arena.
//!
//! Both table flavors store their bindings as `Node`s in a `SlotMap` and
//! link them with `next` handles. A chain is identified by its head slot
//! (`Option<DefaultKey>`), which the owner keeps wherever it likes: the
//! list keeps one, the hash table keeps one per bucket. Every function here
//! leaves the arena and the chain consistent when it returns; nothing in
//! this module calls user code.

use slotmap::{DefaultKey, SlotMap};
use std::collections::TryReserveError;

#[derive(Debug)]
pub(crate) struct Node<V> {
    key: String,
    pub(crate) value: V,
    next: Option<DefaultKey>,
}

impl<V> Node<V> {
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

pub(crate) type Arena<V> = SlotMap<DefaultKey, Node<V>>;

/// Independent copy of `key`, reported as an error instead of aborting
/// when the allocator cannot satisfy it.
pub(crate) fn copy_key(key: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(key.len())?;
    owned.push_str(key);
    Ok(owned)
}

/// Secure everything a new binding for `key` needs before any linking: one
/// free arena slot and the key copy. On error nothing observable changed.
pub(crate) fn reserve_binding<V>(
    arena: &mut Arena<V>,
    key: &str,
) -> Result<String, TryReserveError> {
    arena.try_reserve(1)?;
    copy_key(key)
}

/// Slot of the node whose key equals `key`, scanning from `head`.
pub(crate) fn find<V>(arena: &Arena<V>, head: Option<DefaultKey>, key: &str) -> Option<DefaultKey> {
    let mut cur = head;
    while let Some(k) = cur {
        let node = &arena[k];
        if node.key == key {
            return Some(k);
        }
        cur = node.next;
    }
    None
}

/// Link a new node in front of `head`. The key must already be copied and
/// must not be present in the chain; after `reserve_binding` this does not
/// allocate.
pub(crate) fn push_front<V>(
    arena: &mut Arena<V>,
    head: &mut Option<DefaultKey>,
    key: String,
    value: V,
) -> DefaultKey {
    let k = arena.insert(Node {
        key,
        value,
        next: *head,
    });
    *head = Some(k);
    k
}

/// Unlink the node whose key equals `key` and release its slot.
pub(crate) fn unlink<V>(
    arena: &mut Arena<V>,
    head: &mut Option<DefaultKey>,
    key: &str,
) -> Option<Node<V>> {
    let mut prev: Option<DefaultKey> = None;
    let mut cur = *head;
    while let Some(k) = cur {
        let node = &arena[k];
        if node.key == key {
            let next = node.next;
            match prev {
                None => *head = next,
                Some(p) => arena[p].next = next,
            }
            return arena.remove(k);
        }
        prev = cur;
        cur = node.next;
    }
    None
}

/// Number of nodes reachable from `head`.
pub(crate) fn len<V>(arena: &Arena<V>, head: Option<DefaultKey>) -> usize {
    ChainIter::new(arena, head).count()
}

/// Visit every node from `head` with mutable access to its value.
pub(crate) fn for_each_mut<V, F>(arena: &mut Arena<V>, head: Option<DefaultKey>, visit: &mut F)
where
    F: FnMut(&str, &mut V),
{
    let mut cur = head;
    while let Some(k) = cur {
        let node = &mut arena[k];
        visit(&node.key, &mut node.value);
        cur = node.next;
    }
}

/// Borrowing iterator over one chain, head first.
pub struct ChainIter<'a, V> {
    arena: &'a Arena<V>,
    cur: Option<DefaultKey>,
}

impl<'a, V> ChainIter<'a, V> {
    pub(crate) fn new(arena: &'a Arena<V>, head: Option<DefaultKey>) -> Self {
        Self { arena, cur: head }
    }
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let arena: &'a Arena<V> = self.arena;
        let node = &arena[self.cur?];
        self.cur = node.next;
        Some((&node.key, &node.value))
    }
}
