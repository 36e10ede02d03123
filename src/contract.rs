//! The operation set shared by every table flavor.

use crate::error::{CreateError, InsertError};

/// A collection of bindings from unique string keys to values of type `V`.
///
/// Keys are copied on insertion and owned by the table; callers keep their
/// own buffers. Values are moved in and never inspected: instantiate `V`
/// with a reference type (`&T`, `&mut T`) to store borrowed values, or with
/// an owned type to hand ownership to the table.
///
/// Traversal order is implementation-defined but deterministic for a given
/// table state, and `iter`, `for_each` and `for_each_mut` agree on it.
pub trait SymTable<V>: Sized {
    /// Borrowing iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (&'a str, &'a V)>
    where
        Self: 'a,
        V: 'a;

    /// A new, empty table, or an error if its storage cannot be allocated.
    fn try_new() -> Result<Self, CreateError>;

    /// Number of live bindings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind `key` to `value`.
    ///
    /// Fails with `DuplicateKey` if `key` is already bound, or with
    /// `OutOfMemory` if the key copy cannot be allocated. On failure the
    /// table is unchanged and `value` is dropped.
    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError>;

    /// Swap the value bound to `key` for `value` and return the previous one.
    /// Returns `None` (dropping `value`) if `key` is unbound. Never allocates.
    fn replace(&mut self, key: &str, value: V) -> Option<V>;

    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<&V>;

    fn get_mut(&mut self, key: &str) -> Option<&mut V>;

    /// Drop the binding for `key`, releasing its key copy, and return its value.
    fn remove(&mut self, key: &str) -> Option<V>;

    fn iter(&self) -> Self::Iter<'_>;

    /// Call `visit` once per binding.
    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.iter() {
            visit(k, v);
        }
    }

    /// Call `visit` once per binding with mutable access to the value.
    /// The table structure itself stays borrowed for the whole traversal.
    fn for_each_mut<F>(&mut self, visit: F)
    where
        F: FnMut(&str, &mut V);
}
