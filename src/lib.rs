//! symtable: a string-keyed symbol table in two interchangeable flavors.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one contract (`SymTable<V>`), two independent structures that
//!   satisfy it identically, so callers and tests can swap them freely.
//! - Layers:
//!   - chain: singly-linked bindings stored in a `SlotMap` arena and
//!     linked by slot handles. Owns key copies; knows nothing of buckets.
//!   - ListSymTable<V>: one chain, newest binding first.
//!   - HashSymTable<V>: a fixed array of chain heads indexed by
//!     `hash_key(key) % bucket_count`.
//!   - Table<V>: either flavor behind one type, chosen by `Backend` at
//!     construction.
//!
//! Constraints
//! - Single-threaded; no interior mutability, no atomics. Wrap a table in
//!   a lock to share it.
//! - Unique keys; duplicate inserts fail and leave the table unchanged.
//! - Keys are copied on insert and owned by the table. Values are moved in
//!   untouched; use `V = &T` to keep the caller as their owner.
//! - The hash flavor never resizes. Its bucket count is fixed at
//!   construction (509 by default).
//!
//! Hashing
//! - `hash = hash * 65599 + byte` over the key's bytes in wrapping `usize`
//!   arithmetic, bytes taken as unsigned. The bucket is the hash modulo
//!   the bucket count. See `hash::hash_key`.
//!
//! Failure model
//! - Every allocation is fallible: bucket arrays and key copies use
//!   `try_reserve_exact`, arena slots use `SlotMap::try_reserve`.
//!   Exhaustion surfaces as `InsertError::OutOfMemory` or
//!   `CreateError::OutOfMemory`.
//! - `insert` reserves the slot and copies the key before linking, so a
//!   failed insert changes nothing.
//! - Absent keys are not errors; lookups return `None`.
//!
//! Traversal
//! - `iter`/`for_each` borrow the table shared and `for_each_mut` borrows it
//!   exclusively, so a visitor cannot insert or remove mid-traversal.
//! - Order: the list flavor yields newest first; the hash flavor yields
//!   buckets in ascending index order, each chain newest first.
//! - A panicking visitor unwinds out of the traversal with the table
//!   intact, since traversal never relinks nodes.

mod chain;
pub mod contract;
mod contract_proptest;
pub mod error;
pub mod hash;
pub mod list;
pub mod table;

// Public surface
pub use chain::ChainIter;
pub use contract::SymTable;
pub use error::{CreateError, InsertError};
pub use hash::{HashSymTable, DEFAULT_BUCKET_COUNT};
pub use list::ListSymTable;
pub use table::{Backend, Table};
