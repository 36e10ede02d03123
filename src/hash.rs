//! HashSymTable: fixed-bucket hash table with external chaining.

use crate::chain::{self, Arena, ChainIter};
use crate::contract::SymTable;
use crate::error::{CreateError, InsertError};
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// Multiplier of the string hash.
pub const HASH_MULTIPLIER: usize = 65599;

/// Bucket count used by `new`.
pub const DEFAULT_BUCKET_COUNT: usize = 509;

/// Prime bucket counts suitable for `with_buckets`, smallest first.
pub const BUCKET_COUNTS: [usize; 2] = [509, 1021];

/// Hash of `key`: `h = h * 65599 + byte` over its bytes, wrapping at the
/// width of `usize`.
#[inline]
pub fn hash_key(key: &str) -> usize {
    key.bytes().fold(0usize, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as usize)
    })
}

/// Bucket that `key` occupies in a table of `bucket_count` buckets.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    hash_key(key) % bucket_count
}

/// Hash table whose bucket count is chosen once at construction and never
/// changes. Each bucket heads a chain of bindings, newest first.
///
/// Invariant: a binding with key `k` lives in bucket
/// `bucket_index(k, self.bucket_count())` for the table's whole lifetime.
pub struct HashSymTable<V> {
    slots: Arena<V>,
    buckets: Box<[Option<DefaultKey>]>,
}

impl<V> HashSymTable<V> {
    /// Table with `DEFAULT_BUCKET_COUNT` buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Table with `bucket_count` buckets.
    ///
    /// # Panics
    /// If `bucket_count` is zero. Allocation failure aborts, as for `Vec`;
    /// use `try_with_buckets` to observe it instead.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        debug!("creating hash symbol table with {bucket_count} buckets");
        Self {
            slots: SlotMap::with_key(),
            buckets: vec![None; bucket_count].into_boxed_slice(),
        }
    }

    pub fn try_with_buckets(bucket_count: usize) -> Result<Self, CreateError> {
        if bucket_count == 0 {
            return Err(CreateError::ZeroBuckets);
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count).map_err(|e| {
            debug!("allocating {bucket_count} buckets failed: {e}");
            CreateError::OutOfMemory(e)
        })?;
        buckets.resize(bucket_count, None);
        debug!("creating hash symbol table with {bucket_count} buckets");
        Ok(Self {
            slots: SlotMap::with_key(),
            buckets: buckets.into_boxed_slice(),
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket that `key` maps to in this table, whether or not it is bound.
    pub fn bucket_of(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Number of bindings chained from bucket `i`.
    ///
    /// # Panics
    /// If `i >= self.bucket_count()`.
    pub fn bucket_len(&self, i: usize) -> usize {
        chain::len(&self.slots, self.buckets[i])
    }

    /// Bindings chained from bucket `i`, newest first.
    ///
    /// # Panics
    /// If `i >= self.bucket_count()`.
    pub fn iter_bucket(&self, i: usize) -> ChainIter<'_, V> {
        ChainIter::new(&self.slots, self.buckets[i])
    }

    fn head(&self, key: &str) -> Option<DefaultKey> {
        self.buckets[self.bucket_of(key)]
    }
}

impl<V> Default for HashSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a `HashSymTable`: buckets in ascending order, each chain
/// newest first.
pub struct Iter<'a, V> {
    slots: &'a Arena<V>,
    buckets: core::slice::Iter<'a, Option<DefaultKey>>,
    chain: ChainIter<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.next() {
                return Some(item);
            }
            let head = *self.buckets.next()?;
            self.chain = ChainIter::new(self.slots, head);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<V> SymTable<V> for HashSymTable<V> {
    type Iter<'a> = Iter<'a, V> where V: 'a;

    fn try_new() -> Result<Self, CreateError> {
        Self::try_with_buckets(DEFAULT_BUCKET_COUNT)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        let b = self.bucket_of(key);
        if chain::find(&self.slots, self.buckets[b], key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        let owned = chain::reserve_binding(&mut self.slots, key).map_err(|e| {
            debug!("hash insert of {key:?} failed: {e}");
            InsertError::OutOfMemory(e)
        })?;
        chain::push_front(&mut self.slots, &mut self.buckets[b], owned, value);
        trace!(
            "hash insert {key:?} into bucket {b}, len {}",
            self.slots.len()
        );
        Ok(())
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let k = chain::find(&self.slots, self.head(key), key)?;
        Some(std::mem::replace(&mut self.slots[k].value, value))
    }

    fn contains(&self, key: &str) -> bool {
        chain::find(&self.slots, self.head(key), key).is_some()
    }

    fn get(&self, key: &str) -> Option<&V> {
        let k = chain::find(&self.slots, self.head(key), key)?;
        Some(&self.slots[k].value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let k = chain::find(&self.slots, self.head(key), key)?;
        Some(&mut self.slots[k].value)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let b = self.bucket_of(key);
        let node = chain::unlink(&mut self.slots, &mut self.buckets[b], key)?;
        trace!(
            "hash remove {key:?} from bucket {b}, len {}",
            self.slots.len()
        );
        Some(node.into_value())
    }

    fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            buckets: self.buckets.iter(),
            chain: ChainIter::new(&self.slots, None),
        }
    }

    fn for_each_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&str, &mut V),
    {
        for &head in self.buckets.iter() {
            chain::for_each_mut(&mut self.slots, head, &mut visit);
        }
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for HashSymTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
