//! Table: a symbol table whose flavor is picked when it is constructed.

use crate::chain::ChainIter;
use crate::contract::SymTable;
use crate::error::{CreateError, InsertError};
use crate::hash::{self, HashSymTable};
use crate::list::ListSymTable;

/// Which flavor backs a `Table`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Backend {
    /// Single chain, linear lookups.
    List,
    /// Fixed-bucket chained hash table with `DEFAULT_BUCKET_COUNT` buckets.
    #[default]
    Hash,
}

/// Either flavor behind one type, for callers that choose at runtime.
#[derive(Debug)]
pub enum Table<V> {
    List(ListSymTable<V>),
    Hash(HashSymTable<V>),
}

impl<V> Table<V> {
    pub fn new(backend: Backend) -> Self {
        match backend {
            Backend::List => Table::List(ListSymTable::new()),
            Backend::Hash => Table::Hash(HashSymTable::new()),
        }
    }

    pub fn try_with_backend(backend: Backend) -> Result<Self, CreateError> {
        Ok(match backend {
            Backend::List => Table::List(ListSymTable::try_new()?),
            Backend::Hash => Table::Hash(HashSymTable::try_new()?),
        })
    }

    pub fn backend(&self) -> Backend {
        match self {
            Table::List(_) => Backend::List,
            Table::Hash(_) => Backend::Hash,
        }
    }
}

impl<V> From<ListSymTable<V>> for Table<V> {
    fn from(t: ListSymTable<V>) -> Self {
        Table::List(t)
    }
}

impl<V> From<HashSymTable<V>> for Table<V> {
    fn from(t: HashSymTable<V>) -> Self {
        Table::Hash(t)
    }
}

/// Iterator over a `Table`, in the order of its backing flavor.
pub enum Iter<'a, V> {
    List(ChainIter<'a, V>),
    Hash(hash::Iter<'a, V>),
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::List(it) => it.next(),
            Iter::Hash(it) => it.next(),
        }
    }
}

macro_rules! delegate {
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            Table::List($t) => $body,
            Table::Hash($t) => $body,
        }
    };
}

impl<V> SymTable<V> for Table<V> {
    type Iter<'a> = Iter<'a, V> where V: 'a;

    /// Backed by `Backend::default()`.
    fn try_new() -> Result<Self, CreateError> {
        Self::try_with_backend(Backend::default())
    }

    fn len(&self) -> usize {
        delegate!(self, t => t.len())
    }

    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        delegate!(self, t => t.insert(key, value))
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        delegate!(self, t => t.replace(key, value))
    }

    fn contains(&self, key: &str) -> bool {
        delegate!(self, t => t.contains(key))
    }

    fn get(&self, key: &str) -> Option<&V> {
        delegate!(self, t => t.get(key))
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        delegate!(self, t => t.get_mut(key))
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        delegate!(self, t => t.remove(key))
    }

    fn iter(&self) -> Iter<'_, V> {
        match self {
            Table::List(t) => Iter::List(t.iter()),
            Table::Hash(t) => Iter::Hash(t.iter()),
        }
    }

    fn for_each_mut<F>(&mut self, visit: F)
    where
        F: FnMut(&str, &mut V),
    {
        delegate!(self, t => t.for_each_mut(visit))
    }
}
