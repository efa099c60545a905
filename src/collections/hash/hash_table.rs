use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use tracing::trace;

use super::{Iter, Keys, Values, ValuesMut};

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`]. Collisions are
/// resolved by chaining: every bucket holds all of the entries whose hash lands on it.
///
/// A custom load factor is not supported at this point, with the default being 4/5. Both the
/// initial capacity and the hasher can be chosen on construction.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* In the event of a hash collision, these functions will take additional time while the
/// bucket's chain is searched. Collisions are unlikely, especially with a large capacity.
///
/// \** If the HashTable doesn't have enough capacity for the new element, `insert` will take
/// `O(n)` to rehash every entry. \* applies as well.
pub struct HashTable<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vec<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Vec<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashTable<K, V, B> {
    /// Creates a new HashTable with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the first entry is inserted.
    pub fn new() -> HashTable<K, V, B> {
        HashTable::with_hasher(B::default())
    }

    /// Creates a new HashTable with the provided `cap`acity, allowing insertions without
    /// rehashing. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new HashTable with capacity 0 and the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable {
            buckets: Vec::new(),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<K, V, B> {
        HashTable {
            buckets: Self::empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets in the HashTable.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts the provided `key`-`value` pair into the HashTable, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        self.push_new(key, value);
        None
    }

    /// Returns a mutable reference to the value for `key`, inserting the result of `default` first
    /// if the key isn't present.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let position = self.bucket_index(&key).and_then(|index| {
            self.buckets[index].iter().position(|(k, _)| *k == key).map(|pos| (index, pos))
        });

        let (index, pos) = match position {
            Some(found) => found,
            None => self.push_new(key, default()),
        };
        &mut self.buckets[index][pos].1
    }

    /// Returns a reference to the value associated with `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns the stored key and value for `key`, if there is one.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key)?;
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value associated with `key`, if there is one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key)?;
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns true if the HashTable contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry for `key` from the HashTable, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key` from the HashTable, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key)?;
        let bucket = &mut self.buckets[index];
        let pos = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(pos))
    }

    /// Drops every entry while keeping the allocated buckets.
    pub fn remove_all(&mut self) -> &mut Self {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
        self
    }

    /// Returns an iterator over all entries in the HashTable, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashTable, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.buckets.iter_mut().flatten(),
            len: self.len,
        }
    }

    /// Appends a key known to be absent, growing first if required. Returns the bucket index and
    /// position of the new entry.
    fn push_new(&mut self, key: K, value: V) -> (usize, usize) {
        if self.should_grow() {
            self.grow();
        }

        let index = self.bucket_index_for_cap(&key, self.cap());
        let bucket = &mut self.buckets[index];
        bucket.push((key, value));
        self.len += 1;
        (index, bucket.len() - 1)
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> Option<usize> {
        match self.cap() {
            0 => None,
            cap => Some(self.bucket_index_for_cap(key, cap)),
        }
    }

    fn bucket_index_for_cap<Q: Hash + ?Sized>(&self, key: &Q, cap: usize) -> usize {
        (self.hasher.hash_one(key) % cap as u64) as usize
    }

    fn should_grow(&self) -> bool {
        (self.len + 1) * LOAD_FACTOR_DENOMINATOR > self.cap() * LOAD_FACTOR_NUMERATOR
    }

    fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);
        trace!(old_cap = self.cap(), new_cap, len = self.len, "rehashing hash table");

        let old = mem::replace(&mut self.buckets, Self::empty_buckets(new_cap));
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index_for_cap(&key, new_cap);
            self.buckets[index].push((key, value));
        }
    }

    fn empty_buckets(cap: usize) -> Vec<Bucket<K, V>> {
        let mut buckets = Vec::with_capacity(cap);
        buckets.resize_with(cap, Vec::new);
        buckets
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashTable<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashTable<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashTable<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
