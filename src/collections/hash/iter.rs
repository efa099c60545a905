use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::{slice, vec};

use super::{Bucket, HashTable};

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashTable<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

/// A type for owned iteration over a [`HashTable`]. Produces values of type `(K, V)`.
pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<vec::IntoIter<Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashTable<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.buckets.iter().flatten(),
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`HashTable`]. Produces values of type `(&K, &V)`.
///
/// See [`HashTable::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) inner: Flatten<slice::Iter<'a, Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        self.len -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A type for borrowed iteration over a [`HashTable`]'s keys. Produces values of type `&K`.
///
/// See [`HashTable::keys`].
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A type for borrowed iteration over a [`HashTable`]'s values. Produces values of type `&V`.
///
/// See [`HashTable::values`].
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A type for mutable iteration over a [`HashTable`]'s values. Produces values of type `&mut V`.
///
/// See [`HashTable::values_mut`].
pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: Flatten<slice::IterMut<'a, Bucket<K, V>>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.next()?;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
