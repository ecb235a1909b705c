use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::DecimalMap;
use crate::trie::{DecimalKey, Trie};

/// Borrowed elements in ascending key order, buffered when the iterator is made.
#[must_use]
#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    queue: VecDeque<&'a E>,
}

impl<'a, E> Iter<'a, E> {
    pub(super) fn new(root: &'a Trie<E>) -> Self {
        let queue: VecDeque<_> = root.leaves().collect();
        log::debug!("Buffered {} elements for iteration", queue.len());
        Self { queue }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
impl<E> FusedIterator for Iter<'_, E> {}

#[must_use]
#[derive(Debug, Clone)]
pub struct Keys<'a, E> {
    inner: Iter<'a, E>,
}

impl<'a, E> Keys<'a, E> {
    pub(super) fn new(inner: Iter<'a, E>) -> Self {
        Self { inner }
    }
}

impl<E: DecimalKey> Iterator for Keys<'_, E> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(DecimalKey::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: DecimalKey> ExactSizeIterator for Keys<'_, E> {}
impl<E: DecimalKey> FusedIterator for Keys<'_, E> {}

/// Owned elements in ascending key order.
#[must_use]
#[derive(Debug)]
pub struct IntoIter<E> {
    queue: VecDeque<E>,
}

impl<E> IntoIter<E> {
    pub(super) fn new(root: Trie<E>) -> Self {
        Self {
            queue: root.into_values(),
        }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}
impl<E> FusedIterator for IntoIter<E> {}

/// Replays a snapshot of the map while holding it for removals.
///
/// The elements are cloned out of the map up front. [`Cursor::remove`] deletes
/// the last yielded element from the live map; the snapshot is never touched,
/// so every element present at creation is still yielded.
#[must_use]
pub struct Cursor<'a, E: DecimalKey> {
    map: &'a mut DecimalMap<E>,
    queue: VecDeque<E>,
    last: Option<u64>,
}

impl<'a, E: DecimalKey + Clone> Cursor<'a, E> {
    pub(super) fn new(map: &'a mut DecimalMap<E>) -> Self {
        let queue: VecDeque<_> = map.root.leaves().cloned().collect();
        log::debug!("Buffered {} elements for a cursor", queue.len());
        Self {
            map,
            queue,
            last: None,
        }
    }
}

impl<E: DecimalKey> Cursor<'_, E> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Removes the element last returned by `next` from the map.
    ///
    /// Returns `false` if nothing has been yielded since the previous removal.
    pub fn remove(&mut self) -> bool {
        self.last.take().is_some_and(|key| self.map.remove(key))
    }

    /// The live map, reflecting removals made through this cursor.
    #[must_use]
    pub fn backing(&self) -> &DecimalMap<E> {
        &*self.map
    }
}

impl<E: DecimalKey> Iterator for Cursor<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.queue.pop_front()?;
        self.last = Some(element.key());
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<E: DecimalKey> ExactSizeIterator for Cursor<'_, E> {}
impl<E: DecimalKey> FusedIterator for Cursor<'_, E> {}

impl<E: DecimalKey + core::fmt::Debug> core::fmt::Debug for Cursor<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(std::any::type_name_of_val(self))
            .field("queue", &self.queue)
            .field("last", &self.last)
            .finish()
    }
}
