mod error;
pub use error::{Error, Result};
mod iter;
pub use iter::{Cursor, IntoIter, Iter, Keys};

use crate::trie::{DecimalKey, Digits, MAX_DIGITS, Trie};

/// A sorted map over keys of a fixed number of decimal digits.
///
/// Each level of the underlying trie consumes one digit of the key, most
/// significant first, so walking children in index order visits keys in
/// ascending order. Values only ever live at the full depth. Removing a value
/// leaves the nodes along its path in place.
#[derive(Clone)]
pub struct DecimalMap<E> {
    root: Trie<E>,
    digit_count: u32,
}

impl<E: DecimalKey> DecimalMap<E> {
    /// Creates an empty map accepting keys in `0..10^digit_count`.
    pub fn new(digit_count: u32) -> Result<Self> {
        if digit_count == 0 || digit_count > MAX_DIGITS {
            return Err(Error::DigitCount(digit_count));
        }
        log::debug!("Created a decimal map over {digit_count} digits");
        Ok(Self {
            root: Trie::new(),
            digit_count,
        })
    }

    /// Creates a map holding `elements`, keeping the first of any duplicate keys.
    pub fn with_elements(digit_count: u32, elements: impl IntoIterator<Item = E>) -> Result<Self> {
        let mut map = Self::new(digit_count)?;
        map.try_extend(elements)?;
        Ok(map)
    }

    #[must_use]
    pub fn digit_count(&self) -> u32 {
        self.digit_count
    }

    /// Number of distinct keys the map can hold.
    #[must_use]
    pub fn key_space(&self) -> u64 {
        10u64.pow(self.digit_count)
    }

    fn digits(&self, key: u64) -> Option<Digits> {
        Digits::new(key, self.digit_count)
    }

    #[must_use]
    pub fn contains(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// Returns the element stored under `key`.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&E> {
        self.root.get(self.digits(key)?)?.value.as_ref()
    }

    /// Stores `element` under its own key.
    ///
    /// Returns `Ok(false)` without touching the map's contents if the key is
    /// already taken; the existing element is kept.
    pub fn insert(&mut self, element: E) -> Result<bool> {
        let key = element.key();
        let digits = self.digits(key).ok_or(Error::KeyOutOfRange {
            key,
            digits: self.digit_count,
        })?;
        let leaf = self.root.get_or_insert(digits);
        if leaf.is_leaf() {
            log::trace!("Rejected duplicate key {key}");
            return Ok(false);
        }
        leaf.value = Some(element);
        log::trace!("Inserted key {key}");
        Ok(true)
    }

    /// Inserts every element, returning how many were new.
    ///
    /// Stops at the first key that does not fit; elements inserted before it
    /// stay in the map.
    pub fn try_extend(&mut self, elements: impl IntoIterator<Item = E>) -> Result<usize> {
        let mut inserted = 0;
        for element in elements {
            inserted += usize::from(self.insert(element)?);
        }
        Ok(inserted)
    }

    pub fn remove(&mut self, key: u64) -> bool {
        self.take(key).is_some()
    }

    /// Removes the element stored under `key` and hands it back.
    pub fn take(&mut self, key: u64) -> Option<E> {
        let digits = self.digits(key)?;
        let element = self.root.get_mut(digits)?.value.take();
        if element.is_some() {
            log::trace!("Removed key {key}");
        }
        element
    }

    /// Scans the whole trie; stops at the first stored element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_vacant()
    }

    /// Counts every stored element by scanning the whole trie.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// A snapshot of the elements in ascending key order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(&self.root)
    }

    pub fn keys(&self) -> Keys<'_, E> {
        Keys::new(self.iter())
    }

    /// A snapshot iterator that can remove what it yields from this map.
    pub fn cursor(&mut self) -> Cursor<'_, E>
    where
        E: Clone,
    {
        Cursor::new(self)
    }
}

impl<E: DecimalKey> core::fmt::Debug for DecimalMap<E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|element| (element.key(), element)))
            .finish()
    }
}

/// Maps are equal when they share a digit count and hold equal elements.
/// Empty paths left behind by removals are not compared.
impl<E: DecimalKey + PartialEq> PartialEq for DecimalMap<E> {
    fn eq(&self, other: &Self) -> bool {
        self.digit_count == other.digit_count && self.iter().eq(other.iter())
    }
}

impl<E: DecimalKey + Eq> Eq for DecimalMap<E> {}

impl<'a, E: DecimalKey> IntoIterator for &'a DecimalMap<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: DecimalKey> IntoIterator for DecimalMap<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

#[cfg(feature = "serde")]
impl<E: DecimalKey + serde::Serialize> serde::Serialize for DecimalMap<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
