use super::{Trie, iter::Leaves};
use std::any::type_name;
use std::collections::VecDeque;

impl<V> core::fmt::Debug for Trie<V>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Trie<V>>())
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            value: None,
            children: Default::default(),
        }
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Follows `path` one digit per level, stopping at the first missing child.
    pub fn get(&self, path: impl IntoIterator<Item = u8>) -> Option<&Trie<V>> {
        let mut current_node = self;
        for index in path {
            current_node = current_node.children[index as usize].as_deref()?;
        }
        Some(current_node)
    }

    pub fn get_mut(&mut self, path: impl IntoIterator<Item = u8>) -> Option<&mut Trie<V>> {
        let mut current_node = self;
        for index in path {
            current_node = current_node.children[index as usize].as_deref_mut()?;
        }
        Some(current_node)
    }

    /// Follows `path`, creating every node missing along the way.
    pub fn get_or_insert(&mut self, path: impl IntoIterator<Item = u8>) -> &mut Trie<V> {
        let mut current_node = self;
        for index in path {
            current_node = current_node.children[index as usize].get_or_insert_with(Box::default);
        }
        current_node
    }

    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    /// True when no node below (or at) this one holds a value.
    pub fn is_vacant(&self) -> bool {
        !self.is_leaf() && self.children().all(|(_, child)| child.is_vacant())
    }

    pub fn count(&self) -> usize {
        usize::from(self.is_leaf())
            + self
                .children()
                .map(|(_, child)| child.count())
                .sum::<usize>()
    }

    pub(super) fn children(&self) -> impl Iterator<Item = (u8, &Trie<V>)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| Some((index as u8, child.as_deref()?)))
    }

    pub fn leaves(&self) -> Leaves<'_, V> {
        Leaves::new(self)
    }

    /// Consumes the trie, yielding its values in ascending digit order.
    pub fn into_values(self) -> VecDeque<V> {
        fn drain<V>(trie: Trie<V>, values: &mut VecDeque<V>) {
            values.extend(trie.value);
            for child in trie.children.into_iter().flatten() {
                drain(*child, values);
            }
        }
        let mut values = VecDeque::new();
        drain(self, &mut values);
        values
    }
}
