use super::{MAX_DIGITS, Trie};
use smallvec::{SmallVec, smallvec};

/// One frame per level of a full-depth walk, plus the root.
const DEPTH: usize = MAX_DIGITS as usize + 1;

/// Depth-first walk over every value in the trie, lowest digits first.
#[derive(Debug, Clone)]
pub struct Leaves<'a, V> {
    pending: Option<&'a V>,
    stack: SmallVec<[(&'a Trie<V>, u8); DEPTH]>,
}

impl<'a, V> Leaves<'a, V> {
    pub fn new(trie: &'a Trie<V>) -> Self {
        Self {
            pending: trie.value.as_ref(),
            stack: smallvec![(trie, 0)],
        }
    }
}

impl<'a, V> Iterator for Leaves<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(value);
        }
        loop {
            let (node, index) = self.stack.last_mut()?;
            let node: &'a Trie<V> = *node;
            let Some(slot) = node.children.get(*index as usize) else {
                self.stack.pop();
                continue;
            };
            *index += 1;
            if let Some(child) = slot.as_deref() {
                self.stack.push((child, 0));
                if let Some(value) = child.value.as_ref() {
                    return Some(value);
                }
            }
        }
    }
}
