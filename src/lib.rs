//! Sorted maps over fixed-width decimal keys, stored in a radix-10 trie.

#[cfg(feature = "cli")]
pub mod dataset;
pub mod map;
pub(crate) mod trie;

pub use map::DecimalMap;
pub use trie::{DecimalKey, MAX_DIGITS};
