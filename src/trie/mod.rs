pub mod iter;
mod keys;
mod node;

pub use keys::Digits;

/// Anything that can report the decimal key it is sorted by.
pub trait DecimalKey {
    fn key(&self) -> u64;
}

const CHILDREN: usize = 10;

/// Widest key, in decimal digits, whose whole key space fits within a `u64`.
pub const MAX_DIGITS: u32 = 19;

#[derive(Clone)]
pub struct Trie<V> {
    pub value: Option<V>,
    children: [Option<Box<Trie<V>>>; CHILDREN],
}
