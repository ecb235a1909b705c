use super::{DecimalKey, MAX_DIGITS};

const _: () = assert!(
    10u64.checked_pow(MAX_DIGITS).is_some(),
    "Every key of MAX_DIGITS digits must fit within a u64"
);

/// The decimal digits of a key, most significant first, padded to a fixed width.
#[derive(Debug, Clone)]
pub struct Digits {
    remaining: u64,
    divisor: u64,
    left: u32,
}

impl Digits {
    /// Splits `key` into exactly `width` digits.
    ///
    /// Returns `None` when `key` needs more than `width` digits or `width` is
    /// not within `1..=MAX_DIGITS`.
    pub fn new(key: u64, width: u32) -> Option<Self> {
        if width == 0 || width > MAX_DIGITS {
            return None;
        }
        let divisor = 10u64.pow(width - 1);
        (key / divisor < 10).then_some(Digits {
            remaining: key,
            divisor,
            left: width,
        })
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let digit = self.remaining / self.divisor;
        self.remaining -= digit * self.divisor;
        self.divisor /= 10;
        self.left -= 1;
        Some(digit as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left as usize, Some(self.left as usize))
    }
}

impl ExactSizeIterator for Digits {}

macro_rules! impl_decimal_key {
    ($($int:ty),*) => {
        $(
            impl DecimalKey for $int {
                fn key(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_decimal_key!(u8, u16, u32, u64, usize);

impl<K: DecimalKey, V> DecimalKey for (K, V) {
    fn key(&self) -> u64 {
        self.0.key()
    }
}

impl<T: DecimalKey + ?Sized> DecimalKey for &T {
    fn key(&self) -> u64 {
        (**self).key()
    }
}

impl<T: DecimalKey + ?Sized> DecimalKey for Box<T> {
    fn key(&self) -> u64 {
        (**self).key()
    }
}
