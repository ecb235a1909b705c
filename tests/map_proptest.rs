use decimap::{DecimalKey, DecimalMap};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: u16,
    value: u32,
}

impl DecimalKey for Entry {
    fn key(&self) -> u64 {
        self.key as u64
    }
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(u16, u32),
    Get(u16),
    Remove(u16),
}

const DIGITS: u32 = 3;
const KEYS: u16 = 1000;

proptest! {
    #[test]
    fn test_decimal_map_matches_std_map(ops in proptest::collection::vec(
        prop_oneof![
            (0..KEYS, any::<u32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            (0..KEYS).prop_map(Operation::Get),
            (0..KEYS).prop_map(Operation::Remove),
        ],
        1..200
    )) {
        let mut std_map = BTreeMap::new();
        let mut map = DecimalMap::new(DIGITS).unwrap();

        for op in ops {
            match op {
                Operation::Insert(k, v) => {
                    let std_res = !std_map.contains_key(&k);
                    if std_res {
                        std_map.insert(k, v);
                    }
                    let map_res = map.insert(Entry { key: k, value: v }).unwrap();
                    prop_assert_eq!(std_res, map_res, "Insert result mismatch for key {}", k);
                }
                Operation::Get(k) => {
                    let std_res = std_map.get(&k).copied();
                    let map_res = map.get(k as u64).map(|e| e.value);
                    prop_assert_eq!(std_res, map_res, "Get result mismatch for key {}", k);
                    prop_assert_eq!(std_res.is_some(), map.contains(k as u64));
                }
                Operation::Remove(k) => {
                    let std_res = std_map.remove(&k).is_some();
                    let map_res = map.remove(k as u64);
                    prop_assert_eq!(std_res, map_res, "Remove result mismatch for key {}", k);
                }
            }
        }

        prop_assert_eq!(map.len(), std_map.len(), "Length mismatch");
        prop_assert_eq!(map.is_empty(), std_map.is_empty());

        let ordered: Vec<_> = map.iter().map(|e| (e.key, e.value)).collect();
        let expected: Vec<_> = std_map.into_iter().collect();
        prop_assert_eq!(ordered, expected);
    }

    #[test]
    fn test_cursor_removes_only_yielded(keys in proptest::collection::btree_set(0..KEYS, 0..50), every in 1usize..4) {
        let mut map = DecimalMap::with_elements(DIGITS, keys.iter().map(|&key| Entry { key, value: 0 })).unwrap();

        let mut removed = Vec::new();
        let mut cursor = map.cursor();
        let mut index = 0;
        while let Some(entry) = cursor.next() {
            if index % every == 0 {
                prop_assert!(cursor.remove());
                removed.push(entry.key);
            }
            index += 1;
        }

        for key in &keys {
            prop_assert_eq!(map.contains(*key as u64), !removed.contains(key));
        }
        prop_assert_eq!(map.len(), keys.len() - removed.len());
    }
}

#[test]
fn widest_keys() {
    let mut map = DecimalMap::new(decimap::MAX_DIGITS).unwrap();
    let top = 10u64.pow(decimap::MAX_DIGITS) - 1;
    assert!(map.insert(top).unwrap());
    assert!(map.insert(0u64).unwrap());
    assert!(map.insert(top + 1).is_err());
    assert_eq!(map.keys().collect::<Vec<_>>(), vec![0, top]);
}
