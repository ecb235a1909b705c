use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DecimalKey, DecimalMap, map};

/// A labelled row of a records file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: u64,
    pub label: String,
}

impl Record {
    pub fn new(key: u64, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

impl DecimalKey for Record {
    fn key(&self) -> u64 {
        self.key
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed record: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Map(#[from] map::Error),
}

pub fn parse(
    reader: impl Read,
    delimiter: u8,
    headers: bool,
) -> impl Iterator<Item = Result<Record, csv::Error>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(headers)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
}

/// Reads every record into a map over `digits` digit keys.
///
/// Later records reusing a key are skipped.
pub fn load(
    reader: impl Read,
    delimiter: u8,
    headers: bool,
    digits: u32,
) -> Result<DecimalMap<Record>, Error> {
    let mut map = DecimalMap::new(digits)?;
    for record in parse(reader, delimiter, headers) {
        let record = record?;
        let key = record.key;
        if !map.insert(record)? {
            log::warn!("Skipping duplicate record for key {key}");
        }
    }
    log::info!("Loaded {} records", map.len());
    Ok(map)
}

pub fn write<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    delimiter: u8,
    headers: bool,
    writer: impl std::io::Write,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(headers)
        .from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn load_sorted() {
        let text = "42,answer\n7, seven\n300,three hundred\n";
        let map = load(text.as_bytes(), b',', false, 3).unwrap();
        assert_eq!(map.keys().collect_vec(), vec![7, 42, 300]);
        assert_eq!(map.get(7), Some(&Record::new(7, "seven")));
    }

    #[test]
    fn load_headers_and_duplicates() {
        let text = "key\tlabel\n1\tfirst\n1\tsecond\n";
        let map = load(text.as_bytes(), b'\t', true, 1).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1).map(|r| r.label.as_str()), Some("first"));
    }

    #[test]
    fn load_rejects_wide_keys() {
        let err = load("1000,big\n".as_bytes(), b',', false, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Map(map::Error::KeyOutOfRange { key: 1000, digits: 3 })
        ));
    }

    #[test]
    fn load_rejects_bad_keys() {
        let err = load("-4,negative\n".as_bytes(), b',', false, 3).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn write_in_order() {
        let map = load("20,b\n3,a\n".as_bytes(), b',', false, 2).unwrap();
        let mut out = Vec::new();
        write(&map, b',', true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "key,label\n3,a\n20,b\n");
    }
}
