mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Cmd, OptsShow, StatFormat};
use decimap::{
    DecimalMap,
    dataset::{self, Record},
};
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load the records: {0}")]
    Dataset(#[from] dataset::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Unable to write the records: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0} of the requested keys are not in the map")]
    NotInMap(usize),
}

fn main() {
    env_logger::init();
    if let Err(err) = entry() {
        {
            eprintln!("{}", err)
        }
        std::process::exit(1)
    }
}

#[derive(Debug, Serialize)]
struct Stats {
    digits: u32,
    key_space: u64,
    records: usize,
    empty: bool,
}

impl From<&DecimalMap<Record>> for Stats {
    fn from(map: &DecimalMap<Record>) -> Self {
        Stats {
            digits: map.digit_count(),
            key_space: map.key_space(),
            records: map.len(),
            empty: map.is_empty(),
        }
    }
}

fn show(
    map: &DecimalMap<Record>,
    opts: &OptsShow,
    delimiter: u8,
    mut out: impl Write,
) -> Result<(), Error> {
    if opts.json {
        serde_json::to_writer_pretty(&mut out, map)?;
        writeln!(out)?;
    } else {
        dataset::write(map, delimiter, opts.title, out)?;
    }
    Ok(())
}

/// Writes the records found under `keys`, and a line to `err` for each missing key.
fn get(
    map: &DecimalMap<Record>,
    keys: &[u64],
    delimiter: u8,
    out: impl Write,
    mut err: impl Write,
) -> Result<(), Error> {
    let (found, missing): (Vec<_>, Vec<_>) =
        keys.iter().unique().partition(|&&key| map.contains(key));
    dataset::write(
        found.into_iter().filter_map(|&key| map.get(key)),
        delimiter,
        false,
        out,
    )?;
    for key in &missing {
        writeln!(err, "The key: '{key}' is not in the map")?;
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::NotInMap(missing.len()))
    }
}

fn contains(map: &DecimalMap<Record>, keys: &[u64], mut out: impl Write) -> Result<(), Error> {
    for key in keys {
        writeln!(out, "{key}\t{}", map.contains(*key))?;
    }
    Ok(())
}

/// Removes `keys` through a cursor, returning how many records went.
fn remove(map: &mut DecimalMap<Record>, keys: &[u64]) -> usize {
    let mut cursor = map.cursor();
    let mut removed = 0;
    while let Some(record) = cursor.next() {
        if keys.contains(&record.key) && cursor.remove() {
            log::debug!("Removed record {}: {}", record.key, record.label);
            removed += 1;
        }
    }
    log::info!("Removed {removed} of {} requested keys", keys.len());
    removed
}

fn stats(map: &DecimalMap<Record>, format: &StatFormat, mut out: impl Write) -> Result<(), Error> {
    let stats = Stats::from(map);
    match format {
        StatFormat::Human => {
            writeln!(out, "Digits:    {}", stats.digits)?;
            writeln!(out, "Key space: {}", stats.key_space)?;
            writeln!(out, "Records:   {}", stats.records)?;
            writeln!(out, "Empty:     {}", stats.empty)?;
        }
        StatFormat::Json => writeln!(out, "{}", serde_json::to_string(&stats)?)?,
    }
    Ok(())
}

fn entry() -> Result<(), Error> {
    let mut cli = Cli::parse();
    let delimiter = cli.load.format.delimiter();
    let mut map = dataset::load(
        cli.load.input.lock(),
        delimiter,
        cli.load.header,
        cli.load.digits,
    )?;

    let stdout = std::io::stdout().lock();
    match cli.cmd {
        Cmd::Show(opts) => show(&map, &opts, delimiter, stdout),
        Cmd::Get(opts) => get(&map, &opts.keys, delimiter, stdout, std::io::stderr().lock()),
        Cmd::Contains(opts) => contains(&map, &opts.keys, stdout),
        Cmd::Remove(opts) => {
            remove(&mut map, &opts.keys);
            show(&map, &opts.show, delimiter, stdout)
        }
        Cmd::Stats(opts) => stats(&map, &opts.format, stdout),
    }
}
