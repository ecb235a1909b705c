use clap::{Args, Parser, Subcommand, ValueEnum};

/// Load decimal keyed records into a sorted trie map and query them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_precedence_over_arg = true)]
pub struct Cli {
    #[command(flatten)]
    pub load: OptsLoad,
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Print every record in ascending key order.
    Show(OptsShow),
    /// Print the records stored under the given keys.
    Get(OptsKeys),
    /// Report whether each key is present.
    Contains(OptsKeys),
    /// Remove the given keys, then print the remaining records.
    Remove(OptsRemove),
    /// Display statistics about the map.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsLoad {
    /// Path to the records file, `-` for stdin.
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: clio::Input,
    /// Number of decimal digits every key is padded to.
    #[arg(short, long, default_value_t = 6)]
    pub digits: u32,
    /// Format of the records file.
    #[arg(short, long, value_enum, default_value_t = RecordFormat::CSV)]
    pub format: RecordFormat,
    /// The first row of the records file names the columns.
    #[arg(long)]
    pub header: bool,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    CSV,
    TSV,
}

impl RecordFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            RecordFormat::CSV => b',',
            RecordFormat::TSV => b'\t',
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct OptsShow {
    /// Print the records as a JSON array.
    #[arg(short, long)]
    pub json: bool,
    /// Add a header to the output denoting the columns.
    #[arg(short, long, conflicts_with = "json")]
    pub title: bool,
}

#[derive(Debug, Args)]
pub struct OptsKeys {
    /// Keys to look up.
    #[arg(required = true)]
    pub keys: Vec<u64>,
}

#[derive(Debug, Args)]
pub struct OptsRemove {
    /// Keys to remove.
    #[arg(required = true)]
    pub keys: Vec<u64>,

    #[command(flatten)]
    pub show: OptsShow,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}
