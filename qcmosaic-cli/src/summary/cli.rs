use clap::{Arg, Command, arg};

use crate::plot::cli::DEFAULT_TILE_ORDER;

pub const SUMMARY_CMD: &str = "summary";

pub fn create_summary_cli() -> Command {
    Command::new(SUMMARY_CMD)
        .about("Describe the features, reads, lanes and tiles of a run-stats file as JSON.")
        .arg(Arg::new("infile").required(true).help("Run-stats file (tsv, optionally gzipped)"))
        .arg(
            Arg::new("tile-columns")
                .long("tile-columns")
                .required(false)
                .help("Tiles are stored one line per tag, flattened row-major with this many columns"),
        )
        .arg(
            Arg::new("tile-order")
                .long("tile-order")
                .required(false)
                .default_value(DEFAULT_TILE_ORDER)
                .help("Tile id ordering: numeric or lexical"),
        )
        .arg(arg!(--output <OUTPUT> "Write the JSON here instead of stdout").required(false))
}
