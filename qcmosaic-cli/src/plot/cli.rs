use clap::{Arg, ArgAction, Command, arg};

pub const PLOT_CMD: &str = "plot";
pub const DEFAULT_TILE_ORDER: &str = "numeric";
pub const DEFAULT_CELL_SIZE: &str = "4";

pub fn create_plot_cli() -> Command {
    Command::new(PLOT_CMD)
        .about("Compose per-tile run statistics into one heatmap track per feature, read and lane.")
        .arg(
            Arg::new("mode")
                .required(true)
                .help("Track order: by_feature or by_lane"),
        )
        .arg(Arg::new("infile").required(true).help("Run-stats file (tsv, optionally gzipped)"))
        .arg(
            Arg::new("features")
                .short('f')
                .long("features")
                .num_args(1..)
                .help("Features to be plotted (default: all)"),
        )
        .arg(
            Arg::new("lanes")
                .short('l')
                .long("lanes")
                .num_args(1..)
                .help("Lanes to be plotted (default: all)"),
        )
        .arg(
            Arg::new("reads")
                .short('r')
                .long("reads")
                .num_args(1..)
                .help("Reads to be plotted (default: all)"),
        )
        .arg(
            Arg::new("q-lims")
                .short('q')
                .long("q-lims")
                .num_args(1..=2)
                .help("Lower and upper bound of quality (default: 30 40)"),
        )
        .arg(
            arg!(-m --"mask-qual")
                .help("Mask quality values below the lower bound as missing")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-o --outfile <OUTFILE> "Output PNG file").required(false))
        .arg(
            Arg::new("npy-dir")
                .long("npy-dir")
                .required(false)
                .help("Directory to write one .npy array per track and a manifest.json"),
        )
        .arg(
            arg!(--config <CONFIG> "TOML file with colormaps and colour limits per feature")
                .required(false),
        )
        .arg(
            Arg::new("tile-columns")
                .long("tile-columns")
                .required(false)
                .help("Tiles are stored one line per tag, flattened row-major with this many columns (default: one line per tile row)"),
        )
        .arg(
            Arg::new("tile-order")
                .long("tile-order")
                .required(false)
                .default_value(DEFAULT_TILE_ORDER)
                .help("Tile id ordering along a track: numeric or lexical"),
        )
        .arg(
            Arg::new("cell-size")
                .long("cell-size")
                .required(false)
                .default_value(DEFAULT_CELL_SIZE)
                .help("Pixels per matrix cell in the PNG output"),
        )
}
