mod plot;
mod summary;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "qcmosaic";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Reconcile per-tile sequencing run statistics into heatmap mosaics.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
        .subcommand(plot::cli::create_plot_cli())
        .subcommand(summary::cli::create_summary_cli())
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    if matches.get_flag("quiet") {
        return LevelFilter::Warn;
    }
    match matches.get_count("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(log_level(&matches))
        .parse_default_env()
        .init();

    match matches.subcommand() {
        //
        // PLOT
        //
        Some((plot::cli::PLOT_CMD, matches)) => {
            plot::handlers::run_plot(matches)?;
        }

        //
        // SUMMARY
        //
        Some((summary::cli::SUMMARY_CMD, matches)) => {
            summary::handlers::run_summary(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
