use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use qcmosaic_core::consts::QUAL_FEATURE;
use qcmosaic_core::models::{Table, TileLayout, TileOrder};
use qcmosaic_mosaic::{
    ComposeMode, MosaicOptions, QualityBounds, TileView, compose, resolve,
};
use qcmosaic_render::{NpyTrackWriter, PngMosaicRenderer, RenderConfig, TrackRenderer};

fn many(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
}

///
/// Parse the tile layout from `--tile-columns`. Without it the input is read the way
/// the run-stats collector writes it, one line per tile row.
///
pub fn tile_layout(matches: &ArgMatches) -> Result<TileLayout> {
    match matches.get_one::<String>("tile-columns") {
        Some(columns) => {
            let columns = NonZeroUsize::from_str(columns)
                .with_context(|| format!("--tile-columns must be a positive integer, got {}", columns))?;
            Ok(TileLayout::RowMajor { columns })
        }
        None => Ok(TileLayout::Stacked),
    }
}

pub fn tile_order(matches: &ArgMatches) -> Result<TileOrder> {
    let order = matches
        .get_one::<String>("tile-order")
        .context("--tile-order has a default")?;
    TileOrder::from_str(order).map_err(|e| anyhow!(e))
}

///
/// Load a run-stats table with the reader matching its layout.
///
pub fn load_table(path: &Path, layout: TileLayout) -> Result<Table> {
    let table = match layout {
        TileLayout::Stacked => Table::load_stacked(path),
        TileLayout::RowMajor { .. } => Table::load(path),
    }
    .with_context(|| format!("Failed to load run stats from {}", path.display()))?;
    Ok(table)
}

fn quality_limits(matches: &ArgMatches, config: &RenderConfig) -> Result<Option<(f64, f64)>> {
    let Some(values) = matches.get_many::<String>("q-lims") else {
        return Ok(None);
    };

    let values = values
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("--q-lims values must be numbers, got {}", v))
        })
        .collect::<Result<Vec<f64>>>()?;

    let Some(&lower) = values.first() else {
        bail!("--q-lims needs a lower bound");
    };
    // a single value only moves the lower bound
    let upper = match values.get(1) {
        Some(upper) => *upper,
        None => config
            .scale_for(QUAL_FEATURE)
            .upper
            .unwrap_or(QualityBounds::default().upper),
    };

    if upper < lower {
        bail!("--q-lims lower bound {} is above the upper bound {}", lower, upper);
    }

    Ok(Some((lower, upper)))
}

fn render_config(matches: &ArgMatches) -> Result<RenderConfig> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => RenderConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read render config {}", path))?,
        None => RenderConfig::default(),
    };

    Ok(match quality_limits(matches, &config)? {
        Some((lower, upper)) => config.with_quality_bounds(lower, upper),
        None => config,
    })
}

fn quality_bounds(config: &RenderConfig) -> QualityBounds {
    let defaults = QualityBounds::default();
    let scale = config.scale_for(QUAL_FEATURE);
    QualityBounds {
        lower: scale.lower.unwrap_or(defaults.lower),
        upper: scale.upper.unwrap_or(defaults.upper),
    }
}

fn renderers(matches: &ArgMatches) -> Result<Vec<Box<dyn TrackRenderer>>> {
    let mut renderers: Vec<Box<dyn TrackRenderer>> = Vec::new();

    if let Some(outfile) = matches.get_one::<String>("outfile") {
        let cell_size: u32 = matches
            .get_one::<String>("cell-size")
            .context("--cell-size has a default")?
            .parse()
            .context("--cell-size must be a positive integer")?;
        if cell_size == 0 {
            bail!("--cell-size must be a positive integer");
        }

        let mut png = PngMosaicRenderer::new(PathBuf::from(outfile));
        png.cell_size = cell_size;
        renderers.push(Box::new(png));
    }

    if let Some(npy_dir) = matches.get_one::<String>("npy-dir") {
        renderers.push(Box::new(NpyTrackWriter::new(PathBuf::from(npy_dir))));
    }

    Ok(renderers)
}

pub fn run_plot(matches: &ArgMatches) -> Result<()> {
    let mode = matches.get_one::<String>("mode").context("mode is required")?;
    let mode = ComposeMode::from_str(mode)?;

    let infile = matches
        .get_one::<String>("infile")
        .context("infile is required")?;

    let mut renderers = renderers(matches)?;
    if renderers.is_empty() {
        bail!("Nothing to write: pass --outfile and/or --npy-dir");
    }

    let layout = tile_layout(matches)?;
    let config = render_config(matches)?;

    let options = MosaicOptions {
        mode,
        features: many(matches, "features"),
        lanes: many(matches, "lanes"),
        reads: many(matches, "reads"),
        mask_qual: matches.get_flag("mask-qual"),
        quality: quality_bounds(&config),
        tile_order: tile_order(matches)?,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(120));

    pb.set_message(format!("Loading {}", infile));
    let table = load_table(Path::new(infile), layout)?;
    let tile_shape = resolve(&table, layout);
    info!("Tile shape {}", tile_shape);

    pb.set_message("Composing tracks");
    let source = TileView::new(&table, layout);
    let tracks = compose(&source, &options, tile_shape)?;

    if tracks.is_empty() {
        pb.finish_and_clear();
        warn!("No tracks match the requested features, reads and lanes; nothing written.");
        return Ok(());
    }

    pb.set_message(format!("Writing {} tracks", tracks.len()));
    for renderer in renderers.iter_mut() {
        renderer.render(&tracks, &config)?;
    }
    pb.finish_and_clear();

    info!("Plotted {} tracks in {} mode", tracks.len(), mode);

    Ok(())
}
