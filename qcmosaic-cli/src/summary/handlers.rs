use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use qcmosaic_core::models::{Table, TagSets, TileLayout, TileOrder};
use qcmosaic_mosaic::{MosaicOptions, plan, resolve};

use crate::plot::handlers::{load_table, tile_layout, tile_order};

#[derive(Debug, Serialize)]
pub struct TrackSummary {
    pub title: String,
    pub feature: String,
    pub read: String,
    pub lane: String,
    pub present_tiles: usize,
    pub missing_tiles: usize,
}

#[derive(Debug, Serialize)]
pub struct RunStatsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub number_of_tags: usize,
    pub max_n: usize,
    pub width: usize,
    /// (rows, columns) of the largest tile
    pub tile_shape: (usize, usize),
    pub sets: TagSets,
    pub tiles: Vec<String>,
    pub tracks: Vec<TrackSummary>,
}

///
/// Describe a table: its tag sets, the largest tile and, for every (feature, read, lane)
/// track, how many of its tiles are present.
///
pub fn summarize(table: &Table, layout: TileLayout, order: TileOrder) -> RunStatsSummary {
    let sets = table.tag_sets();
    let tiles = sets.sorted_tiles(order);
    let shape = resolve(table, layout);

    let tracks = plan(&sets, &MosaicOptions::default())
        .into_iter()
        .map(|key| {
            let present_tiles = tiles
                .iter()
                .filter(|tile| table.contains(&key.tag(tile)))
                .count();
            TrackSummary {
                title: key.title(),
                feature: key.feature,
                read: key.read,
                lane: key.lane,
                present_tiles,
                missing_tiles: tiles.len() - present_tiles,
            }
        })
        .collect();

    RunStatsSummary {
        path: table.path.clone(),
        number_of_tags: table.len(),
        max_n: table.max_n(),
        width: table.width(),
        tile_shape: (shape.max_y, shape.max_x),
        sets,
        tiles,
        tracks,
    }
}

pub fn run_summary(matches: &ArgMatches) -> Result<()> {
    let infile = matches
        .get_one::<String>("infile")
        .context("infile is required")?;
    let output_path = matches.get_one::<String>("output");

    let layout = tile_layout(matches)?;
    let table = load_table(Path::new(infile), layout)?;
    let summary = summarize(&table, layout, tile_order(matches)?);

    let json =
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary to JSON")?;

    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            eprintln!("Summary written to {}", p);
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::summary::cli::create_summary_cli;

    const RUN_STATS: &str = "../tests/data/run_stats.tsv";

    #[fixture]
    fn table() -> Table {
        Table::load_stacked(RUN_STATS).unwrap()
    }

    #[rstest]
    fn test_summarize(table: Table) {
        let summary = summarize(&table, TileLayout::Stacked, TileOrder::Numeric);

        assert_eq!(summary.number_of_tags, 6);
        assert_eq!(summary.width, 3);
        assert_eq!(summary.tile_shape, (2, 3));
        assert_eq!(summary.tiles, vec!["1", "2", "10"]);

        let counts: Vec<(&str, usize, usize)> = summary
            .tracks
            .iter()
            .map(|t| (t.title.as_str(), t.present_tiles, t.missing_tiles))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("QUAL R1 L1", 2, 1),
                ("QUAL R1 L2", 1, 2),
                ("SEQ-A R1 L1", 3, 0),
                ("SEQ-A R1 L2", 0, 3),
            ]
        );
    }

    #[rstest]
    fn test_summarize_lexical(table: Table) {
        let summary = summarize(&table, TileLayout::Stacked, TileOrder::Lexical);
        assert_eq!(summary.tiles, vec!["1", "10", "2"]);
    }

    #[rstest]
    fn test_run_summary_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("summary.json");

        let matches = create_summary_cli().get_matches_from([
            "summary",
            RUN_STATS,
            "--output",
            out.to_str().unwrap(),
        ]);
        run_summary(&matches).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["number_of_tags"], 6);
        assert_eq!(json["sets"]["features"], serde_json::json!(["QUAL", "SEQ-A"]));
    }
}
