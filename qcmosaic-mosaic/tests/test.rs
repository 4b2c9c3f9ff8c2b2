use std::num::NonZeroUsize;

use ndarray::s;
use qcmosaic_core::models::{Table, TileLayout, TileOrder};
use qcmosaic_mosaic::{ComposeMode, MosaicOptions, TileShape, TileView, compose, resolve};

use pretty_assertions::assert_eq;
use rstest::*;

#[fixture]
fn stacked_table() -> Table {
    Table::load_stacked("../tests/data/run_stats.tsv").unwrap()
}

#[fixture]
fn flat_table() -> Table {
    Table::load("../tests/data/run_stats_flat.tsv").unwrap()
}

#[rstest]
fn test_flat_example_track(flat_table: Table) {
    let layout = TileLayout::RowMajor {
        columns: NonZeroUsize::new(2).unwrap(),
    };
    let shape = resolve(&flat_table, layout);
    assert_eq!(shape, TileShape::new(2, 2));

    // tile "2" is not in the file, but the track should still span three tiles
    let mut table = flat_table.clone();
    table.insert(
        "F2_R1_L1_2".parse().unwrap(),
        qcmosaic_core::models::Row::new(vec![0.0; 4]),
    );

    let source = TileView::new(&table, layout);
    let options = MosaicOptions {
        features: Some(vec!["F1".to_string()]),
        ..Default::default()
    };
    let tracks = compose(&source, &options, shape).unwrap();

    assert_eq!(tracks.len(), 1);
    let matrix = &tracks[0].matrix;
    assert_eq!(tracks[0].title, "F1 RR1 LL1");
    assert_eq!(matrix.dim(), (2, 6));
    assert!(matrix.slice(s![.., 0..2]).iter().all(|v| *v == 1.0));
    assert!(matrix.slice(s![.., 2..4]).iter().all(|v| v.is_nan()));
    assert!(matrix.slice(s![.., 4..6]).iter().all(|v| *v == 2.0));
}

#[rstest]
fn test_stacked_run_stats_tracks(stacked_table: Table) {
    let shape = resolve(&stacked_table, TileLayout::Stacked);
    assert_eq!(shape, TileShape::new(3, 2));

    let source = TileView::new(&stacked_table, TileLayout::Stacked);
    let options = MosaicOptions {
        mode: ComposeMode::ByLane,
        ..Default::default()
    };
    let tracks = compose(&source, &options, shape).unwrap();

    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["QUAL R1 L1", "SEQ-A R1 L1", "QUAL R1 L2", "SEQ-A R1 L2"]
    );

    // every track covers tiles 1, 2 and 10 at full tile width
    for track in tracks.iter() {
        assert_eq!(track.dim(), (2, 9));
    }

    // QUAL lane 1: tile 1 is real, tile 2 is missing, tile 10 is one row tall
    let qual = &tracks[0].matrix;
    assert_eq!(qual[[0, 0]], 35.0);
    assert_eq!(qual[[1, 1]], 20.0);
    assert!(qual.slice(s![.., 3..6]).iter().all(|v| v.is_nan()));
    assert_eq!(qual[[0, 8]], 40.0);
    assert!(qual.slice(s![1.., 6..9]).iter().all(|v| v.is_nan()));

    // SEQ-A lane 2 has no data at all
    assert!(tracks[3].matrix.iter().all(|v| v.is_nan()));
}

#[rstest]
fn test_lexical_tile_order_moves_tile_ten(stacked_table: Table) {
    let shape = resolve(&stacked_table, TileLayout::Stacked);
    let source = TileView::new(&stacked_table, TileLayout::Stacked);
    let options = MosaicOptions {
        features: Some(vec!["QUAL".to_string()]),
        lanes: Some(vec!["1".to_string()]),
        tile_order: TileOrder::Lexical,
        ..Default::default()
    };

    let tracks = compose(&source, &options, shape).unwrap();
    let qual = &tracks[0].matrix;

    // order is now 1, 10, 2
    assert_eq!(qual[[0, 3]], 38.0);
    assert_eq!(qual[[0, 5]], 40.0);
    assert!(qual.slice(s![.., 6..9]).iter().all(|v| v.is_nan()));
}

#[rstest]
fn test_track_widths_match_tile_widths(stacked_table: Table) {
    let shape = resolve(&stacked_table, TileLayout::Stacked);
    let source = TileView::new(&stacked_table, TileLayout::Stacked);
    let tracks = compose(&source, &MosaicOptions::default(), shape).unwrap();

    let n_tiles = stacked_table.tag_sets().tiles.len();
    for track in tracks.iter() {
        assert_eq!(track.dim().1, n_tiles * shape.max_x);
        assert!(track.dim().0 >= 1 && track.dim().0 <= shape.max_y);
    }
}
