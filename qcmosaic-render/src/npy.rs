use std::fs::{File, create_dir_all};
use std::io::BufWriter;
use std::path::PathBuf;

use log::info;
use ndarray_npy::write_npy;
use serde::Serialize;

use qcmosaic_mosaic::Track;

use crate::colormap::Colormap;
use crate::config::RenderConfig;
use crate::consts::MANIFEST_FILE;
use crate::errors::RenderResult;
use crate::renderer::TrackRenderer;

/// One entry of `manifest.json`.
#[derive(Debug, Serialize)]
pub struct TrackManifestEntry {
    pub index: usize,
    pub title: String,
    pub feature: String,
    pub read: String,
    pub lane: String,
    pub rows: usize,
    pub cols: usize,
    pub file: String,
    pub colormap: Colormap,
    pub lower: f64,
    pub upper: f64,
}

///
/// Writes every track matrix to its own `.npy` file and a `manifest.json` describing
/// them, so the mosaic can be drawn by another tool.
///
pub struct NpyTrackWriter {
    pub out_dir: PathBuf,
}

impl NpyTrackWriter {
    pub fn new(out_dir: PathBuf) -> Self {
        NpyTrackWriter { out_dir }
    }

    fn file_name(index: usize, track: &Track) -> String {
        format!(
            "{:03}_{}_{}_{}.npy",
            index, track.key.feature, track.key.read, track.key.lane
        )
    }
}

impl TrackRenderer for NpyTrackWriter {
    fn render(&mut self, tracks: &[Track], config: &RenderConfig) -> RenderResult<()> {
        create_dir_all(&self.out_dir)?;

        let mut manifest = Vec::with_capacity(tracks.len());
        for (index, track) in tracks.iter().enumerate() {
            let file = Self::file_name(index, track);
            write_npy(self.out_dir.join(&file), &track.matrix)?;

            let scale = config.scale_for(track.feature());
            let (lower, upper) = scale.limits(&track.matrix);
            let (rows, cols) = track.dim();

            manifest.push(TrackManifestEntry {
                index,
                title: track.title.clone(),
                feature: track.key.feature.clone(),
                read: track.key.read.clone(),
                lane: track.key.lane.clone(),
                rows,
                cols,
                file,
                colormap: scale.colormap,
                lower,
                upper,
            });
        }

        let manifest_path = self.out_dir.join(MANIFEST_FILE);
        let writer = BufWriter::new(File::create(&manifest_path)?);
        serde_json::to_writer_pretty(writer, &manifest)?;

        info!(
            "{} tracks written to {}",
            tracks.len(),
            self.out_dir.display()
        );

        Ok(())
    }
}
