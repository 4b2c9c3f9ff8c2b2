use std::path::PathBuf;

use image::{Rgb, RgbImage};
use log::info;

use qcmosaic_mosaic::Track;

use crate::config::{RenderConfig, normalize};
use crate::consts::{DEFAULT_CELL_SIZE, DEFAULT_TRACK_GAP, GAP_COLOR};
use crate::errors::{RenderError, RenderResult};
use crate::renderer::TrackRenderer;

///
/// Draws the tracks as one image, stacked top to bottom in the order they are given.
///
pub struct PngMosaicRenderer {
    pub path: PathBuf,
    /// pixels per matrix cell, in both directions
    pub cell_size: u32,
    /// pixels between two tracks
    pub gap: u32,
}

impl PngMosaicRenderer {
    pub fn new(path: PathBuf) -> Self {
        PngMosaicRenderer {
            path,
            cell_size: DEFAULT_CELL_SIZE,
            gap: DEFAULT_TRACK_GAP,
        }
    }

    ///
    /// Draw the mosaic in memory.
    ///
    pub fn draw(&self, tracks: &[Track], config: &RenderConfig) -> RenderResult<RgbImage> {
        if tracks.is_empty() {
            return Err(RenderError::EmptyMosaic);
        }

        let cell = self.cell_size as usize;
        let gap = self.gap as usize;

        let width = tracks.iter().map(|t| t.dim().1).max().unwrap_or(0) * cell;
        let height = tracks.iter().map(|t| t.dim().0 * cell).sum::<usize>()
            + gap * (tracks.len() - 1);

        let too_large = || RenderError::ImageTooLarge { width, height };
        let img_width = u32::try_from(width).map_err(|_| too_large())?;
        let img_height = u32::try_from(height).map_err(|_| too_large())?;

        info!("Image dimensions: {} x {}", img_width, img_height);

        let mut img = RgbImage::from_pixel(img_width, img_height, Rgb(GAP_COLOR));

        let mut y_offset = 0_usize;
        for track in tracks.iter() {
            let scale = config.scale_for(track.feature());
            let (lower, upper) = scale.limits(&track.matrix);

            for ((row, col), value) in track.matrix.indexed_iter() {
                let color = if value.is_nan() {
                    config.missing_color
                } else {
                    scale.colormap.rgb(normalize(*value, lower, upper))
                };
                fill_cell(&mut img, col * cell, y_offset + row * cell, cell, color);
            }

            y_offset += track.dim().0 * cell + gap;
        }

        Ok(img)
    }
}

fn fill_cell(img: &mut RgbImage, x_start: usize, y_start: usize, size: usize, color: Rgb<u8>) {
    // the image was sized to hold every cell, so the casts stay in range
    for dy in 0..size {
        for dx in 0..size {
            img.put_pixel((x_start + dx) as u32, (y_start + dy) as u32, color);
        }
    }
}

impl TrackRenderer for PngMosaicRenderer {
    fn render(&mut self, tracks: &[Track], config: &RenderConfig) -> RenderResult<()> {
        let img = self.draw(tracks, config)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        img.save(&self.path)?;
        info!("Mosaic written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use pretty_assertions::assert_eq;
    use qcmosaic_mosaic::TrackKey;
    use rstest::*;

    use crate::colormap::Colormap;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new(
                TrackKey::new("QUAL", "1", "1"),
                array![[30.0, f64::NAN], [40.0, 35.0]],
            ),
            Track::new(TrackKey::new("LEN", "1", "1"), array![[70.0, 80.0, 75.0]]),
        ]
    }

    #[rstest]
    fn test_draw_dimensions() {
        let renderer = PngMosaicRenderer {
            path: PathBuf::from("unused.png"),
            cell_size: 2,
            gap: 1,
        };
        let img = renderer.draw(&tracks(), &RenderConfig::default()).unwrap();

        // widest track has 3 columns; 2 + 1 rows of cells plus one gap
        assert_eq!(img.dimensions(), (6, 7));
    }

    #[rstest]
    fn test_draw_colors() {
        let renderer = PngMosaicRenderer {
            path: PathBuf::from("unused.png"),
            cell_size: 1,
            gap: 1,
        };
        let config = RenderConfig::default();
        let img = renderer.draw(&tracks(), &config).unwrap();

        assert_eq!(*img.get_pixel(0, 0), Colormap::Hot.rgb(0.0));
        assert_eq!(*img.get_pixel(1, 0), config.missing_color);
        assert_eq!(*img.get_pixel(0, 1), Colormap::Hot.rgb(1.0));
        // the first track is narrower than the image
        assert_eq!(*img.get_pixel(2, 0), Rgb(GAP_COLOR));
        // gap row
        assert_eq!(*img.get_pixel(0, 2), Rgb(GAP_COLOR));
        assert_eq!(*img.get_pixel(2, 3), Colormap::Jet.rgb(0.5));
    }

    #[rstest]
    fn test_draw_empty_mosaic() {
        let renderer = PngMosaicRenderer::new(PathBuf::from("unused.png"));
        let result = renderer.draw(&[], &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyMosaic)));
    }

    #[rstest]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mosaic.png");

        let mut renderer = PngMosaicRenderer::new(path.clone());
        renderer.render(&tracks(), &RenderConfig::default()).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 3 * DEFAULT_CELL_SIZE);
    }
}
