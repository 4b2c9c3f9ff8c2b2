use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use image::Rgb;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use qcmosaic_core::consts::QUAL_FEATURE;

use crate::colormap::Colormap;
use crate::errors::{RenderError, RenderResult};

pub const MISSING_COLOR: [u8; 3] = [211, 211, 211];

///
/// Colormap and colour limits of one feature. A `None` limit is taken from the data.
///
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ColorScale {
    pub colormap: Colormap,
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

impl ColorScale {
    pub fn new(colormap: Colormap, lower: Option<f64>, upper: Option<f64>) -> Self {
        ColorScale {
            colormap,
            lower,
            upper,
        }
    }

    ///
    /// Get the colour limits for a matrix, filling unset limits with the finite
    /// minimum / maximum of the data.
    ///
    pub fn limits(&self, matrix: &Array2<f64>) -> (f64, f64) {
        let (min, max) = matrix
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });

        let lower = self.lower.unwrap_or(if min.is_finite() { min } else { 0.0 });
        let upper = self.upper.unwrap_or(if max.is_finite() { max } else { 1.0 });
        (lower, upper)
    }
}

///
/// Scale a value to `[0, 1]` between `lower` and `upper`.
///
pub fn normalize(value: f64, lower: f64, upper: f64) -> f64 {
    if upper > lower {
        ((value - lower) / (upper - lower)).clamp(0.0, 1.0)
    } else if value >= upper {
        1.0
    } else {
        0.0
    }
}

/// Layout of a colour configuration file.
#[derive(Debug, Default, Deserialize)]
struct RenderConfigFile {
    missing_color: Option<[u8; 3]>,
    #[serde(default)]
    scales: BTreeMap<String, ColorScale>,
}

///
/// Rendering configuration: which colormap and limits each feature is drawn with.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub scales: BTreeMap<String, ColorScale>,
    /// used for features with no entry in `scales`
    pub fallback: ColorScale,
    pub missing_color: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let seq = ColorScale::new(Colormap::Hsv, Some(0.0), Some(0.4));

        let mut scales = BTreeMap::new();
        for nt in ["SEQ-A", "SEQ-T", "SEQ-G", "SEQ-C"] {
            scales.insert(nt.to_string(), seq);
        }
        scales.insert(
            "SEQ-N".to_string(),
            ColorScale::new(Colormap::Hot, Some(0.0), Some(0.4)),
        );
        scales.insert(
            "CLUST".to_string(),
            ColorScale::new(Colormap::Jet, None, None),
        );
        scales.insert(
            QUAL_FEATURE.to_string(),
            ColorScale::new(Colormap::Hot, Some(30.0), Some(40.0)),
        );
        scales.insert(
            "LEN".to_string(),
            ColorScale::new(Colormap::Jet, Some(70.0), Some(80.0)),
        );

        RenderConfig {
            scales,
            fallback: ColorScale::new(Colormap::Jet, None, None),
            missing_color: Rgb(MISSING_COLOR),
        }
    }
}

impl RenderConfig {
    pub fn scale_for(&self, feature: &str) -> &ColorScale {
        self.scales.get(feature).unwrap_or(&self.fallback)
    }

    ///
    /// Set the colour limits of the quality feature.
    ///
    pub fn with_quality_bounds(mut self, lower: f64, upper: f64) -> Self {
        let scale = self
            .scales
            .entry(QUAL_FEATURE.to_string())
            .or_insert(ColorScale::new(Colormap::Hot, None, None));
        scale.lower = Some(lower);
        scale.upper = Some(upper);
        self
    }

    ///
    /// Overlay a TOML configuration on top of this one. Features listed in the file
    /// replace their defaults, other features are kept.
    ///
    pub fn merge_toml(mut self, toml_str: &str) -> RenderResult<Self> {
        let file: RenderConfigFile = toml::from_str(toml_str)?;
        if let Some(color) = file.missing_color {
            self.missing_color = Rgb(color);
        }
        self.scales.extend(file.scales);
        Ok(self)
    }
}

impl TryFrom<&Path> for RenderConfig {
    type Error = RenderError;

    ///
    /// Read a TOML colour configuration, merged over the defaults.
    ///
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        RenderConfig::default().merge_toml(&toml_str)
    }
}
