use std::fmt::{self, Display};
use std::str::FromStr;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::errors::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    Hsv,
    Hot,
    Jet,
    Gray,
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn to_rgb(r: f64, g: f64, b: f64) -> Rgb<u8> {
    Rgb([
        (clamp01(r) * 255.0).round() as u8,
        (clamp01(g) * 255.0).round() as u8,
        (clamp01(b) * 255.0).round() as u8,
    ])
}

impl Colormap {
    ///
    /// Map a position in `[0, 1]` to a colour. Values outside the range are clamped.
    ///
    pub fn rgb(&self, t: f64) -> Rgb<u8> {
        let t = clamp01(t);
        match self {
            Colormap::Gray => to_rgb(t, t, t),
            Colormap::Jet => to_rgb(
                1.5 - (4.0 * t - 3.0).abs(),
                1.5 - (4.0 * t - 2.0).abs(),
                1.5 - (4.0 * t - 1.0).abs(),
            ),
            // black -> red -> yellow -> white
            Colormap::Hot => to_rgb(
                t / 0.365,
                (t - 0.365) / (0.746 - 0.365),
                (t - 0.746) / (1.0 - 0.746),
            ),
            // full hue circle, red at both ends
            Colormap::Hsv => {
                let h = t * 6.0;
                let x = 1.0 - (h % 2.0 - 1.0).abs();
                let (r, g, b) = match h as u32 {
                    0 => (1.0, x, 0.0),
                    1 => (x, 1.0, 0.0),
                    2 => (0.0, 1.0, x),
                    3 => (0.0, x, 1.0),
                    4 => (x, 0.0, 1.0),
                    _ => (1.0, 0.0, x),
                };
                to_rgb(r, g, b)
            }
        }
    }
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hsv" => Ok(Colormap::Hsv),
            "hot" => Ok(Colormap::Hot),
            "jet" => Ok(Colormap::Jet),
            "gray" | "grey" => Ok(Colormap::Gray),
            _ => Err(RenderError::UnknownColormap(s.to_string())),
        }
    }
}

impl Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colormap::Hsv => "hsv",
            Colormap::Hot => "hot",
            Colormap::Jet => "jet",
            Colormap::Gray => "gray",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Colormap::Gray, 0.0, [0, 0, 0])]
    #[case(Colormap::Gray, 1.0, [255, 255, 255])]
    #[case(Colormap::Hot, 0.0, [0, 0, 0])]
    #[case(Colormap::Hot, 1.0, [255, 255, 255])]
    #[case(Colormap::Jet, 0.5, [128, 255, 128])]
    #[case(Colormap::Hsv, 0.0, [255, 0, 0])]
    #[case(Colormap::Hsv, 1.0, [255, 0, 0])]
    fn test_colormap_endpoints(#[case] cmap: Colormap, #[case] t: f64, #[case] expected: [u8; 3]) {
        assert_eq!(cmap.rgb(t), Rgb(expected));
    }

    #[rstest]
    fn test_colormap_clamps_out_of_range() {
        assert_eq!(Colormap::Jet.rgb(-3.0), Colormap::Jet.rgb(0.0));
        assert_eq!(Colormap::Jet.rgb(7.0), Colormap::Jet.rgb(1.0));
    }

    #[rstest]
    #[case("hsv", Colormap::Hsv)]
    #[case("HOT", Colormap::Hot)]
    #[case("grey", Colormap::Gray)]
    fn test_colormap_from_str(#[case] s: &str, #[case] expected: Colormap) {
        assert_eq!(Colormap::from_str(s).unwrap(), expected);
    }

    #[rstest]
    fn test_unknown_colormap() {
        assert!(matches!(
            Colormap::from_str("rainbow"),
            Err(RenderError::UnknownColormap(_))
        ));
    }
}
