use qcmosaic_mosaic::Track;

use crate::config::RenderConfig;
use crate::errors::RenderResult;

///
/// Anything that can take the composed tracks, in mosaic order, and write them out.
///
pub trait TrackRenderer {
    fn render(&mut self, tracks: &[Track], config: &RenderConfig) -> RenderResult<()>;
}
