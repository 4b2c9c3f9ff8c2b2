pub const DEFAULT_CELL_SIZE: u32 = 4;
pub const DEFAULT_TRACK_GAP: u32 = 2;
pub const GAP_COLOR: [u8; 3] = [255, 255, 255];

pub const MANIFEST_FILE: &str = "manifest.json";
