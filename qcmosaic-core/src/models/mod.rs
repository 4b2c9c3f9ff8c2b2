pub mod row;
pub mod table;
pub mod tag;
pub mod tag_sets;
pub mod tile;

// re-export for cleaner imports
pub use self::row::Row;
pub use self::table::Table;
pub use self::tag::{Tag, compose, decompose};
pub use self::tag_sets::TagSets;
pub use self::tile::{TileLayout, TileOrder};
