pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod types;

pub use geometry::{
    ArcPath, PathCommand, Point, SectorDescriptor, compute_sectors, format_label, percentage_of,
    point_on_circle, sector_to_arc_path,
};
pub use hit_test::sector_at;
pub use layout::PieLayout;
pub use types::{DataPoint, Dataset, Viewport};
