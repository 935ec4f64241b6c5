pub mod builder;
pub mod packing;
pub mod settings;
pub mod types;

pub use builder::{cast_chart, compute_chart, ChartRequest};
pub use settings::ChartSettings;
pub use types::{Chart, ChartMeta, PackedBody, PackedPoint, PlacedBody};
