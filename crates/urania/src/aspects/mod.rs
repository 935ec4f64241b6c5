pub mod calculator;
pub mod motion;
pub mod orbs;
pub mod types;

pub use calculator::{collect_candidates, is_trivial_pair, AspectCalculator};
pub use motion::{is_applying, PROJECTION_STEP_DAYS};
pub use orbs::OrbTable;
pub use types::{Aspect, AspectKind, AspectSettings};
