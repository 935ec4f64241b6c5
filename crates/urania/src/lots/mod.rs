pub mod calculator;
pub mod types;

pub use calculator::{lot_of_courage, lot_of_eros, part_of_fortune, part_of_spirit, LotCalculator};
pub use types::{Lot, LotInputs, LotKind};
