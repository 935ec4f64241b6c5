pub mod resolver;
pub mod sect;
pub mod types;

pub use resolver::{cusp_house_position, HouseResolver};
pub use sect::{classify_sect, Sect};
pub use types::{HouseFrame, HousePlacement};
