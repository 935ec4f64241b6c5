pub mod bodies;
pub mod canned;
pub mod provider;
pub mod time;
pub mod types;

pub use bodies::{
    parse_asteroid_list, BodyCatalog, BodySpec, PointCategory, ASTEROID_OFFSET, MARS, MOON, SUN,
    VENUS,
};
pub use canned::CannedEphemeris;
pub use provider::{EphemerisError, EphemerisProvider, HousePositionQuery, HousePositionSource};
pub use time::{datetime_from_julian_day, julian_day_ut};
pub use types::{Ayanamsa, GeoLocation, HouseSystem, RawHouses, RawPosition, Zodiac};
