use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotKind {
    Fortune,
    Spirit,
    Eros,
    Courage,
}

impl LotKind {
    pub const ALL: [LotKind; 4] = [LotKind::Fortune, LotKind::Spirit, LotKind::Eros, LotKind::Courage];

    pub fn name(&self) -> &'static str {
        match self {
            LotKind::Fortune => "Part of Fortune",
            LotKind::Spirit => "Part of Spirit",
            LotKind::Eros => "Lot of Eros",
            LotKind::Courage => "Lot of Courage",
        }
    }
}

impl fmt::Display for LotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A computed lot; it has no latitude and never moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub kind: LotKind,
    pub longitude: f64,
}

/// Body longitudes the lots are built from; `None` marks a failed body
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LotInputs {
    pub sun: Option<f64>,
    pub moon: Option<f64>,
    pub venus: Option<f64>,
    pub mars: Option<f64>,
}
