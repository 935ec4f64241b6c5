use crate::angles::normalize;
use crate::houses::Sect;
use crate::lots::types::{Lot, LotInputs, LotKind};
use log::warn;

pub fn part_of_fortune(sect: Sect, asc: f64, sun: f64, moon: f64) -> f64 {
    match sect {
        Sect::Diurnal => normalize(asc + (moon - sun)),
        Sect::Nocturnal => normalize(asc - moon + sun),
    }
}

pub fn part_of_spirit(sect: Sect, asc: f64, sun: f64, moon: f64) -> f64 {
    match sect {
        Sect::Diurnal => normalize(asc + (sun - moon)),
        Sect::Nocturnal => normalize(asc - sun + moon),
    }
}

pub fn lot_of_eros(sect: Sect, asc: f64, venus: f64, spirit: f64) -> f64 {
    match sect {
        Sect::Diurnal => normalize(asc + venus - spirit),
        Sect::Nocturnal => normalize(asc + spirit - venus),
    }
}

pub fn lot_of_courage(sect: Sect, asc: f64, mars: f64, spirit: f64) -> f64 {
    match sect {
        Sect::Diurnal => normalize(asc + mars - spirit),
        Sect::Nocturnal => normalize(asc + spirit - mars),
    }
}

/// Lot calculator
pub struct LotCalculator;

impl LotCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute every lot whose inputs are available, in [`LotKind::ALL`] order.
    ///
    /// Eros and Courage are derived from Spirit, so they are skipped whenever
    /// Spirit is.
    pub fn compute(&self, sect: Sect, asc: f64, inputs: &LotInputs) -> Vec<Lot> {
        let mut lots = Vec::with_capacity(4);

        let (fortune, spirit) = match (inputs.sun, inputs.moon) {
            (Some(sun), Some(moon)) => (
                Some(part_of_fortune(sect, asc, sun, moon)),
                Some(part_of_spirit(sect, asc, sun, moon)),
            ),
            _ => {
                warn!("Sun or Moon unavailable; skipping all lots");
                (None, None)
            }
        };

        let eros = match (spirit, inputs.venus) {
            (Some(spirit), Some(venus)) => Some(lot_of_eros(sect, asc, venus, spirit)),
            (Some(_), None) => {
                warn!("Venus unavailable; skipping {}", LotKind::Eros);
                None
            }
            _ => None,
        };

        let courage = match (spirit, inputs.mars) {
            (Some(spirit), Some(mars)) => Some(lot_of_courage(sect, asc, mars, spirit)),
            (Some(_), None) => {
                warn!("Mars unavailable; skipping {}", LotKind::Courage);
                None
            }
            _ => None,
        };

        for (kind, longitude) in LotKind::ALL.into_iter().zip([fortune, spirit, eros, courage]) {
            if let Some(longitude) = longitude {
                lots.push(Lot { kind, longitude });
            }
        }
        lots
    }
}

impl Default for LotCalculator {
    fn default() -> Self {
        Self::new()
    }
}
