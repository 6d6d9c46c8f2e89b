use std::fmt;

use serde::{Deserialize, Serialize};

/// Land-use tag of a cell. Fixed for the lifetime of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneType {
    Residential,
    Commercial,
    Industrial,
    Road,
    PowerLine,
    PowerLineOverRoad,
    PowerPlant,
    Empty,
}

const SYMBOLS: [(ZoneType, char); 8] = [
    (ZoneType::Residential, 'R'),
    (ZoneType::Commercial, 'C'),
    (ZoneType::Industrial, 'I'),
    (ZoneType::Road, '-'),
    (ZoneType::PowerLine, 'T'),
    (ZoneType::PowerLineOverRoad, '#'),
    (ZoneType::PowerPlant, 'P'),
    (ZoneType::Empty, ' '),
];

impl ZoneType {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        SYMBOLS
            .iter()
            .find(|(_, c)| *c == symbol)
            .map(|(zone, _)| *zone)
    }

    pub fn symbol(self) -> char {
        SYMBOLS
            .iter()
            .find(|(zone, _)| *zone == self)
            .map(|(_, c)| *c)
            .unwrap_or(' ')
    }

    pub fn is_power_line(self) -> bool {
        matches!(self, ZoneType::PowerLine | ZoneType::PowerLineOverRoad)
    }

    /// Residential, commercial and industrial zones carry a population.
    pub fn is_zoned(self) -> bool {
        matches!(
            self,
            ZoneType::Residential | ZoneType::Commercial | ZoneType::Industrial
        )
    }

    pub fn max_population(self) -> u32 {
        match self {
            ZoneType::Residential => 4,
            ZoneType::Commercial | ZoneType::Industrial => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_zone_maps_back_to_itself() {
        for (zone, symbol) in SYMBOLS {
            assert_eq!(ZoneType::from_symbol(symbol), Some(zone));
            assert_eq!(zone.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(ZoneType::from_symbol('X'), None);
        assert_eq!(ZoneType::from_symbol('r'), None);
    }

    #[test]
    fn population_caps() {
        assert_eq!(ZoneType::Residential.max_population(), 4);
        assert_eq!(ZoneType::Industrial.max_population(), 2);
        assert_eq!(ZoneType::Commercial.max_population(), 2);
        assert_eq!(ZoneType::Road.max_population(), 0);
    }
}
