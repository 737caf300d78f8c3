//! Load case tags for column loads on a pad foundation.
//!
//! Each column load is split by source so the ACI 318M strength combinations
//! can factor the sources separately.

use serde::{Deserialize, Serialize};

/// Load source per ACI 318M 5.3
///
/// # Example
/// ```
/// use footing_core::loads::LoadType;
///
/// let dead = LoadType::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (self-weight of structure, foundation and soil above)
    Dead,
    /// L - Live load
    Live,
    /// W - Wind load
    Wind,
    /// E - Seismic (earthquake) load
    Seismic,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 4] = [LoadType::Dead, LoadType::Live, LoadType::Wind, LoadType::Seismic];

    /// Standard abbreviation code (D, L, W, E)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::Wind => "W",
            LoadType::Seismic => "E",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::Wind => "Wind load",
            LoadType::Seismic => "Seismic load",
        }
    }

    /// Wind and seismic may act in either sense.
    pub fn is_directional(&self) -> bool {
        matches!(self, LoadType::Wind | LoadType::Seismic)
    }

    /// Whether this load type is a gravity load (acts downward)
    pub fn is_gravity(&self) -> bool {
        matches!(self, LoadType::Dead | LoadType::Live)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        assert_eq!(LoadType::Dead.code(), "D");
        assert_eq!(LoadType::Live.code(), "L");
        assert_eq!(LoadType::Wind.code(), "W");
        assert_eq!(LoadType::Seismic.code(), "E");
    }

    #[test]
    fn test_classification() {
        assert!(LoadType::Wind.is_directional());
        assert!(LoadType::Seismic.is_directional());
        assert!(!LoadType::Dead.is_directional());
        assert!(LoadType::Dead.is_gravity());
        assert!(LoadType::Live.is_gravity());
        assert!(!LoadType::Wind.is_gravity());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Seismic).unwrap();
        assert_eq!(json, "\"Seismic\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::Seismic);
    }

    #[test]
    fn test_display() {
        assert_eq!(LoadType::Wind.to_string(), "W");
    }
}
