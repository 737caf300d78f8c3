//! ACI 318M Strength Load Combinations
//!
//! The strength envelope used for pad foundation design (ACI 318M 5.3.1):
//!
//! | Name | Equation              | Purpose                                 |
//! |------|-----------------------|-----------------------------------------|
//! | U1   | 1.2D + 1.6L           | Gravity                                 |
//! | U2   | 1.2D + 1.6L + 0.5W    | Gravity with companion wind             |
//! | U3   | 1.2D + 1.0W + 1.0L    | Wind with companion live                |
//! | U4   | 0.9D + 1.0W           | Minimum dead, catches uplift/overturning |
//! | U5   | 1.2D + 1.0L + 1.0E    | Seismic with companion live             |
//! | U6   | 0.9D + 1.0E           | Minimum dead with seismic               |
//!
//! The dead, live, wind and minimum-dead factors come from [`LoadFactors`],
//! so overrides flow straight into the table. The table is built fresh on
//! every call and never shared between callers.
//!
//! ## Governing Selection
//!
//! Compression (axial) governs by the maximum combined value. Horizontal
//! forces and moments can act in either sense, so they govern by the largest
//! magnitude with the sign kept. Ties resolve to the first combination in
//! table order.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::aci_factors::{LoadFactors, LIVE_COMPANION_FACTOR, SEISMIC_LOAD_FACTOR, WIND_COMPANION_FACTOR};
use super::load_types::LoadType;
use super::LoadCase;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use footing_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("U1", "1.2D + 1.6L")
///     .with_factor(LoadType::Dead, 1.2)
///     .with_factor(LoadType::Live, 1.6);
///
/// let case = LoadCase::new("Axial")
///     .with_load(LoadType::Dead, 100.0)
///     .with_load(LoadType::Live, 50.0);
///
/// assert!((combo.apply(&case) - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "U1")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: BTreeMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load.
    ///
    /// Terms are summed in [`LoadType::ALL`] order so repeated evaluation is
    /// bit-identical.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        LoadType::ALL
            .iter()
            .map(|load_type| self.get_factor(*load_type) * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// Format a factor the way combination equations are written ("1.0W", "0.5W").
fn factor_label(factor: f64) -> String {
    if (factor - factor.round()).abs() < 1e-12 {
        format!("{:.1}", factor)
    } else {
        format!("{}", factor)
    }
}

/// Build the ACI 318M strength envelope from a set of load factors.
///
/// # Example
/// ```
/// use footing_core::aci_factors::LoadFactors;
/// use footing_core::loads::{aci318_strength_combinations, LoadType};
///
/// let combos = aci318_strength_combinations(&LoadFactors::default());
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0].equation, "1.2D + 1.6L");
/// assert_eq!(combos[3].get_factor(LoadType::Dead), 0.9);
/// ```
pub fn aci318_strength_combinations(factors: &LoadFactors) -> Vec<LoadCombination> {
    let d = factor_label(factors.dead);
    let l = factor_label(factors.live);
    let w = factor_label(factors.wind);
    let d_min = factor_label(factors.dead_minimum);
    let w_c = factor_label(WIND_COMPANION_FACTOR);
    let l_c = factor_label(LIVE_COMPANION_FACTOR);
    let e = factor_label(SEISMIC_LOAD_FACTOR);

    vec![
        LoadCombination::new("U1", format!("{d}D + {l}L"))
            .with_factor(LoadType::Dead, factors.dead)
            .with_factor(LoadType::Live, factors.live),

        LoadCombination::new("U2", format!("{d}D + {l}L + {w_c}W"))
            .with_factor(LoadType::Dead, factors.dead)
            .with_factor(LoadType::Live, factors.live)
            .with_factor(LoadType::Wind, WIND_COMPANION_FACTOR),

        LoadCombination::new("U3", format!("{d}D + {w}W + {l_c}L"))
            .with_factor(LoadType::Dead, factors.dead)
            .with_factor(LoadType::Wind, factors.wind)
            .with_factor(LoadType::Live, LIVE_COMPANION_FACTOR),

        LoadCombination::new("U4", format!("{d_min}D + {w}W"))
            .with_factor(LoadType::Dead, factors.dead_minimum)
            .with_factor(LoadType::Wind, factors.wind),

        LoadCombination::new("U5", format!("{d}D + {l_c}L + {e}E"))
            .with_factor(LoadType::Dead, factors.dead)
            .with_factor(LoadType::Live, LIVE_COMPANION_FACTOR)
            .with_factor(LoadType::Seismic, SEISMIC_LOAD_FACTOR),

        LoadCombination::new("U6", format!("{d_min}D + {e}E"))
            .with_factor(LoadType::Dead, factors.dead_minimum)
            .with_factor(LoadType::Seismic, SEISMIC_LOAD_FACTOR),
    ]
}

/// Value of one combination applied to one load component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    /// Combination identifier
    pub name: String,
    /// Combination equation
    pub equation: String,
    /// Combined (factored) value
    pub value: f64,
}

impl CombinationResult {
    fn from_combination(combo: &LoadCombination, case: &LoadCase) -> Self {
        CombinationResult {
            name: combo.name.clone(),
            equation: combo.equation.clone(),
            value: combo.apply(case),
        }
    }
}

/// Apply every combination and return all results in table order.
pub fn evaluate_combinations(case: &LoadCase, combinations: &[LoadCombination]) -> Vec<CombinationResult> {
    combinations
        .iter()
        .map(|combo| CombinationResult::from_combination(combo, case))
        .collect()
}

/// Pick the first result for which `better(candidate, incumbent)` never fires.
fn select_first<F>(case: &LoadCase, combinations: &[LoadCombination], better: F) -> Option<CombinationResult>
where
    F: Fn(f64, f64) -> bool,
{
    let mut selected: Option<CombinationResult> = None;
    for combo in combinations {
        let candidate = CombinationResult::from_combination(combo, case);
        let replace = match &selected {
            None => true,
            Some(current) => better(candidate.value, current.value),
        };
        if replace {
            selected = Some(candidate);
        }
    }
    selected
}

/// Find the governing (maximum) load combination result
///
/// Returns `None` only for an empty combination list.
///
/// # Example
/// ```
/// use footing_core::aci_factors::LoadFactors;
/// use footing_core::loads::{aci318_strength_combinations, find_governing_combination, LoadCase, LoadType};
///
/// let case = LoadCase::new("Axial")
///     .with_load(LoadType::Dead, 938.75)
///     .with_load(LoadType::Live, 300.0);
///
/// let governing = find_governing_combination(&case, &aci318_strength_combinations(&LoadFactors::default())).unwrap();
/// assert!((governing.value - 1606.5).abs() < 1e-9);
/// assert_eq!(governing.name, "U1");
/// ```
pub fn find_governing_combination(case: &LoadCase, combinations: &[LoadCombination]) -> Option<CombinationResult> {
    select_first(case, combinations, |candidate, current| candidate > current)
}

/// Find the minimum load combination result (critical for uplift)
///
/// Negative values indicate net uplift.
pub fn find_minimum_combination(case: &LoadCase, combinations: &[LoadCombination]) -> Option<CombinationResult> {
    select_first(case, combinations, |candidate, current| candidate < current)
}

/// Find the combination with the largest magnitude, keeping its sign.
///
/// Used for horizontal forces and moments, which can act in either sense.
pub fn find_governing_magnitude(case: &LoadCase, combinations: &[LoadCombination]) -> Option<CombinationResult> {
    select_first(case, combinations, |candidate, current| candidate.abs() > current.abs())
}

/// Results from finding both max and min governing combinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoverningResults {
    /// Maximum factored value (governs for strength design)
    pub max: CombinationResult,
    /// Minimum factored value (governs for uplift)
    pub min: CombinationResult,
}

/// Find both maximum and minimum governing combinations
///
/// # Example
/// ```
/// use footing_core::aci_factors::LoadFactors;
/// use footing_core::loads::{aci318_strength_combinations, find_governing_min_max, LoadCase, LoadType};
///
/// let case = LoadCase::new("Axial")
///     .with_load(LoadType::Dead, 100.0)
///     .with_load(LoadType::Wind, -150.0);
///
/// let results = find_governing_min_max(&case, &aci318_strength_combinations(&LoadFactors::default())).unwrap();
/// assert!(results.min.value < 0.0);
/// assert_eq!(results.min.name, "U4");
/// ```
pub fn find_governing_min_max(case: &LoadCase, combinations: &[LoadCombination]) -> Option<GoverningResults> {
    Some(GoverningResults {
        max: find_governing_combination(case, combinations)?,
        min: find_minimum_combination(case, combinations)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos() -> Vec<LoadCombination> {
        aci318_strength_combinations(&LoadFactors::default())
    }

    #[test]
    fn test_combination_table() {
        let combos = combos();
        let equations: Vec<&str> = combos.iter().map(|c| c.equation.as_str()).collect();
        assert_eq!(
            equations,
            vec![
                "1.2D + 1.6L",
                "1.2D + 1.6L + 0.5W",
                "1.2D + 1.0W + 1.0L",
                "0.9D + 1.0W",
                "1.2D + 1.0L + 1.0E",
                "0.9D + 1.0E",
            ]
        );
    }

    #[test]
    fn test_overridden_factors_flow_into_table() {
        let factors = LoadFactors { dead: 1.4, live: 1.7, ..LoadFactors::default() };
        let combos = aci318_strength_combinations(&factors);
        assert_eq!(combos[0].equation, "1.4D + 1.7L");
        assert_eq!(combos[0].get_factor(LoadType::Dead), 1.4);
        assert_eq!(combos[2].get_factor(LoadType::Live), 1.0);
    }

    #[test]
    fn test_tables_are_independent() {
        let mut first = combos();
        first[0].factors.insert(LoadType::Dead, 99.0);
        let second = combos();
        assert_eq!(second[0].get_factor(LoadType::Dead), 1.2);
    }

    #[test]
    fn test_apply_combination() {
        let case = LoadCase::new("Test")
            .with_load(LoadType::Dead, 20.0)
            .with_load(LoadType::Live, 40.0);

        // 1.2D + 1.6L = 24 + 64 = 88
        assert!((combos()[0].apply(&case) - 88.0).abs() < 1e-9);
    }

    #[test]
    fn test_dead_live_governs_without_wind() {
        let case = LoadCase::new("Axial")
            .with_load(LoadType::Dead, 500.0)
            .with_load(LoadType::Live, 200.0);
        let governing = find_governing_combination(&case, &combos()).unwrap();
        assert_eq!(governing.value, 1.2 * 500.0 + 1.6 * 200.0);
        assert_eq!(governing.name, "U1");
    }

    #[test]
    fn test_tie_resolves_to_first() {
        // With W = 0, U1 and U2 are identical; U1 must be reported.
        let case = LoadCase::new("Axial").with_load(LoadType::Dead, 100.0);
        let governing = find_governing_combination(&case, &combos()).unwrap();
        assert_eq!(governing.name, "U1");
    }

    #[test]
    fn test_wind_governs() {
        let case = LoadCase::new("Axial")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Live, 10.0)
            .with_load(LoadType::Wind, 400.0);
        let governing = find_governing_combination(&case, &combos()).unwrap();
        // U3: 120 + 400 + 10 = 530
        assert!((governing.value - 530.0).abs() < 1e-9);
        assert_eq!(governing.name, "U3");
    }

    #[test]
    fn test_magnitude_keeps_sign() {
        let case = LoadCase::new("Moment")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Wind, -200.0);
        let governing = find_governing_magnitude(&case, &combos()).unwrap();
        // U3: 12 - 200 = -188, U4: 9 - 200 = -191
        assert!((governing.value - (-191.0)).abs() < 1e-9);
        assert_eq!(governing.name, "U4");
    }

    #[test]
    fn test_minimum_dead_catches_uplift() {
        let case = LoadCase::new("Axial")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Wind, -150.0);
        let min = find_minimum_combination(&case, &combos()).unwrap();
        // U4: 90 - 150 = -60
        assert!((min.value - (-60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_table() {
        let case = LoadCase::new("Axial").with_load(LoadType::Dead, 1.0);
        assert!(find_governing_combination(&case, &[]).is_none());
        assert!(find_governing_min_max(&case, &[]).is_none());
    }

    #[test]
    fn test_evaluate_all() {
        let case = LoadCase::new("Axial")
            .with_load(LoadType::Dead, 100.0)
            .with_load(LoadType::Live, 50.0);
        let results = evaluate_combinations(&case, &combos());
        assert_eq!(results.len(), 6);
        assert!((results[3].value - 90.0).abs() < 1e-9);
        assert_eq!(results[5].name, "U6");
    }

    #[test]
    fn test_combination_serialization() {
        let combo = combos().remove(0);
        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, combo);
    }
}
