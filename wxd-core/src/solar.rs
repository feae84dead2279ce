use serde::{Deserialize, Serialize};

/// Installed panel power and conversion efficiency used for the yield estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarParams {
    /// Installed peak power in kW
    pub installed_kw: f64,
    /// Fraction in `0..=1`
    pub efficiency: f64,
}

impl SolarParams {
    /// Estimated energy in kWh for the given hours of sunshine.
    pub fn yield_kwh(&self, sunshine_hours: f64) -> f64 {
        sunshine_hours * self.installed_kw * self.efficiency
    }
}

impl Default for SolarParams {
    fn default() -> Self {
        Self {
            installed_kw: 1.0,
            efficiency: 0.2,
        }
    }
}
