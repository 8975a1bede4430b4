// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use serde::{Deserialize, Serialize};

// ============= Export Guard Configuration =============

/// Tunables for the SOC-preserving export guard
///
/// Defaults reproduce the behaviour the guard has always had in production,
/// so an empty config file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportGuardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Safety floor SOC (%) to prevent deep discharge
    #[serde(default = "default_min_battery_soc")]
    pub min_battery_soc: f32,

    /// Battery round-trip efficiency (0.0 to 1.0)
    #[serde(default = "default_round_trip_efficiency")]
    pub round_trip_efficiency: f32,

    /// Below this SOC (%) the buy-back price forecast is consulted
    #[serde(default = "default_low_soc_threshold")]
    pub low_soc_threshold: f32,

    /// Hours strictly before this one count as off-peak (24h format)
    #[serde(default = "default_morning_end_hour")]
    pub morning_end_hour: u32,

    /// Hours strictly after this one count as off-peak; from this hour on
    /// profitable export is forced (24h format)
    #[serde(default = "default_evening_start_hour")]
    pub evening_start_hour: u32,
}

// Default value functions for serde
fn default_true() -> bool {
    true
}
fn default_min_battery_soc() -> f32 {
    5.0
}
fn default_round_trip_efficiency() -> f32 {
    0.9
}
fn default_low_soc_threshold() -> f32 {
    30.0
}
fn default_morning_end_hour() -> u32 {
    8
}
fn default_evening_start_hour() -> u32 {
    16
}

impl Default for ExportGuardConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            min_battery_soc: default_min_battery_soc(),
            round_trip_efficiency: default_round_trip_efficiency(),
            low_soc_threshold: default_low_soc_threshold(),
            morning_end_hour: default_morning_end_hour(),
            evening_start_hour: default_evening_start_hour(),
        }
    }
}

impl ExportGuardConfig {
    /// Off-peak window where unprofitable exports are downgraded
    ///
    /// The evening start hour itself is not off-peak.
    pub fn is_off_peak(&self, hour: u32) -> bool {
        hour > self.evening_start_hour || hour < self.morning_end_hour
    }

    /// Window where profitable exports are forced
    pub fn is_evening_window(&self, hour: u32) -> bool {
        hour >= self.evening_start_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportGuardConfig::default();
        assert!(config.enabled);
        assert_eq!(config.min_battery_soc, 5.0);
        assert_eq!(config.round_trip_efficiency, 0.9);
        assert_eq!(config.low_soc_threshold, 30.0);
        assert_eq!(config.morning_end_hour, 8);
        assert_eq!(config.evening_start_hour, 16);
    }

    #[test]
    fn test_window_boundaries() {
        let config = ExportGuardConfig::default();

        assert!(config.is_off_peak(0));
        assert!(config.is_off_peak(7));
        assert!(!config.is_off_peak(8));
        assert!(!config.is_off_peak(12));
        assert!(!config.is_off_peak(16));
        assert!(config.is_off_peak(17));
        assert!(config.is_off_peak(23));

        assert!(!config.is_evening_window(15));
        assert!(config.is_evening_window(16));
        assert!(config.is_evening_window(23));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExportGuardConfig = serde_json::from_str(r#"{"min_battery_soc": 10.0}"#).unwrap();
        assert_eq!(config.min_battery_soc, 10.0);
        assert_eq!(config.evening_start_hour, 16);
        assert!(config.enabled);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<ExportGuardConfig>(r#"{"min_soc": 10.0}"#);
        assert!(result.is_err());
    }
}
