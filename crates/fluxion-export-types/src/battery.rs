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

use crate::config::ExportGuardConfig;

/// Battery snapshot for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    /// Current state of charge (%)
    pub soc: f32,

    /// Configured discharge floor (%)
    pub min_soc: f32,
}

impl BatteryState {
    pub fn new(soc: f32, min_soc: f32) -> Self {
        Self { soc, min_soc }
    }

    /// Build a snapshot using the floor from configuration
    pub fn from_config(soc: f32, config: &ExportGuardConfig) -> Self {
        Self::new(soc, config.min_battery_soc)
    }
}
