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

use crate::action::ExportAction;

/// Which rule decided the final action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Proposed action kept as-is
    Unchanged,
    /// Off-peak export below the sell floor, fell back to auto
    DowngradedToAuto,
    /// Evening price above the sell floor, export forced
    ForcedExport,
}

/// Outcome of one export guard evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDecision {
    /// Final action for the interval
    pub action: ExportAction,

    /// Human-readable reason, set only when the action was downgraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// SOC penalty factor (100 when full, 200 at the floor),
    /// `None` when the guard did not evaluate the interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_charged: Option<f32>,

    /// Sell price (CZK/kWh) below which exporting is not worth it,
    /// `None` when the guard did not evaluate the interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sell_price: Option<f32>,

    /// Whether the floor was lowered to the cheapest upcoming buy-back price
    pub floor_relaxed: bool,

    pub rule: DecisionRule,
}

impl ExportDecision {
    /// Decision that keeps the proposed action without computing a floor
    pub fn unchanged(action: ExportAction) -> Self {
        Self {
            action,
            reason: None,
            distance_from_charged: None,
            min_sell_price: None,
            floor_relaxed: false,
            rule: DecisionRule::Unchanged,
        }
    }
}
