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

mod preserve_soc;

pub use preserve_soc::{DOWNGRADE_REASON, PreserveSocPolicy};

use crate::error::ExportGuardResult;
use fluxion_export_types::{BatteryState, ExportDecision, IntervalContext, PriceSignals};

/// Inputs for evaluating one interval
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    /// Battery snapshot (SOC and configured floor)
    pub battery: &'a BatteryState,

    /// Current sell price and buy-back forecast
    pub prices: &'a PriceSignals,

    /// Hour of day and the scheduler's proposed action
    pub interval: &'a IntervalContext,

    /// Approximate cost of the energy currently stored (CZK/kWh),
    /// supplied by the caller
    pub approx_battery_charge_cost: f32,
}

impl<'a> ExportContext<'a> {
    pub fn new(
        battery: &'a BatteryState,
        prices: &'a PriceSignals,
        interval: &'a IntervalContext,
        approx_battery_charge_cost: f32,
    ) -> Self {
        Self {
            battery,
            prices,
            interval,
            approx_battery_charge_cost,
        }
    }
}

/// Trait for policies that post-process a scheduled export action
///
/// A policy receives the action the scheduler proposed for an interval and
/// may replace it, for example to keep charge in the battery when selling
/// would not pay for the energy later bought back.
pub trait ExportPolicy: Send + Sync {
    /// Get the name of this policy
    fn name(&self) -> &str;

    /// Evaluate this policy for a single interval
    fn evaluate(&self, context: &ExportContext<'_>) -> ExportGuardResult<ExportDecision>;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Helper functions for the export price floor
pub mod economics {
    use crate::error::{ExportGuardError, ExportGuardResult};

    /// SOC penalty factor applied to the battery charge cost
    ///
    /// 100 with a full battery, rising quadratically to 200 at `min_soc`.
    /// Fails when `min_soc` leaves no usable range.
    pub fn distance_from_charged(soc: f32, min_soc: f32) -> ExportGuardResult<f32> {
        if !soc.is_finite() || !(0.0..=100.0).contains(&soc) {
            return Err(ExportGuardError::invalid_input(
                "soc",
                format!("state of charge must be between 0% and 100%, got {soc}"),
            ));
        }
        if !min_soc.is_finite() || !(0.0..100.0).contains(&min_soc) {
            return Err(ExportGuardError::invalid_input(
                "min_soc",
                format!("minimum SOC must be at least 0% and below 100%, got {min_soc}"),
            ));
        }

        let depletion = (100.0 - soc) / (100.0 - min_soc);
        Ok(100.0 * (1.0 + depletion.powi(2)))
    }

    /// Minimum sell price that covers the stored energy's cost
    pub fn min_sell_price(distance_from_charged: f32, approx_battery_charge_cost: f32) -> f32 {
        distance_from_charged * approx_battery_charge_cost
    }

    /// Revenue per kWh of stored energy sold now, after round-trip losses
    pub fn sell_revenue(sell_price: f32, efficiency: f32) -> f32 {
        sell_price * efficiency
    }

    /// Lowered sell floor when the energy can be bought back cheaper later
    ///
    /// Returns `None` when selling now does not beat the cheapest buy-back
    /// price, in which case the regular floor stays in force.
    pub fn relaxed_sell_floor(sell_price: f32, min_buy_price: f32, efficiency: f32) -> Option<f32> {
        (sell_revenue(sell_price, efficiency) > min_buy_price).then(|| min_buy_price / efficiency)
    }
}
