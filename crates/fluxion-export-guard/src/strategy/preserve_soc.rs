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

//! SOC-preserving export guard
//!
//! Vetoes off-peak exports that sell stored energy below what it cost to put
//! it there, weighted by how empty the battery already is, and forces export
//! in the evening whenever the price clears that floor. When the battery is
//! low but today's sell price beats the cheapest buy-back price in the
//! forecast, the floor is lowered to that buy-back price.

use fluxion_export_types::{
    BatteryState, DecisionRule, ExportAction, ExportDecision, ExportGuardConfig, IntervalContext,
    PriceSignals,
};
use tracing::{debug, warn};

use crate::config::validate;
use crate::error::{ExportGuardError, ExportGuardResult};
use crate::strategy::{ExportContext, ExportPolicy, economics};

/// Reason attached to an off-peak export downgraded to auto
pub const DOWNGRADE_REASON: &str = "west: auto if sell price less than soc pow(1.3) factor";

/// Export guard that preserves battery charge when exporting does not pay
#[derive(Debug, Clone, Default)]
pub struct PreserveSocPolicy {
    config: ExportGuardConfig,
}

impl PreserveSocPolicy {
    /// Create the policy, rejecting configs that fail validation
    pub fn new(config: ExportGuardConfig) -> anyhow::Result<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportGuardConfig {
        &self.config
    }

    /// Evaluate one interval without building an `ExportContext` first
    pub fn evaluate_interval(
        &self,
        battery: &BatteryState,
        prices: &PriceSignals,
        interval: &IntervalContext,
        approx_battery_charge_cost: f32,
    ) -> ExportGuardResult<ExportDecision> {
        self.evaluate(&ExportContext::new(
            battery,
            prices,
            interval,
            approx_battery_charge_cost,
        ))
    }

    fn decide(&self, context: &ExportContext<'_>) -> ExportGuardResult<ExportDecision> {
        validate_context(context)?;

        let battery = context.battery;
        let hour = context.interval.hour;
        let sell_price = context.prices.sell_price;
        let efficiency = self.config.round_trip_efficiency;

        let distance_from_charged = economics::distance_from_charged(battery.soc, battery.min_soc)?;
        let mut min_sell_price =
            economics::min_sell_price(distance_from_charged, context.approx_battery_charge_cost);
        let mut floor_relaxed = false;

        if battery.soc < self.config.low_soc_threshold {
            let min_buy_price = cheapest_buy_price(context.prices)?;
            if let Some(relaxed) =
                economics::relaxed_sell_floor(sell_price, min_buy_price, efficiency)
            {
                debug!(
                    "{}: SOC {:.1}% is low but sell {:.3} beats buy-back {:.3}, floor {:.3} -> {:.3}",
                    self.name(),
                    battery.soc,
                    sell_price,
                    min_buy_price,
                    min_sell_price,
                    relaxed
                );
                min_sell_price = relaxed;
                floor_relaxed = true;
            }
        }

        let mut decision = ExportDecision {
            action: context.interval.action.clone(),
            reason: None,
            distance_from_charged: Some(distance_from_charged),
            min_sell_price: Some(min_sell_price),
            floor_relaxed,
            rule: DecisionRule::Unchanged,
        };

        if self.config.is_off_peak(hour)
            && decision.action.is_export()
            && sell_price < min_sell_price
        {
            debug!(
                "{}: hour {} sell {:.3} below floor {:.3}, export -> auto",
                self.name(),
                hour,
                sell_price,
                min_sell_price
            );
            decision.action = ExportAction::Auto;
            decision.reason = Some(DOWNGRADE_REASON.to_owned());
            decision.rule = DecisionRule::DowngradedToAuto;
        }

        // Evaluated after the downgrade so it has the final say in the evening
        if self.config.is_evening_window(hour) && sell_price > min_sell_price {
            debug!(
                "{}: hour {} sell {:.3} above floor {:.3}, forcing export",
                self.name(),
                hour,
                sell_price,
                min_sell_price
            );
            decision.action = ExportAction::Export;
            decision.rule = DecisionRule::ForcedExport;
        }

        Ok(decision)
    }
}

impl ExportPolicy for PreserveSocPolicy {
    fn name(&self) -> &str {
        "Preserve-SOC"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn evaluate(&self, context: &ExportContext<'_>) -> ExportGuardResult<ExportDecision> {
        if !self.is_enabled() {
            return Ok(ExportDecision::unchanged(context.interval.action.clone()));
        }

        self.decide(context)
            .inspect_err(|err| warn!("{}: rejected interval input - {}", self.name(), err))
    }
}

fn validate_context(context: &ExportContext<'_>) -> ExportGuardResult<()> {
    if context.interval.hour > 23 {
        return Err(ExportGuardError::invalid_input(
            "hour",
            format!("hour of day must be 0-23, got {}", context.interval.hour),
        ));
    }
    if !context.prices.sell_price.is_finite() {
        return Err(ExportGuardError::invalid_input(
            "sell_price",
            format!("sell price must be finite, got {}", context.prices.sell_price),
        ));
    }
    if !context.approx_battery_charge_cost.is_finite() {
        return Err(ExportGuardError::invalid_input(
            "approx_battery_charge_cost",
            format!(
                "battery charge cost must be finite, got {}",
                context.approx_battery_charge_cost
            ),
        ));
    }
    Ok(())
}

fn cheapest_buy_price(prices: &PriceSignals) -> ExportGuardResult<f32> {
    if let Some(bad) = prices.buy_forecast.iter().find(|price| !price.is_finite()) {
        return Err(ExportGuardError::invalid_input(
            "buy_forecast",
            format!("buy forecast prices must be finite, got {bad}"),
        ));
    }
    prices.min_buy_price().ok_or_else(|| {
        ExportGuardError::invalid_input(
            "buy_forecast",
            "buy forecast is empty, cannot find the cheapest buy-back price",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(
        soc: f32,
        sell_price: f32,
        buy_forecast: Vec<f32>,
        hour: u32,
        action: &str,
    ) -> ExportGuardResult<ExportDecision> {
        let policy = PreserveSocPolicy::default();
        policy.evaluate_interval(
            &BatteryState::new(soc, 5.0),
            &PriceSignals::new(sell_price, buy_forecast),
            &IntervalContext::new(hour, action),
            0.01,
        )
    }

    #[test]
    fn test_policy_name() {
        assert_eq!(PreserveSocPolicy::default().name(), "Preserve-SOC");
    }

    #[test]
    fn test_low_soc_relaxes_floor_and_forces_export() {
        let decision = evaluate(20.0, 10.0, vec![5.0, 6.0, 7.0], 18, "export").unwrap();

        assert!(decision.floor_relaxed);
        assert!((decision.min_sell_price.unwrap() - 5.0 / 0.9).abs() < 0.001);
        assert_eq!(decision.action, ExportAction::Export);
        assert_eq!(decision.rule, DecisionRule::ForcedExport);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_low_soc_keeps_floor_when_buy_back_is_dearer() {
        // 1.0 * 0.9 is not above the cheapest buy price of 2.0
        let decision = evaluate(20.0, 1.0, vec![2.0, 3.0], 12, "export").unwrap();

        assert!(!decision.floor_relaxed);
        let expected = 100.0 * (1.0 + (80.0_f32 / 95.0).powi(2)) * 0.01;
        assert!((decision.min_sell_price.unwrap() - expected).abs() < 0.0001);
        assert_eq!(decision.rule, DecisionRule::Unchanged);
    }

    #[test]
    fn test_night_export_below_floor_downgraded() {
        // Floor at 50% SOC is ~1.277
        let decision = evaluate(50.0, 1.0, Vec::new(), 2, "export").unwrap();

        assert_eq!(decision.action, ExportAction::Auto);
        assert_eq!(decision.reason.as_deref(), Some(DOWNGRADE_REASON));
        assert_eq!(decision.rule, DecisionRule::DowngradedToAuto);
    }

    #[test]
    fn test_midday_export_untouched() {
        let decision = evaluate(50.0, 1.0, Vec::new(), 12, "export").unwrap();

        assert_eq!(decision.action, ExportAction::Export);
        assert!(decision.reason.is_none());
        assert_eq!(decision.rule, DecisionRule::Unchanged);
    }

    #[test]
    fn test_non_export_action_not_downgraded() {
        let decision = evaluate(50.0, 1.0, Vec::new(), 2, "charge").unwrap();

        assert_eq!(decision.action, ExportAction::Other("charge".to_owned()));
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_empty_forecast_only_fails_when_consulted() {
        let err = evaluate(20.0, 1.0, Vec::new(), 12, "export").unwrap_err();
        assert_eq!(err.field(), "buy_forecast");

        assert!(evaluate(30.0, 1.0, Vec::new(), 12, "export").is_ok());
    }

    #[test]
    fn test_non_finite_forecast_rejected() {
        let err = evaluate(10.0, 1.0, vec![1.0, f32::NAN], 12, "auto").unwrap_err();
        assert_eq!(err.field(), "buy_forecast");
    }

    #[test]
    fn test_invalid_hour_rejected() {
        let err = evaluate(50.0, 1.0, Vec::new(), 24, "export").unwrap_err();
        assert_eq!(err.field(), "hour");
    }

    #[test]
    fn test_disabled_policy_passes_action_through() {
        let policy = PreserveSocPolicy::new(ExportGuardConfig {
            enabled: false,
            ..Default::default()
        })
        .unwrap();
        // Would be rejected if evaluated: min_soc of 100 divides by zero
        let decision = policy
            .evaluate_interval(
                &BatteryState::new(50.0, 100.0),
                &PriceSignals::new(1.0, Vec::new()),
                &IntervalContext::new(2, "export"),
                0.01,
            )
            .unwrap();

        assert!(!policy.is_enabled());
        assert_eq!(decision.action, ExportAction::Export);
        assert_eq!(decision.rule, DecisionRule::Unchanged);
        assert!(decision.min_sell_price.is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        // Zero efficiency would turn the relaxed floor into -inf
        let err = PreserveSocPolicy::new(ExportGuardConfig {
            round_trip_efficiency: 0.0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("round_trip_efficiency"));

        assert!(
            PreserveSocPolicy::new(ExportGuardConfig {
                min_battery_soc: 100.0,
                ..Default::default()
            })
            .is_err()
        );
    }

    #[test]
    fn test_custom_windows() {
        let policy = PreserveSocPolicy::new(ExportGuardConfig {
            evening_start_hour: 18,
            ..Default::default()
        })
        .unwrap();
        let battery = BatteryState::new(50.0, 5.0);
        let prices = PriceSignals::new(1.0, Vec::new());

        // 17:00 is no longer off-peak
        let decision = policy
            .evaluate_interval(&battery, &prices, &IntervalContext::new(17, "export"), 0.01)
            .unwrap();
        assert_eq!(decision.action, ExportAction::Export);

        let decision = policy
            .evaluate_interval(&battery, &prices, &IntervalContext::new(19, "export"), 0.01)
            .unwrap();
        assert_eq!(decision.action, ExportAction::Auto);
    }
}
