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

pub mod action;
pub mod battery;
pub mod config;
pub mod decision;
pub mod interval;
pub mod pricing;

// Re-export common types for convenience
pub use action::ExportAction;
pub use battery::BatteryState;
pub use config::ExportGuardConfig;
pub use decision::{DecisionRule, ExportDecision};
pub use interval::IntervalContext;
pub use pricing::PriceSignals;
