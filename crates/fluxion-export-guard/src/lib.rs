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

pub mod config;
pub mod error;
pub mod strategy;
pub mod validation;

pub use config::{load_config, load_config_or_default};
pub use error::{ExportGuardError, ExportGuardResult};
pub use strategy::*;
pub use validation::{ValidationIssue, ValidationResult, ValidationSeverity};

pub use fluxion_export_types::{
    BatteryState, DecisionRule, ExportAction, ExportDecision, ExportGuardConfig, IntervalContext,
    PriceSignals,
};
