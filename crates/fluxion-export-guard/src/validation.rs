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

use fluxion_export_types::ExportGuardConfig;

/// Validation result with detailed field-level errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the configuration is valid
    pub valid: bool,
    /// Validation errors (prevent config from being used)
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings (config can be used but may not be optimal)
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        });
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        });
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Field path (e.g., "export_guard.min_battery_soc")
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Severity of the issue
    pub severity: ValidationSeverity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Severity level of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Prevents config from being used
    Error,
    /// Config can be used but may not be optimal
    Warning,
}

/// Validate export guard configuration with detailed error reporting
pub fn validate_detailed(config: &ExportGuardConfig) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !config.min_battery_soc.is_finite()
        || config.min_battery_soc < 0.0
        || config.min_battery_soc >= 100.0
    {
        result.add_error(
            "export_guard.min_battery_soc",
            format!(
                "Minimum SOC must be at least 0% and below 100%, got {}",
                config.min_battery_soc
            ),
        );
    }

    if !config.round_trip_efficiency.is_finite()
        || config.round_trip_efficiency <= 0.0
        || config.round_trip_efficiency > 1.0
    {
        result.add_error(
            "export_guard.round_trip_efficiency",
            format!(
                "Round-trip efficiency must be in (0, 1], got {}",
                config.round_trip_efficiency
            ),
        );
    }

    if !(0.0..=100.0).contains(&config.low_soc_threshold) {
        result.add_error(
            "export_guard.low_soc_threshold",
            format!(
                "Low SOC threshold must be between 0% and 100%, got {}",
                config.low_soc_threshold
            ),
        );
    }

    if config.morning_end_hour > 23 {
        result.add_error(
            "export_guard.morning_end_hour",
            format!("Hour must be 0-23, got {}", config.morning_end_hour),
        );
    }
    if config.evening_start_hour > 23 {
        result.add_error(
            "export_guard.evening_start_hour",
            format!("Hour must be 0-23, got {}", config.evening_start_hour),
        );
    }

    if config.morning_end_hour > config.evening_start_hour {
        result.add_warning(
            "export_guard.morning_end_hour",
            format!(
                "Morning end hour {} is after evening start hour {}, every hour will be off-peak",
                config.morning_end_hour, config.evening_start_hour
            ),
        );
    }

    if config.min_battery_soc >= config.low_soc_threshold {
        result.add_warning(
            "export_guard.low_soc_threshold",
            format!(
                "Low SOC threshold {}% is not above the minimum SOC {}%, buy-back prices will never be consulted",
                config.low_soc_threshold, config.min_battery_soc
            ),
        );
    }

    result
}
