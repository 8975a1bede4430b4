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

//! Export guard configuration loading
//!
//! The guard reads an `[export_guard]` table from TOML or a top-level
//! `export_guard` object from JSON, so it can share a file with the rest of
//! the plant configuration. A bare config without the wrapper is accepted too.

use anyhow::{Context, Result};
use fluxion_export_types::ExportGuardConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::validation::validate_detailed;

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension (`.toml` or `.json`)
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => anyhow::bail!(
                "Unsupported config file extension {:?} for {} (expected .toml or .json)",
                other,
                path.display()
            ),
        }
    }
}

#[derive(Deserialize)]
struct WrappedConfig {
    export_guard: ExportGuardConfig,
}

const SECTION: &str = "export_guard";

/// Parse and validate config contents
///
/// The document is deserialized straight from the source text once the
/// wrapper has been detected, so type errors keep the offending key and line.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<ExportGuardConfig> {
    let config = match format {
        ConfigFormat::Toml => {
            parse_toml(contents).context("Failed to parse export guard TOML config")?
        }
        ConfigFormat::Json => {
            parse_json(contents).context("Failed to parse export guard JSON config")?
        }
    };

    validate(&config)?;
    Ok(config)
}

fn parse_toml(contents: &str) -> Result<ExportGuardConfig> {
    let document: toml::Table = toml::from_str(contents)?;
    let config = if document.contains_key(SECTION) {
        toml::from_str::<WrappedConfig>(contents)?.export_guard
    } else {
        toml::from_str(contents)?
    };
    Ok(config)
}

fn parse_json(contents: &str) -> Result<ExportGuardConfig> {
    let document: serde_json::Value = serde_json::from_str(contents)?;
    let config = if document.get(SECTION).is_some() {
        serde_json::from_str::<WrappedConfig>(contents)?.export_guard
    } else {
        serde_json::from_str(contents)?
    };
    Ok(config)
}

/// Load configuration from a `.toml` or `.json` file
pub fn load_config(path: impl AsRef<Path>) -> Result<ExportGuardConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = parse_config(&contents, format)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    info!("✅ Loaded export guard configuration from {}", path.display());
    Ok(config)
}

/// Load configuration, falling back to defaults when the file does not exist
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ExportGuardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(
            "No export guard config at {}, using defaults",
            path.display()
        );
        return Ok(ExportGuardConfig::default());
    }
    load_config(path)
}

/// Validate configuration, logging warnings and failing on the first error
pub fn validate(config: &ExportGuardConfig) -> Result<()> {
    let result = validate_detailed(config);

    for warning in &result.warnings {
        warn!("⚠️ Config warning: {}", warning);
    }

    if let Some(error) = result.errors.first() {
        anyhow::bail!("Invalid configuration - {}", error);
    }

    Ok(())
}
