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
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ============= Interval Action =============

/// Action proposed for (or decided on) a single scheduling interval
///
/// Only `export` and `auto` carry meaning for the export guard. Any other
/// value produced by the upstream scheduler is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExportAction {
    /// Discharge the battery to the grid
    Export,
    /// Let the inverter run its normal self-use logic
    #[default]
    Auto,
    /// Any other scheduler action, kept verbatim
    Other(String),
}

impl ExportAction {
    /// Config/wire string for this action
    pub fn as_str(&self) -> &str {
        match self {
            Self::Export => "export",
            Self::Auto => "auto",
            Self::Other(value) => value,
        }
    }

    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export)
    }
}

impl fmt::Display for ExportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<String> for ExportAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "export" => Self::Export,
            "auto" => Self::Auto,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ExportAction {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<ExportAction> for String {
    fn from(action: ExportAction) -> Self {
        match action {
            ExportAction::Other(value) => value,
            known @ (ExportAction::Export | ExportAction::Auto) => known.as_str().to_owned(),
        }
    }
}
