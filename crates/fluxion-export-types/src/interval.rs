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

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::action::ExportAction;

/// Time-of-day context and the scheduler's proposed action for an interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalContext {
    /// Hour of day (0-23) in the scheduler's local time
    pub hour: u32,

    /// Action proposed by the scheduler for this interval
    pub action: ExportAction,
}

impl IntervalContext {
    pub fn new(hour: u32, action: impl Into<ExportAction>) -> Self {
        Self {
            hour,
            action: action.into(),
        }
    }

    /// Derive the hour from an interval start timestamp
    ///
    /// The hour is taken in the timestamp's own timezone, so callers should
    /// convert to the plant's local time first.
    pub fn at<Tz: TimeZone>(interval_start: &DateTime<Tz>, action: impl Into<ExportAction>) -> Self {
        Self::new(interval_start.hour(), action)
    }
}
