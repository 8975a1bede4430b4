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

/// Price inputs for one interval
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSignals {
    /// Current export price (CZK/kWh)
    pub sell_price: f32,

    /// Buy prices for the next 7 hours, in time order (CZK/kWh)
    #[serde(default)]
    pub buy_forecast: Vec<f32>,
}

impl PriceSignals {
    pub fn new(sell_price: f32, buy_forecast: Vec<f32>) -> Self {
        Self {
            sell_price,
            buy_forecast,
        }
    }

    /// Cheapest buy price in the forecast, `None` when the forecast is empty
    pub fn min_buy_price(&self) -> Option<f32> {
        self.buy_forecast.iter().copied().reduce(f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_buy_price() {
        let prices = PriceSignals::new(3.0, vec![2.4, 1.9, 2.2, 3.1]);
        assert_eq!(prices.min_buy_price(), Some(1.9));
    }

    #[test]
    fn test_min_buy_price_empty_forecast() {
        let prices = PriceSignals::new(3.0, Vec::new());
        assert_eq!(prices.min_buy_price(), None);
    }

    #[test]
    fn test_negative_prices() {
        let prices = PriceSignals::new(0.5, vec![0.3, -0.8, 0.1]);
        assert_eq!(prices.min_buy_price(), Some(-0.8));
    }
}
