use serde::{Deserialize, Serialize};
use skybook_core::ToggleSet;
use tracing::debug;

use crate::flight::{Flight, OptionId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO 4217 code reported alongside every amount
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
        }
    }
}

/// Itemised total for a booking draft. All amounts are whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_fare: i32,
    pub passengers: u8,
    pub fare_total: i32,
    pub baggage_total: i32,
    pub meal_total: i32,
    pub total: i32,
    pub currency: String,
}

/// Aggregates fare and add-on prices. No taxes, discounts or conversion.
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// `base_price * passengers + selected baggage + selected meals`.
    /// Ids the flight does not offer add nothing.
    pub fn quote(
        &self,
        flight: &Flight,
        passengers: u8,
        baggage: &ToggleSet<OptionId>,
        meals: &ToggleSet<OptionId>,
    ) -> PriceBreakdown {
        let fare_total = flight.base_price * i32::from(passengers);

        let baggage_total: i32 = baggage
            .iter()
            .map(|id| match flight.baggage_option(*id) {
                Some(option) => option.price,
                None => {
                    debug!("Baggage option {} not offered on flight {}", id, flight.flight_number);
                    0
                }
            })
            .sum();

        let meal_total: i32 = meals
            .iter()
            .map(|id| match flight.meal_option(*id) {
                Some(option) => option.price,
                None => {
                    debug!("Meal option {} not offered on flight {}", id, flight.flight_number);
                    0
                }
            })
            .sum();

        PriceBreakdown {
            base_fare: flight.base_price,
            passengers,
            fare_total,
            baggage_total,
            meal_total,
            total: fare_total + baggage_total + meal_total,
            currency: self.config.currency.clone(),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
