use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use skybook_shared::{CabinClass, DietaryTag};
use std::collections::BTreeSet;

pub type FlightId = u32;
pub type OptionId = u32;

/// One scheduled departure with its fare, seat inventory and add-ons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: FlightId,
    pub airline: String,
    pub flight_number: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    /// Fare per passenger, in whole currency units
    pub base_price: i32,
    pub duration_minutes: u32,
    pub aircraft: String,
    pub seats: Vec<Seat>,
    pub baggage_options: Vec<BaggageOption>,
    pub meal_options: Vec<MealOption>,
}

impl Flight {
    pub fn baggage_option(&self, id: OptionId) -> Option<&BaggageOption> {
        self.baggage_options.iter().find(|b| b.id == id)
    }

    pub fn meal_option(&self, id: OptionId) -> Option<&MealOption> {
        self.meal_options.iter().find(|m| m.id == id)
    }

    /// Highest row number present in the seat list, 0 when there are no seats.
    pub fn max_row(&self) -> u32 {
        self.seats.iter().map(|s| s.row).max().unwrap_or(0)
    }

    /// Human readable duration, e.g. `2h 30m`.
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    /// Row number followed by column letter, e.g. `3A`
    pub id: String,
    pub row: u32,
    pub column: char,
    pub cabin: CabinClass,
    /// Surcharge on top of the fare
    pub price: i32,
    pub available: bool,
}

impl Seat {
    pub fn new(row: u32, column: char, cabin: CabinClass, price: i32, available: bool) -> Self {
        Self {
            id: format!("{}{}", row, column),
            row,
            column,
            cabin,
            price,
            available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaggageOption {
    pub id: OptionId,
    pub weight_kg: u32,
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealOption {
    pub id: OptionId,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub dietary_tags: BTreeSet<DietaryTag>,
}
