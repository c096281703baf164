use async_trait::async_trait;
use chrono::NaiveTime;
use skybook_core::SearchParams;
use skybook_shared::{CabinClass, DietaryTag};
use tracing::debug;

use crate::flight::{BaggageOption, Flight, FlightId, MealOption, Seat};

/// Flight inventory lookup. Implementations may ignore the search input.
#[async_trait]
pub trait FlightCatalog: Send + Sync {
    async fn search_flights(&self, params: &SearchParams) -> Vec<Flight>;

    async fn find_flight(&self, id: FlightId) -> Option<Flight>;
}

/// Fixed two-flight catalog. Every search gets the same flights in the same
/// order, whatever route or date was asked for.
#[derive(Debug, Clone)]
pub struct StaticFlightCatalog {
    flights: Vec<Flight>,
}

impl StaticFlightCatalog {
    pub fn new() -> Self {
        Self::with_flights(default_flights())
    }

    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self { flights }
    }
}

impl Default for StaticFlightCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightCatalog for StaticFlightCatalog {
    async fn search_flights(&self, params: &SearchParams) -> Vec<Flight> {
        debug!(
            "Catalog search {} -> {} on {} ({} pax, {})",
            params.origin(),
            params.destination(),
            params.date(),
            params.passenger_count(),
            params.cabin_class()
        );
        self.flights.clone()
    }

    async fn find_flight(&self, id: FlightId) -> Option<Flight> {
        self.flights.iter().find(|f| f.id == id).cloned()
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Single-column economy cabin, rows 1..=30, all seats open and free.
fn single_column_cabin() -> Vec<Seat> {
    (1..=30)
        .map(|row| Seat::new(row, 'A', CabinClass::Economy, 0, true))
        .collect()
}

fn standard_baggage() -> Vec<BaggageOption> {
    vec![
        BaggageOption { id: 1, weight_kg: 20, price: 30 },
        BaggageOption { id: 2, weight_kg: 30, price: 50 },
    ]
}

fn meal(id: u32, name: &str, description: &str, price: i32, tags: &[DietaryTag]) -> MealOption {
    MealOption {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        dietary_tags: tags.iter().copied().collect(),
    }
}

pub fn default_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: 1,
            airline: "SkyWings".to_string(),
            flight_number: "SW123".to_string(),
            departure_time: at(8, 0),
            arrival_time: at(10, 30),
            base_price: 299,
            duration_minutes: 150,
            aircraft: "Boeing 737-800".to_string(),
            seats: single_column_cabin(),
            baggage_options: standard_baggage(),
            meal_options: vec![
                meal(1, "Chicken Pasta", "Served with salad", 15, &[DietaryTag::Halal]),
                meal(2, "Vegetarian Curry", "Served with rice", 15, &[DietaryTag::Vegetarian, DietaryTag::Vegan]),
            ],
        },
        Flight {
            id: 2,
            airline: "AirSpeed".to_string(),
            flight_number: "AS456".to_string(),
            departure_time: at(11, 15),
            arrival_time: at(13, 45),
            base_price: 349,
            duration_minutes: 150,
            aircraft: "Airbus A320".to_string(),
            seats: single_column_cabin(),
            baggage_options: standard_baggage(),
            meal_options: vec![
                meal(1, "Beef Steak", "Served with potatoes", 18, &[DietaryTag::Halal]),
                meal(2, "Mediterranean Plate", "Hummus and falafel", 15, &[DietaryTag::Vegetarian, DietaryTag::Vegan]),
            ],
        },
    ]
}
