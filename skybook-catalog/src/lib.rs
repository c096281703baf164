pub mod flight;
pub mod catalog;
pub mod seat_map;
pub mod pricing;

pub use flight::{BaggageOption, Flight, FlightId, MealOption, OptionId, Seat};
pub use catalog::{FlightCatalog, StaticFlightCatalog};
pub use seat_map::{SeatCell, SeatMap, SeatRow, SeatSelector, SeatState, SeatToggle};
pub use pricing::{PriceBreakdown, PricingConfig, PricingEngine};
