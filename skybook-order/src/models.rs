use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skybook_catalog::{FlightId, OptionId, PriceBreakdown};
use skybook_shared::Masked;
use uuid::Uuid;

/// Contact details of the lead passenger. Opaque text, only presence is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl PassengerDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Card details. Every field is masked in logs and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: Masked<String>,
    pub expiry_date: Masked<String>,
    pub cvv: Masked<String>,
}

/// Acknowledgment of an accepted booking. Returned once, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub confirmation_id: Uuid,
    pub message: String,
    pub flight_id: FlightId,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub date: chrono::NaiveDate,
    pub seats: Vec<String>,
    pub baggage: Vec<OptionId>,
    pub meals: Vec<OptionId>,
    pub passenger_name: String,
    pub contact_email: String,
    pub price: PriceBreakdown,
    pub confirmed_at: DateTime<Utc>,
}

pub const CONFIRMATION_MESSAGE: &str = "Booking successful! Check your email for confirmation.";
