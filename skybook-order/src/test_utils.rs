//! Fixtures shared by the unit tests of this crate.

use chrono::NaiveDate;
use skybook_catalog::catalog::default_flights;
use skybook_core::SearchParams;
use skybook_shared::{CabinClass, Masked};

use crate::draft::BookingDraft;
use crate::models::{PassengerDetails, PaymentDetails};

pub fn search(passengers: u8) -> SearchParams {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    SearchParams::new("Lisbon", "Porto", date, passengers, CabinClass::Economy).unwrap()
}

/// Draft on SW123 (fare 299) with nothing selected.
pub fn draft(passengers: u8) -> BookingDraft {
    BookingDraft::new(default_flights().remove(0), search(passengers))
}

pub fn passenger() -> PassengerDetails {
    PassengerDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
    }
}

pub fn payment() -> PaymentDetails {
    PaymentDetails {
        card_number: Masked::new("4111 1111 1111 1111".to_string()),
        expiry_date: Masked::new("12/27".to_string()),
        cvv: Masked::new("123".to_string()),
    }
}

/// Draft with contact and payment fields filled, no seats picked.
pub fn filled(passengers: u8) -> BookingDraft {
    let mut draft = draft(passengers);
    draft.set_passenger(passenger());
    draft.set_payment(payment());
    draft
}
