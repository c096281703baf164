use chrono::Utc;
use skybook_catalog::PricingEngine;
use uuid::Uuid;

use crate::draft::BookingDraft;
use crate::models::{BookingConfirmation, CONFIRMATION_MESSAGE};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Please select seats for all passengers")]
    SeatCountMismatch {
        required: usize,
        selected: usize,
    },
}

/// Gatekeeper for booking submission.
pub struct BookingValidator;

impl BookingValidator {
    pub fn validate(draft: &BookingDraft) -> Result<(), BookingError> {
        let passenger = draft.passenger();
        let text_fields = [
            ("first_name", passenger.first_name.as_str()),
            ("last_name", passenger.last_name.as_str()),
            ("email", passenger.email.as_str()),
            ("phone", passenger.phone.as_str()),
        ];
        for (name, value) in text_fields {
            if value.trim().is_empty() {
                return Err(BookingError::MissingField(name));
            }
        }

        let payment = draft.payment();
        let card_fields = [
            ("card_number", &payment.card_number),
            ("expiry_date", &payment.expiry_date),
            ("cvv", &payment.cvv),
        ];
        for (name, value) in card_fields {
            if value.is_blank() {
                return Err(BookingError::MissingField(name));
            }
        }

        let required = usize::from(draft.search().passenger_count());
        let selected = draft.selected_seats().len();
        if selected != required {
            return Err(BookingError::SeatCountMismatch { required, selected });
        }

        Ok(())
    }

    /// Validate and, when accepted, build the confirmation.
    pub fn confirm(draft: &BookingDraft, pricing: &PricingEngine) -> Result<BookingConfirmation, BookingError> {
        Self::validate(draft)?;

        let flight = draft.flight();
        let search = draft.search();
        Ok(BookingConfirmation {
            confirmation_id: Uuid::new_v4(),
            message: CONFIRMATION_MESSAGE.to_string(),
            flight_id: flight.id,
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            origin: search.origin().to_string(),
            destination: search.destination().to_string(),
            date: search.date(),
            seats: draft.selected_seats().iter().cloned().collect(),
            baggage: draft.selected_baggage().iter().copied().collect(),
            meals: draft.selected_meals().iter().copied().collect(),
            passenger_name: draft.passenger().full_name(),
            contact_email: draft.passenger().email.trim().to_string(),
            price: draft.quote(pricing),
            confirmed_at: Utc::now(),
        })
    }
}
