use serde::Serialize;
use skybook_catalog::{Flight, OptionId, PriceBreakdown, PricingEngine, SeatMap, SeatSelector, SeatToggle};
use skybook_core::{SearchParams, ToggleOutcome, ToggleSet};
use tracing::debug;

use crate::models::{PassengerDetails, PaymentDetails};

/// Result of toggling a baggage or meal option.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddonToggle {
    Added,
    Removed,
    /// The flight does not offer this option; the selection is untouched
    UnknownOption,
    /// The selection is capped and already full
    LimitReached,
}

/// Everything entered on the booking step for one flight, held in memory
/// until the booking is submitted or the session ends.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    flight: Flight,
    search: SearchParams,
    seats: SeatSelector,
    baggage: ToggleSet<OptionId>,
    meals: ToggleSet<OptionId>,
    passenger: PassengerDetails,
    payment: PaymentDetails,
}

impl BookingDraft {
    pub fn new(flight: Flight, search: SearchParams) -> Self {
        let seats = SeatSelector::new(&flight.seats, usize::from(search.passenger_count()));
        Self {
            flight,
            search,
            seats,
            baggage: ToggleSet::unbounded(),
            meals: ToggleSet::unbounded(),
            passenger: PassengerDetails::default(),
            payment: PaymentDetails::default(),
        }
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn search(&self) -> &SearchParams {
        &self.search
    }

    pub fn toggle_seat(&mut self, seat_id: &str) -> SeatToggle {
        self.seats.toggle_seat(seat_id)
    }

    pub fn toggle_baggage(&mut self, id: OptionId) -> AddonToggle {
        if self.flight.baggage_option(id).is_none() {
            debug!("Baggage option {} refused on {}", id, self.flight.flight_number);
            return AddonToggle::UnknownOption;
        }
        Self::apply(&mut self.baggage, id)
    }

    pub fn toggle_meal(&mut self, id: OptionId) -> AddonToggle {
        if self.flight.meal_option(id).is_none() {
            debug!("Meal option {} refused on {}", id, self.flight.flight_number);
            return AddonToggle::UnknownOption;
        }
        Self::apply(&mut self.meals, id)
    }

    fn apply(set: &mut ToggleSet<OptionId>, id: OptionId) -> AddonToggle {
        match set.toggle(id) {
            ToggleOutcome::Added => AddonToggle::Added,
            ToggleOutcome::Removed => AddonToggle::Removed,
            ToggleOutcome::Rejected => AddonToggle::LimitReached,
        }
    }

    pub fn seats(&self) -> &SeatSelector {
        &self.seats
    }

    pub fn selected_seats(&self) -> &ToggleSet<String> {
        self.seats.selection()
    }

    pub fn selected_baggage(&self) -> &ToggleSet<OptionId> {
        &self.baggage
    }

    pub fn selected_meals(&self) -> &ToggleSet<OptionId> {
        &self.meals
    }

    pub fn passenger(&self) -> &PassengerDetails {
        &self.passenger
    }

    pub fn set_passenger(&mut self, passenger: PassengerDetails) {
        self.passenger = passenger;
    }

    pub fn payment(&self) -> &PaymentDetails {
        &self.payment
    }

    pub fn set_payment(&mut self, payment: PaymentDetails) {
        self.payment = payment;
    }

    pub fn seat_map(&self) -> SeatMap {
        SeatMap::build(&self.flight.seats, self.seats.selection())
    }

    pub fn quote(&self, pricing: &PricingEngine) -> PriceBreakdown {
        pricing.quote(&self.flight, self.search.passenger_count(), &self.baggage, &self.meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::draft;

    #[test]
    fn test_addon_toggle_set_semantics() {
        let mut draft = draft(1);

        assert_eq!(draft.toggle_baggage(1), AddonToggle::Added);
        assert_eq!(draft.toggle_baggage(2), AddonToggle::Added);
        assert_eq!(draft.toggle_baggage(1), AddonToggle::Removed);
        assert_eq!(draft.selected_baggage().as_slice(), &[2]);

        // no cap on add-ons, unlike seats
        assert_eq!(draft.toggle_meal(1), AddonToggle::Added);
        assert_eq!(draft.toggle_meal(2), AddonToggle::Added);
        assert_eq!(draft.selected_meals().len(), 2);
    }

    #[test]
    fn test_capped_addon_set_reports_limit() {
        let mut capped = ToggleSet::bounded(1);
        assert_eq!(BookingDraft::apply(&mut capped, 1), AddonToggle::Added);
        assert_eq!(BookingDraft::apply(&mut capped, 2), AddonToggle::LimitReached);
        assert_eq!(capped.as_slice(), &[1]);
        assert_eq!(BookingDraft::apply(&mut capped, 1), AddonToggle::Removed);
    }

    #[test]
    fn test_unknown_addon_refused() {
        let mut draft = draft(1);
        assert_eq!(draft.toggle_meal(9), AddonToggle::UnknownOption);
        assert!(draft.selected_meals().is_empty());
    }

    #[test]
    fn test_seat_cap_follows_passenger_count() {
        let mut draft = draft(2);
        assert_eq!(draft.toggle_seat("1A"), SeatToggle::Selected);
        assert_eq!(draft.toggle_seat("2A"), SeatToggle::Selected);
        assert_eq!(draft.toggle_seat("3A"), SeatToggle::LimitReached);
        assert_eq!(draft.seats().required(), 2);
    }

    #[test]
    fn test_quote_tracks_selection() {
        let mut draft = draft(2);
        let pricing = PricingEngine::default();
        assert_eq!(draft.quote(&pricing).total, 598);

        draft.toggle_baggage(1);
        draft.toggle_meal(2);
        assert_eq!(draft.quote(&pricing).total, 643);
    }
}
