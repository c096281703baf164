use chrono::{DateTime, Utc};
use serde::Serialize;
use skybook_catalog::{Flight, FlightCatalog, FlightId, PricingEngine};
use skybook_core::SearchParams;
use std::fmt;
use tracing::{info, warn};
use uuid::Uuid;

use crate::draft::BookingDraft;
use crate::models::BookingConfirmation;
use crate::validator::{BookingError, BookingValidator};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    Search,
    SelectFlight,
    Booking,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Search => "SEARCH",
            WizardStep::SelectFlight => "SELECT_FLIGHT",
            WizardStep::Booking => "BOOKING",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid step: expected {expected}, session is at {actual}")]
    InvalidStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Flight not offered in current search: {0}")]
    FlightNotOffered(FlightId),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

#[derive(Debug, Clone)]
enum Stage {
    Search,
    SelectFlight {
        search: SearchParams,
        flights: Vec<Flight>,
    },
    Booking {
        flights: Vec<Flight>,
        draft: BookingDraft,
    },
}

/// One client's pass through the wizard. Each step only consumes what the
/// previous step produced; nothing flows backwards.
#[derive(Debug, Clone)]
pub struct BookingSession {
    pub id: Uuid,
    stage: Stage,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl BookingSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            stage: Stage::Search,
            created_at: now,
            last_active: now,
        }
    }

    pub fn step(&self) -> WizardStep {
        match self.stage {
            Stage::Search => WizardStep::Search,
            Stage::SelectFlight { .. } => WizardStep::SelectFlight,
            Stage::Booking { .. } => WizardStep::Booking,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn search(&self) -> Option<&SearchParams> {
        match &self.stage {
            Stage::Search => None,
            Stage::SelectFlight { search, .. } => Some(search),
            Stage::Booking { draft, .. } => Some(draft.search()),
        }
    }

    /// Flights offered for the current search.
    pub fn flights(&self) -> Result<&[Flight], SessionError> {
        match &self.stage {
            Stage::SelectFlight { flights, .. } | Stage::Booking { flights, .. } => Ok(flights),
            Stage::Search => Err(self.wrong_step(WizardStep::SelectFlight)),
        }
    }

    /// Run a search and move to flight selection. Allowed from any step;
    /// a pending draft is discarded.
    pub async fn submit_search(&mut self, search: SearchParams, catalog: &dyn FlightCatalog) -> &[Flight] {
        let flights = catalog.search_flights(&search).await;
        info!(
            "Session {}: {} flights for {} -> {}",
            self.id,
            flights.len(),
            search.origin(),
            search.destination()
        );
        self.stage = Stage::SelectFlight { search, flights };
        match &self.stage {
            Stage::SelectFlight { flights, .. } => flights,
            _ => &[],
        }
    }

    pub fn select_flight(&mut self, flight_id: FlightId) -> Result<&BookingDraft, SessionError> {
        let (search, flights) = match &self.stage {
            Stage::SelectFlight { search, flights } => (search, flights),
            _ => return Err(self.wrong_step(WizardStep::SelectFlight)),
        };

        let flight = flights
            .iter()
            .find(|f| f.id == flight_id)
            .cloned()
            .ok_or(SessionError::FlightNotOffered(flight_id))?;

        info!("Session {}: selected flight {}", self.id, flight.flight_number);
        let draft = BookingDraft::new(flight, search.clone());
        let flights = flights.clone();
        self.stage = Stage::Booking { flights, draft };
        self.draft()
    }

    pub fn draft(&self) -> Result<&BookingDraft, SessionError> {
        match &self.stage {
            Stage::Booking { draft, .. } => Ok(draft),
            _ => Err(self.wrong_step(WizardStep::Booking)),
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut BookingDraft, SessionError> {
        let actual = self.step();
        match &mut self.stage {
            Stage::Booking { draft, .. } => Ok(draft),
            _ => Err(SessionError::InvalidStep {
                expected: WizardStep::Booking,
                actual,
            }),
        }
    }

    /// Submit the draft. A rejected submission leaves the draft as it was;
    /// an accepted one discards it and returns the session to search.
    pub fn submit_booking(&mut self, pricing: &PricingEngine) -> Result<BookingConfirmation, SessionError> {
        let draft = self.draft()?;

        match BookingValidator::confirm(draft, pricing) {
            Ok(confirmation) => {
                info!(
                    "Session {}: booking {} confirmed on {} for {}",
                    self.id, confirmation.confirmation_id, confirmation.flight_number, confirmation.price.total
                );
                self.stage = Stage::Search;
                Ok(confirmation)
            }
            Err(e) => {
                warn!("Session {}: booking rejected: {:?}", self.id, e);
                Err(e.into())
            }
        }
    }

    /// Drop all wizard state, as a page reload would.
    pub fn restart(&mut self) {
        self.stage = Stage::Search;
    }

    fn wrong_step(&self, expected: WizardStep) -> SessionError {
        SessionError::InvalidStep {
            expected,
            actual: self.step(),
        }
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}
