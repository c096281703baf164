use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skybook_shared::CabinClass;

use crate::{CoreError, CoreResult};

pub const MIN_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 9;

fn default_passengers() -> u8 {
    MIN_PASSENGERS
}

/// Raw search form input, as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate, // ISO 8601 calendar date
    #[serde(default = "default_passengers")]
    pub passengers: u8,
    #[serde(default)]
    pub cabin_class: CabinClass,
}

/// Validated search parameters. Immutable once built; every later stage
/// only reads them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchParams {
    origin: String,
    destination: String,
    date: NaiveDate,
    passenger_count: u8,
    cabin_class: CabinClass,
}

impl SearchParams {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
        passenger_count: u8,
        cabin_class: CabinClass,
    ) -> CoreResult<Self> {
        let origin = origin.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        if origin.is_empty() {
            return Err(CoreError::Validation("origin is required".to_string()));
        }
        if destination.is_empty() {
            return Err(CoreError::Validation("destination is required".to_string()));
        }
        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&passenger_count) {
            return Err(CoreError::Validation(format!(
                "passengers must be between {} and {}, got {}",
                MIN_PASSENGERS, MAX_PASSENGERS, passenger_count
            )));
        }

        Ok(Self {
            origin,
            destination,
            date,
            passenger_count,
            cabin_class,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn passenger_count(&self) -> u8 {
        self.passenger_count
    }

    pub fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }
}

impl TryFrom<SearchRequest> for SearchParams {
    type Error = CoreError;

    fn try_from(req: SearchRequest) -> CoreResult<Self> {
        SearchParams::new(req.origin, req.destination, req.date, req.passengers, req.cabin_class)
    }
}
