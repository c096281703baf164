use serde::Serialize;
use skybook_core::{ToggleOutcome, ToggleSet};
use std::collections::HashMap;
use tracing::debug;

use crate::flight::Seat;

/// Cabin column template: three seats, aisle, three seats.
pub const COLUMN_TEMPLATE: [Option<char>; 7] =
    [Some('A'), Some('B'), Some('C'), None, Some('D'), Some('E'), Some('F')];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Available,
    Selected,
    Occupied,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatCell {
    Seat { id: String, state: SeatState },
    /// Aisle gap, labelled with the row number
    Aisle { row: u32 },
    /// No seat at this row/column position
    Empty,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatRow {
    pub number: u32,
    pub cells: Vec<SeatCell>,
}

/// Renderable grid of one flight's seats.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatMap {
    pub columns: Vec<Option<char>>,
    pub rows: Vec<SeatRow>,
}

impl SeatMap {
    pub fn build(seats: &[Seat], selected: &ToggleSet<String>) -> Self {
        let max_row = seats.iter().map(|s| s.row).max().unwrap_or(0);
        let by_position: HashMap<(u32, char), &Seat> =
            seats.iter().map(|s| ((s.row, s.column), s)).collect();

        let rows = (1..=max_row)
            .map(|number| SeatRow {
                number,
                cells: COLUMN_TEMPLATE
                    .iter()
                    .map(|column| match column {
                        None => SeatCell::Aisle { row: number },
                        Some(col) => match by_position.get(&(number, *col)) {
                            Some(seat) => SeatCell::Seat {
                                id: seat.id.clone(),
                                state: if selected.contains(&seat.id) {
                                    SeatState::Selected
                                } else if seat.available {
                                    SeatState::Available
                                } else {
                                    SeatState::Occupied
                                },
                            },
                            None => SeatCell::Empty,
                        },
                    })
                    .collect(),
            })
            .collect();

        Self {
            columns: COLUMN_TEMPLATE.to_vec(),
            rows,
        }
    }
}

/// Result of [`SeatSelector::toggle_seat`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatToggle {
    Selected,
    Deselected,
    /// Seat is occupied, selection untouched
    Unavailable,
    /// Seat id is not part of this flight, selection untouched
    UnknownSeat,
    /// Every passenger already has a seat
    LimitReached,
}

impl SeatToggle {
    pub fn changed(&self) -> bool {
        matches!(self, SeatToggle::Selected | SeatToggle::Deselected)
    }
}

/// Tracks the seats picked for one booking, capped at the passenger count.
#[derive(Debug, Clone)]
pub struct SeatSelector {
    availability: HashMap<String, bool>,
    selection: ToggleSet<String>,
}

impl SeatSelector {
    pub fn new(seats: &[Seat], passenger_count: usize) -> Self {
        Self {
            availability: seats.iter().map(|s| (s.id.clone(), s.available)).collect(),
            selection: ToggleSet::bounded(passenger_count),
        }
    }

    pub fn toggle_seat(&mut self, seat_id: &str) -> SeatToggle {
        let result = match self.availability.get(seat_id) {
            None => SeatToggle::UnknownSeat,
            Some(false) => SeatToggle::Unavailable,
            Some(true) => match self.selection.toggle(seat_id.to_string()) {
                ToggleOutcome::Added => SeatToggle::Selected,
                ToggleOutcome::Removed => SeatToggle::Deselected,
                ToggleOutcome::Rejected => SeatToggle::LimitReached,
            },
        };
        debug!("Seat toggle {}: {:?} ({} selected)", seat_id, result, self.selection.len());
        result
    }

    pub fn selection(&self) -> &ToggleSet<String> {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn required(&self) -> usize {
        self.selection.capacity().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.selection.len() == self.required()
    }
}
