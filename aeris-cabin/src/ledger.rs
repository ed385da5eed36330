use std::collections::HashMap;
use std::sync::Arc;

use aeris_core::{Aircraft, FlightNumber, FlightNumberError, SeatRef, SeatRefError, SeatingPlan};

use crate::map::{SeatAssignment, SeatMap, SeatRow};

/// Per-flight seat occupancy ledger.
///
/// One ledger tracks one flight instance. The aircraft is shared read-only,
/// so several ledgers (several flights of the same airframe type) can hang
/// off a single `Arc<Aircraft>`. All operations are synchronous; callers
/// sharing a ledger across threads must wrap it in their own lock.
pub struct SeatLedger {
    flight_number: FlightNumber,
    aircraft: Arc<Aircraft>,
    plan: SeatingPlan,
    seating: HashMap<SeatRef, Option<String>>,
}

impl SeatLedger {
    /// Create an empty ledger for one flight of the given aircraft.
    pub fn new(flight_number: &str, aircraft: Arc<Aircraft>) -> Result<Self, LedgerError> {
        let flight_number = FlightNumber::parse(flight_number)?;
        let plan = aircraft.seating_plan();

        // One unoccupied slot per seat in the plan; no other key ever exists
        let seating = plan.seat_refs().map(|seat| (seat, None)).collect();

        tracing::info!(
            "Opened seat ledger for flight {} ({} {}, {} seats)",
            flight_number,
            aircraft.model(),
            aircraft.registration(),
            plan.seat_count()
        );

        Ok(Self {
            flight_number,
            aircraft,
            plan,
            seating,
        })
    }

    pub fn flight_number(&self) -> &str {
        self.flight_number.as_str()
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    /// Allocate a seat to a passenger.
    pub fn allocate(&mut self, seat: &str, passenger: &str) -> Result<(), LedgerError> {
        let seat = self.plan.parse_seat(seat)?;

        if self.occupant_at(seat).is_some() {
            tracing::warn!("Refused allocation of occupied seat {seat}");
            return Err(LedgerError::SeatOccupied { seat });
        }

        self.seating.insert(seat, Some(passenger.to_string()));
        tracing::info!(
            "Allocated seat {seat} on {} to {passenger}",
            self.flight_number
        );
        Ok(())
    }

    /// Move a passenger from one seat to another.
    ///
    /// Both references are validated and both slots checked before anything
    /// is written, so a failed relocation leaves the grid untouched and a
    /// successful one is a single step from the caller's point of view.
    pub fn relocate(&mut self, from: &str, to: &str) -> Result<(), LedgerError> {
        let from = self.plan.parse_seat(from)?;
        let to = self.plan.parse_seat(to)?;

        let passenger = match self.occupant_at(from) {
            Some(p) => p.to_string(),
            None => return Err(LedgerError::SeatNotOccupied { seat: from }),
        };
        if self.occupant_at(to).is_some() {
            tracing::warn!("Refused relocation into occupied seat {to}");
            return Err(LedgerError::SeatOccupied { seat: to });
        }

        self.seating.insert(to, Some(passenger));
        self.seating.insert(from, None);
        tracing::info!(
            "Relocated passenger from {from} to {to} on {}",
            self.flight_number
        );
        Ok(())
    }

    /// Number of unoccupied seats across the whole cabin.
    pub fn available_seats(&self) -> usize {
        self.seating.values().filter(|slot| slot.is_none()).count()
    }

    /// Number of occupied seats across the whole cabin.
    pub fn occupied_seats(&self) -> usize {
        self.seating.values().filter(|slot| slot.is_some()).count()
    }

    /// Look up the occupant of a single seat.
    pub fn occupant(&self, seat: &str) -> Result<Option<&str>, LedgerError> {
        let seat = self.plan.parse_seat(seat)?;
        Ok(self.occupant_at(seat))
    }

    /// Ordered row-by-row snapshot of the cabin, for presentation layers.
    pub fn seat_map(&self) -> SeatMap {
        let mut rows: Vec<SeatRow> = self
            .plan
            .row_numbers()
            .map(|row| SeatRow {
                row,
                seats: Vec::with_capacity(self.plan.letters().len()),
            })
            .collect();

        // seat_refs is row-major, so letters land in cabin order
        for seat in self.plan.seat_refs() {
            rows[(seat.row() - 1) as usize].seats.push(SeatAssignment {
                letter: seat.letter(),
                occupant: self.occupant_at(seat).map(str::to_string),
            });
        }

        SeatMap {
            flight_number: self.flight_number.as_str().to_string(),
            rows,
        }
    }

    fn occupant_at(&self, seat: SeatRef) -> Option<&str> {
        self.seating.get(&seat).and_then(|slot| slot.as_deref())
    }
}

/// Seat-ledger operation errors
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Flight(#[from] FlightNumberError),

    #[error(transparent)]
    Seat(#[from] SeatRefError),

    #[error("Seat {seat} is already occupied")]
    SeatOccupied { seat: SeatRef },

    #[error("Seat {seat} is not occupied")]
    SeatNotOccupied { seat: SeatRef },
}
