use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter bank for up to ten-abreast cabins. "I" is skipped so it cannot be
/// mistaken for "1" on a boarding pass.
pub const SEAT_LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K'];

/// A specific type of aircraft operating a flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    registration: String,
    model: String,
    num_rows: u32,
    seats_per_row: u8,
}

impl Aircraft {
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        num_rows: u32,
        seats_per_row: u8,
    ) -> Result<Self, AircraftError> {
        if num_rows == 0 {
            return Err(AircraftError::NoRows);
        }
        if seats_per_row == 0 || seats_per_row as usize > SEAT_LETTERS.len() {
            return Err(AircraftError::InvalidSeatsPerRow { got: seats_per_row });
        }

        Ok(Self {
            registration: registration.into(),
            model: model.into(),
            num_rows,
            seats_per_row,
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Derive the seating plan for this cabin configuration
    pub fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan {
            num_rows: self.num_rows,
            letters: SEAT_LETTERS[..self.seats_per_row as usize].to_vec(),
        }
    }
}

/// Aircraft configuration errors
#[derive(Debug, thiserror::Error)]
pub enum AircraftError {
    #[error("Aircraft must have at least one seat row")]
    NoRows,

    #[error("Seats per row must be between 1 and 10, got {got}")]
    InvalidSeatsPerRow { got: u8 },
}

/// Seating plan derived from an aircraft: valid row numbers plus valid seat
/// letters. Owns seat-reference parsing so every consumer validates
/// references the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingPlan {
    num_rows: u32,
    letters: Vec<char>,
}

impl SeatingPlan {
    /// Row numbers in cabin order, front to back
    pub fn row_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.num_rows
    }

    /// Seat letters in cabin order, port to starboard
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Every seat in the plan, row-major
    pub fn seat_refs(&self) -> impl Iterator<Item = SeatRef> + '_ {
        self.row_numbers().flat_map(move |row| {
            self.letters
                .iter()
                .map(move |&letter| SeatRef { row, letter })
        })
    }

    pub fn seat_count(&self) -> usize {
        self.num_rows as usize * self.letters.len()
    }

    /// Parse a seat reference such as "12C": the trailing character is the
    /// seat letter, the prefix is the row number.
    pub fn parse_seat(&self, seat: &str) -> Result<SeatRef, SeatRefError> {
        let Some(letter) = seat.chars().last() else {
            return Err(SeatRefError::InvalidSeatLetter {
                letter: String::new(),
            });
        };
        if !self.letters.contains(&letter) {
            return Err(SeatRefError::InvalidSeatLetter {
                letter: letter.to_string(),
            });
        }

        let row_text = &seat[..seat.len() - letter.len_utf8()];
        let row: i64 = row_text
            .parse()
            .map_err(|_| SeatRefError::InvalidSeatRow {
                row: row_text.to_string(),
            })?;

        if row < 1 || row > i64::from(self.num_rows) {
            return Err(SeatRefError::InvalidRowNumber { row });
        }

        Ok(SeatRef {
            row: row as u32,
            letter,
        })
    }
}

/// A validated seat reference inside some seating plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    row: u32,
    letter: char,
}

impl SeatRef {
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for SeatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

/// Seat-reference parsing errors
#[derive(Debug, thiserror::Error)]
pub enum SeatRefError {
    #[error("Invalid seat letter {letter:?}")]
    InvalidSeatLetter { letter: String },

    #[error("Invalid seat row {row:?}")]
    InvalidSeatRow { row: String },

    #[error("Invalid row number {row}")]
    InvalidRowNumber { row: i64 },
}
