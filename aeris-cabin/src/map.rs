use serde::{Deserialize, Serialize};

/// Row-by-row snapshot of a flight's cabin occupancy.
///
/// This is the read surface for chart rendering: the ledger never prints
/// anything itself, it hands one of these to whatever presents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    pub flight_number: String,
    pub rows: Vec<SeatRow>,
}

/// One cabin row, letters in cabin order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRow {
    pub row: u32,
    pub seats: Vec<SeatAssignment>,
}

/// One slot: a seat letter and its occupant, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub letter: char,
    pub occupant: Option<String>,
}

impl SeatMap {
    /// Total number of slots in the snapshot
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|row| row.seats.len()).sum()
    }

    /// Number of occupied slots in the snapshot
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.seats)
            .filter(|seat| seat.occupant.is_some())
            .count()
    }
}
