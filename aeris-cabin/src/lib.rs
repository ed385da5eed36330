pub mod ledger;
pub mod map;

pub use ledger::{LedgerError, SeatLedger};
pub use map::{SeatAssignment, SeatMap, SeatRow};
