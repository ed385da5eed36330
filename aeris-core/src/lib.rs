pub mod aircraft;
pub mod flight;

pub use aircraft::{Aircraft, AircraftError, SeatRef, SeatRefError, SeatingPlan, SEAT_LETTERS};
pub use flight::{FlightNumber, FlightNumberError};
