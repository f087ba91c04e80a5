//! Domain types for the timetable query resolver.
//!
//! These types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod date;
mod station;

pub use date::{InvalidTravelDate, TravelDate};
pub use station::{InvalidStationCode, StationCode};
