//! TDX (Transport Data eXchange) timetable client.
//!
//! Issues [`RequestDescriptor`](crate::request::RequestDescriptor)s against
//! the TDX basic API and turns the daily OD timetable into train services.
//!
//! The anonymous tier is heavily rate limited; configure client
//! credentials for anything beyond occasional use.

mod client;
mod convert;
mod error;
mod types;

pub use client::{Credentials, TdxClient, TdxConfig};
pub use convert::{
    ConversionError, Direction, TrainService, convert_timetable, convert_train, parse_time,
};
pub use error::TdxError;
pub use types::{DailyTimetableResponse, LocalizedName, StopTime, TrainInfo, TrainTimetable};
