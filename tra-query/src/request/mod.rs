//! TDX request construction.
//!
//! Builds the `DailyTrainTimetable/OD` endpoint for a resolved route. The
//! result is a plain value; issuing it is the job of [`crate::tdx`].

mod builder;

pub use builder::{
    DEFAULT_BASE_URL, RequestBuilder, RequestDescriptor, ResolvedRoute, build,
};
