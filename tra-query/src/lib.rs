//! TRA timetable query resolver.
//!
//! Turns a free-text query such as `2024-12-08 彰化到臺南` into the TDX
//! daily timetable request for that station pair, and optionally issues it.

pub mod config;
pub mod domain;
pub mod query;
pub mod request;
pub mod resolve;
pub mod stations;
pub mod tdx;
pub mod web;
