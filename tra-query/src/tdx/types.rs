//! TDX API response DTOs.
//!
//! These types map directly to the TDX v3 JSON responses. Most fields are
//! `Option` because the provider omits rather than nulls many of them.

use serde::Deserialize;

/// Response from `Rail/TRA/DailyTrainTimetable/OD/{from}/to/{to}/{date}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyTimetableResponse {
    /// When the provider last updated this data (ISO 8601).
    pub update_time: Option<String>,

    /// Update interval in seconds.
    pub update_interval: Option<i64>,

    /// The service date the timetables belong to.
    pub train_date: Option<String>,

    /// One entry per train running between the two stations.
    #[serde(default)]
    pub train_timetables: Vec<TrainTimetable>,
}

/// A train and its stop times at the requested stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainTimetable {
    pub train_info: TrainInfo,

    #[serde(default)]
    pub stop_times: Vec<StopTime>,
}

/// Static information about a train.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainInfo {
    /// Train number (e.g. "123"). Text, like station codes.
    pub train_no: String,

    /// 0 = clockwise (順行), 1 = counterclockwise (逆行).
    pub direction: Option<u8>,

    /// Provider train type identifier.
    #[serde(rename = "TrainTypeID")]
    pub train_type_id: Option<String>,

    /// Train type (e.g. 自強, 莒光, 區間).
    pub train_type_name: Option<LocalizedName>,

    /// Station the train starts its run from.
    #[serde(rename = "StartingStationID")]
    pub starting_station_id: Option<String>,
    pub starting_station_name: Option<LocalizedName>,

    /// Station the train ends its run at.
    #[serde(rename = "EndingStationID")]
    pub ending_station_id: Option<String>,
    pub ending_station_name: Option<LocalizedName>,

    /// Free-text remarks.
    pub note: Option<String>,
}

/// A scheduled stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopTime {
    pub stop_sequence: Option<u32>,

    #[serde(rename = "StationID")]
    pub station_id: String,

    pub station_name: Option<LocalizedName>,

    /// "HH:MM" or "HH:MM:SS", local time.
    pub arrival_time: Option<String>,

    /// "HH:MM" or "HH:MM:SS", local time.
    pub departure_time: Option<String>,
}

/// A name in Traditional Chinese and English.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "Zh_tw")]
    pub zh_tw: Option<String>,

    #[serde(rename = "En")]
    pub en: Option<String>,
}

impl LocalizedName {
    /// Chinese name, falling back to English.
    pub fn preferred(&self) -> Option<&str> {
        self.zh_tw.as_deref().or(self.en.as_deref())
    }
}
