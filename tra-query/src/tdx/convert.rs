//! Conversion from TDX DTOs to train services.
//!
//! Each train in an OD timetable carries stop times for the requested
//! origin and destination. We pull out the departure at one and the
//! arrival at the other.

use chrono::{Duration, NaiveTime};
use tracing::warn;

use crate::request::ResolvedRoute;

use super::types::{DailyTimetableResponse, LocalizedName, StopTime, TrainTimetable};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The train has no stop at a requested station
    #[error("train {train_no} has no stop at station {station}")]
    MissingStop { train_no: String, station: String },

    /// A stop is missing the time we need
    #[error("train {train_no} has no {which} time at station {station}")]
    MissingTime {
        train_no: String,
        station: String,
        which: &'static str,
    },

    /// Failed to parse a time string
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// Direction of travel around the TRA network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 順行
    Clockwise,
    /// 逆行
    Counterclockwise,
}

impl Direction {
    /// Map the provider's numeric direction flag.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Direction::Clockwise),
            1 => Some(Direction::Counterclockwise),
            _ => None,
        }
    }
}

/// A train running between the requested stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainService {
    pub train_no: String,
    pub train_type: Option<String>,
    pub direction: Option<Direction>,
    pub starting_station: Option<String>,
    pub ending_station: Option<String>,
    /// Departure from the requested origin.
    pub departure: NaiveTime,
    /// Arrival at the requested destination.
    pub arrival: NaiveTime,
    pub note: Option<String>,
}

impl TrainService {
    /// Travel time, allowing for trains that arrive after midnight.
    pub fn duration(&self) -> Duration {
        let d = self.arrival - self.departure;
        if d < Duration::zero() {
            d + Duration::days(1)
        } else {
            d
        }
    }
}

/// Parse "HH:MM" or "HH:MM:SS".
pub fn parse_time(s: &str) -> Result<NaiveTime, ConversionError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}

/// Convert an OD timetable response into trains, sorted by departure.
///
/// Trains that can't be converted are logged and skipped rather than
/// failing the whole timetable.
pub fn convert_timetable(
    response: &DailyTimetableResponse,
    route: &ResolvedRoute,
) -> Vec<TrainService> {
    let mut trains: Vec<TrainService> = response
        .train_timetables
        .iter()
        .filter_map(|t| match convert_train(t, route) {
            Ok(train) => Some(train),
            Err(e) => {
                warn!(train_no = %t.train_info.train_no, error = %e, "skipping train");
                None
            }
        })
        .collect();

    trains.sort_by(|a, b| {
        a.departure
            .cmp(&b.departure)
            .then_with(|| a.train_no.cmp(&b.train_no))
    });

    trains
}

/// Convert a single train.
pub fn convert_train(
    timetable: &TrainTimetable,
    route: &ResolvedRoute,
) -> Result<TrainService, ConversionError> {
    let info = &timetable.train_info;
    let train_no = &info.train_no;

    let origin = find_stop(timetable, route.origin_code.as_str())?;
    let destination = find_stop(timetable, route.destination_code.as_str())?;

    let departure = stop_time(origin, train_no, "departure", |s| s.departure_time.as_deref())?;
    let arrival = stop_time(destination, train_no, "arrival", |s| s.arrival_time.as_deref())?;

    let name = |n: &Option<LocalizedName>| {
        n.as_ref().and_then(|n| n.preferred()).map(str::to_string)
    };

    Ok(TrainService {
        train_no: train_no.clone(),
        train_type: name(&info.train_type_name),
        direction: info.direction.and_then(Direction::from_flag),
        starting_station: name(&info.starting_station_name),
        ending_station: name(&info.ending_station_name),
        departure,
        arrival,
        note: info.note.clone().filter(|n| !n.trim().is_empty()),
    })
}

fn find_stop<'a>(
    timetable: &'a TrainTimetable,
    station: &str,
) -> Result<&'a StopTime, ConversionError> {
    timetable
        .stop_times
        .iter()
        .find(|s| s.station_id == station)
        .ok_or_else(|| ConversionError::MissingStop {
            train_no: timetable.train_info.train_no.clone(),
            station: station.to_string(),
        })
}

fn stop_time(
    stop: &StopTime,
    train_no: &str,
    which: &'static str,
    field: impl Fn(&StopTime) -> Option<&str>,
) -> Result<NaiveTime, ConversionError> {
    let raw = field(stop).ok_or_else(|| ConversionError::MissingTime {
        train_no: train_no.to_string(),
        station: stop.station_id.clone(),
        which,
    })?;
    parse_time(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationCode, TravelDate};

    fn route() -> ResolvedRoute {
        ResolvedRoute::new(
            StationCode::parse("3360").unwrap(),
            StationCode::parse("4220").unwrap(),
            TravelDate::parse("2024-12-08").unwrap(),
        )
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    const SAMPLE: &str = r#"{
        "TrainDate": "2024-12-08",
        "TrainTimetables": [
            {
                "TrainInfo": {
                    "TrainNo": "151",
                    "Direction": 0,
                    "TrainTypeName": {"Zh_tw": "自強", "En": "Tze-Chiang"},
                    "StartingStationName": {"Zh_tw": "臺北", "En": "Taipei"},
                    "EndingStationName": {"Zh_tw": "高雄", "En": "Kaohsiung"},
                    "Note": "每日行駛。"
                },
                "StopTimes": [
                    {"StopSequence": 1, "StationID": "3360", "ArrivalTime": "10:00", "DepartureTime": "10:02"},
                    {"StopSequence": 2, "StationID": "4220", "ArrivalTime": "11:20", "DepartureTime": "11:22"}
                ]
            },
            {
                "TrainInfo": {"TrainNo": "2135", "Direction": 0, "Note": " "},
                "StopTimes": [
                    {"StationID": "3360", "DepartureTime": "06:15:00"},
                    {"StationID": "4220", "ArrivalTime": "08:40:00"}
                ]
            },
            {
                "TrainInfo": {"TrainNo": "999"},
                "StopTimes": [
                    {"StationID": "3360", "DepartureTime": "07:00"}
                ]
            }
        ]
    }"#;

    fn sample() -> DailyTimetableResponse {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn parse_time_formats() {
        assert_eq!(parse_time("08:02").unwrap(), time(8, 2));
        assert_eq!(parse_time("08:02:00").unwrap(), time(8, 2));
        assert!(parse_time("8h02").is_err());
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn converts_and_sorts() {
        let trains = convert_timetable(&sample(), &route());

        // Train 999 has no destination stop and is skipped
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[0].train_no, "2135");
        assert_eq!(trains[0].departure, time(6, 15));
        assert_eq!(trains[0].arrival, time(8, 40));
        assert_eq!(trains[0].note, None);

        assert_eq!(trains[1].train_no, "151");
        assert_eq!(trains[1].train_type.as_deref(), Some("自強"));
        assert_eq!(trains[1].direction, Some(Direction::Clockwise));
        assert_eq!(trains[1].starting_station.as_deref(), Some("臺北"));
        assert_eq!(trains[1].ending_station.as_deref(), Some("高雄"));
        assert_eq!(trains[1].departure, time(10, 2));
        assert_eq!(trains[1].arrival, time(11, 20));
        assert_eq!(trains[1].duration(), Duration::minutes(78));
    }

    #[test]
    fn missing_stop_error() {
        let resp = sample();
        let err = convert_train(&resp.train_timetables[2], &route()).unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingStop {
                train_no: "999".into(),
                station: "4220".into()
            }
        );
    }

    #[test]
    fn missing_time_error() {
        let json = r#"{"TrainInfo": {"TrainNo": "1"}, "StopTimes": [
            {"StationID": "3360", "ArrivalTime": "10:00"},
            {"StationID": "4220", "ArrivalTime": "11:00"}
        ]}"#;
        let t: TrainTimetable = serde_json::from_str(json).unwrap();
        let err = convert_train(&t, &route()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "train 1 has no departure time at station 3360"
        );
    }

    #[test]
    fn overnight_duration() {
        let train = TrainService {
            train_no: "1".into(),
            train_type: None,
            direction: None,
            starting_station: None,
            ending_station: None,
            departure: time(23, 30),
            arrival: time(0, 45),
            note: None,
        };
        assert_eq!(train.duration(), Duration::minutes(75));
    }

    #[test]
    fn direction_flags() {
        assert_eq!(Direction::from_flag(0), Some(Direction::Clockwise));
        assert_eq!(Direction::from_flag(1), Some(Direction::Counterclockwise));
        assert_eq!(Direction::from_flag(2), None);
    }

    #[test]
    fn empty_timetable() {
        let resp: DailyTimetableResponse = serde_json::from_str("{}").unwrap();
        assert!(convert_timetable(&resp, &route()).is_empty());
    }
}
