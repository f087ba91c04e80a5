//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::request::{RequestDescriptor, ResolvedRoute};
use crate::stations::Station;
use crate::tdx::{Direction, TrainService};

/// Request carrying a free-text query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// e.g. "2024-12-08 彰化到臺南"
    pub q: String,
}

/// A station name and its code.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub code: String,
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Response for a resolved query.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Travel date as given in the query
    pub date: String,

    pub origin: StationResult,
    pub destination: StationResult,

    /// Provider endpoint for this query
    pub url: String,
}

/// A train between the requested stations.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    pub train_no: String,

    /// Train type (自強, 區間, ...)
    pub train_type: Option<String>,

    /// "clockwise" or "counterclockwise"
    pub direction: Option<&'static str>,

    pub starting_station: Option<String>,
    pub ending_station: Option<String>,

    /// Departure from origin, HH:MM
    pub departure: String,

    /// Arrival at destination, HH:MM
    pub arrival: String,

    /// Duration in minutes
    pub duration_mins: i64,

    pub note: Option<String>,
}

/// Response for a timetable query.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    #[serde(flatten)]
    pub query: ResolveResponse,

    /// Trains ordered by departure
    pub trains: Vec<TrainResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Pipeline stage that failed ("extraction", "lookup", "upstream")
    pub stage: &'static str,

    /// Error message
    pub error: String,

    /// Offending input fragment, if any
    pub fragment: Option<String>,
}

// Conversion implementations

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            code: station.code.to_string(),
        }
    }
}

impl ResolveResponse {
    /// Build from the parsed names, the resolved route, and its request.
    pub fn new(
        origin_name: &str,
        destination_name: &str,
        route: &ResolvedRoute,
        request: &RequestDescriptor,
    ) -> Self {
        Self {
            date: route.date.to_string(),
            origin: StationResult {
                name: origin_name.to_string(),
                code: route.origin_code.to_string(),
            },
            destination: StationResult {
                name: destination_name.to_string(),
                code: route.destination_code.to_string(),
            },
            url: request.url(),
        }
    }
}

impl From<&TrainService> for TrainResult {
    fn from(train: &TrainService) -> Self {
        Self {
            train_no: train.train_no.clone(),
            train_type: train.train_type.clone(),
            direction: train.direction.map(|d| match d {
                Direction::Clockwise => "clockwise",
                Direction::Counterclockwise => "counterclockwise",
            }),
            starting_station: train.starting_station.clone(),
            ending_station: train.ending_station.clone(),
            departure: train.departure.format("%H:%M").to_string(),
            arrival: train.arrival.format("%H:%M").to_string(),
            duration_mins: train.duration().num_minutes(),
            note: train.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::domain::{StationCode, TravelDate};
    use crate::request::build;

    #[test]
    fn train_result_from_service() {
        let train = TrainService {
            train_no: "151".into(),
            train_type: Some("自強".into()),
            direction: Some(Direction::Counterclockwise),
            starting_station: Some("高雄".into()),
            ending_station: Some("臺北".into()),
            departure: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            arrival: NaiveTime::from_hms_opt(10, 40, 0).unwrap(),
            note: None,
        };

        let result = TrainResult::from(&train);
        assert_eq!(result.departure, "09:05");
        assert_eq!(result.arrival, "10:40");
        assert_eq!(result.duration_mins, 95);
        assert_eq!(result.direction, Some("counterclockwise"));
    }

    #[test]
    fn resolve_response_json() {
        let route = ResolvedRoute::new(
            StationCode::parse("0900").unwrap(),
            StationCode::parse("1000").unwrap(),
            TravelDate::parse("2024-12-08").unwrap(),
        );
        let request = build(&route);
        let response = ResolveResponse::new("基隆", "臺北", &route, &request);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["date"], "2024-12-08");
        assert_eq!(json["origin"]["name"], "基隆");
        assert_eq!(json["origin"]["code"], "0900");
        assert_eq!(json["destination"]["code"], "1000");
        assert!(json["url"].as_str().unwrap().contains("/OD/0900/to/1000/"));
    }

    #[test]
    fn timetable_response_flattens_query() {
        let route = ResolvedRoute::new(
            StationCode::parse("3360").unwrap(),
            StationCode::parse("4220").unwrap(),
            TravelDate::parse("2024-12-08").unwrap(),
        );
        let request = build(&route);
        let response = TimetableResponse {
            query: ResolveResponse::new("彰化", "臺南", &route, &request),
            trains: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["origin"]["code"], "3360");
        assert!(json["trains"].as_array().unwrap().is_empty());
    }
}
