//! Request descriptor builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{StationCode, TravelDate};

/// Default root of the TDX basic API.
pub const DEFAULT_BASE_URL: &str = "https://tdx.transportdata.tw/api/basic/v3";

/// Fixed path of the origin/destination daily timetable endpoint.
const OD_PATH: [&str; 4] = ["Rail", "TRA", "DailyTrainTimetable", "OD"];

/// A route whose station names have both been resolved to codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub origin_code: StationCode,
    pub destination_code: StationCode,
    pub date: TravelDate,
}

impl ResolvedRoute {
    /// Create a route from its parts.
    pub fn new(origin_code: StationCode, destination_code: StationCode, date: TravelDate) -> Self {
        Self {
            origin_code,
            destination_code,
            date,
        }
    }
}

/// A fully formed provider request.
///
/// Holds everything needed to issue the GET: the API root, the path
/// segments in order, and the query parameters (kept sorted so equal
/// requests compare and render identically).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub base_url: String,
    pub path_segments: Vec<String>,
    pub query_params: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Render the full request URL.
    ///
    /// Segments and parameter values are emitted verbatim. Station codes,
    /// dates, and `$format=json` are all URL-safe as they stand, and the
    /// provider expects the `$` unescaped.
    pub fn url(&self) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();

        for segment in &self.path_segments {
            url.push('/');
            url.push_str(segment);
        }

        let mut separator = '?';
        for (name, value) in &self.query_params {
            url.push(separator);
            url.push_str(name);
            url.push('=');
            url.push_str(value);
            separator = '&';
        }

        url
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.url())
    }
}

/// Builds request descriptors against a configurable API root.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
}

impl RequestBuilder {
    /// Create a builder for the given API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The API root used for every request.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the daily timetable request for a route.
    ///
    /// Codes are copied as text, so a code such as `0900` keeps its
    /// leading zero.
    pub fn build(&self, route: &ResolvedRoute) -> RequestDescriptor {
        let mut path_segments: Vec<String> = OD_PATH.iter().map(|s| s.to_string()).collect();
        path_segments.extend([
            route.origin_code.as_str().to_string(),
            "to".to_string(),
            route.destination_code.as_str().to_string(),
            route.date.as_str().to_string(),
        ]);

        let query_params = BTreeMap::from([("$format".to_string(), "json".to_string())]);

        RequestDescriptor {
            base_url: self.base_url.clone(),
            path_segments,
            query_params,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Build the daily timetable request against the default API root.
///
/// # Examples
///
/// ```
/// use tra_query::domain::{StationCode, TravelDate};
/// use tra_query::request::{ResolvedRoute, build};
///
/// let route = ResolvedRoute::new(
///     StationCode::parse("0900").unwrap(),
///     StationCode::parse("1000").unwrap(),
///     TravelDate::parse("2024-12-08").unwrap(),
/// );
/// assert_eq!(
///     build(&route).url(),
///     "https://tdx.transportdata.tw/api/basic/v3/Rail/TRA/DailyTrainTimetable/OD/0900/to/1000/2024-12-08?$format=json"
/// );
/// ```
pub fn build(route: &ResolvedRoute) -> RequestDescriptor {
    RequestBuilder::default().build(route)
}
