/// Top-level envelope returned by the sunrise-sunset.org `json` endpoint.
///
/// `results` is kept untyped until `status` is known to be `OK`: on error statuses
/// the API sends `"results": ""` instead of an object.
#[derive(serde::Deserialize, Debug)]
pub struct ApiResponse {
    /// "OK" on success, otherwise an error code such as "INVALID_REQUEST"
    pub status: String,
    #[serde(default)]
    pub results: serde_json::Value,
}

/// Sun event times for one day, requested with `formatted=0`.
///
/// Every timestamp is an RFC-3339 string in UTC (e.g. "2024-06-21T02:14:00+00:00").
/// Missing fields decode as empty strings and later render as invalid times.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// Length of the day in seconds
    pub day_length: i64,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub nautical_twilight_begin: String,
    pub nautical_twilight_end: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
}
