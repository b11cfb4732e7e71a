// Module containing response data structures for the sunrise-sunset API
pub mod response;

use crate::{error::AppError, location::Location};
use response::{ApiResponse, SunTimes};
use tracing::{debug, info, warn};

// API endpoint for the sunrise-sunset.org service
const SUN_TIMES_ENDPOINT: &str = "https://api.sunrise-sunset.org/json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Status the API reports when `results` holds valid data
const STATUS_OK: &str = "OK";

/// HTTP client for the sunrise-sunset.org API.
pub struct SunTimesClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SunTimesClient {
    /// Creates a client for the public API endpoint.
    pub fn new() -> Result<Self, AppError> {
        Self::with_endpoint(SUN_TIMES_ENDPOINT)
    }

    /// Creates a client that sends requests to `endpoint` instead of the public API.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetches today's sun times for `location`.
    ///
    /// # Returns
    /// * `SunTimes` with UTC timestamps for every sun event
    /// * `AppError::Request` if the request or reading the body fails
    /// * `AppError::Decode` if the body is not the expected JSON
    /// * `AppError::ApiStatus` if the API reports a status other than `OK`
    pub async fn get_sun_times(&self, location: &Location) -> Result<SunTimes, AppError> {
        info!("Fetching sun times for location: {}", location.name);

        let url = request_url(&self.endpoint, location);
        debug!("Request URL: {}", url);

        let response = self.client.get(&url).send().await?;

        // Non-2xx answers are still decoded: the API puts its error status in the body
        if !response.status().is_success() {
            warn!("Sun times API answered with HTTP {}", response.status());
        }

        let body = response.bytes().await?;
        let sun_times = decode(&body)?;
        debug!(
            "Sun times fetched successfully, day length {}s: {:?}",
            sun_times.day_length, sun_times
        );
        Ok(sun_times)
    }
}

/// Builds the request URL for `location`, asking for ISO-8601 timestamps (`formatted=0`).
pub fn request_url(endpoint: &str, location: &Location) -> String {
    format!(
        "{}?lat={}&lng={}&formatted=0",
        endpoint, location.latitude, location.longitude
    )
}

/// Decodes a response body and checks the API status.
///
/// `results` is only interpreted once the status is `OK`.
pub fn decode(body: &[u8]) -> Result<SunTimes, AppError> {
    let api_response: ApiResponse = serde_json::from_slice(body)?;

    if api_response.status != STATUS_OK {
        warn!("Sun times API returned status {}", api_response.status);
        return Err(AppError::ApiStatus(api_response.status));
    }

    Ok(serde_json::from_value(api_response.results)?)
}
