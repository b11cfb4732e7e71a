use thiserror::Error;

/// Failures that end a sun-times run.
///
/// The `Display` output of each variant is the single diagnostic line shown to the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure: connection, DNS or reading the response body
    #[error("Error making request: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body is not the expected JSON shape
    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// API answered with a status other than `OK`
    #[error("API returned an error: {0}")]
    ApiStatus(String),

    /// Timezone identifier is not in the tz database
    #[error("Error loading location: {0}")]
    TimeZone(String),
}
