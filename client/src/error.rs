use reqwest::StatusCode;
use snafu::Snafu;

/// Shown when the backend fails without a recognizable error payload.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum ApiError {
    #[snafu(display("Error occurred when calling {}: {}", url, source))]
    HttpError { url: String, source: reqwest::Error },
    #[snafu(display("Error reading HTTP response. Status: {}, Error: {}", status, source))]
    InvalidResponse {
        status: StatusCode,
        source: reqwest::Error,
    },
    #[snafu(display("Could not deserialize response body: {}, Error: {}", body, source))]
    DeserializationError {
        body: String,
        source: serde_json::Error,
    },
    #[snafu(display("Server returned an error: {}", message))]
    ResponseError { message: String },
    #[snafu(display("Unexpected response from server. Status: {}", status))]
    UnexpectedResponse { status: StatusCode },
    #[snafu(display("Could not decode access token claims: {}", source))]
    InvalidToken { source: jsonwebtoken::errors::Error },
}

impl ApiError {
    /// The one message suitable for inline display. Backend-supplied error
    /// messages pass through unchanged; every other failure collapses to the
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::ResponseError { message } => message.clone(),
            _ => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}
