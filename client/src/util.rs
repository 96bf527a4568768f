use crate::error::*;
use crate::response::ErrorResponse;
use log::Level::Error;
use logging::jlog;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

pub(crate) async fn json_or_error<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.context(InvalidResponse { status })?;
    if !status.is_success() {
        return Err(error_from_body(status, &body));
    }
    serde_json::from_str(&body).context(DeserializationError { body })
}

pub(crate) async fn ok_or_error(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.context(InvalidResponse { status })?;
    Err(error_from_body(status, &body))
}

pub(crate) fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => ApiError::ResponseError {
            message: response.error,
        },
        Err(_) => {
            jlog!(Error, "Unrecognized error response from server", {
                "status": status.as_u16(),
                "body": body
            });
            ApiError::UnexpectedResponse { status }
        }
    }
}
