use serde::Deserialize;

/// Body shape the backend uses for every non-2xx response it produces
/// itself. Anything else (proxy errors, HTML error pages) will fail to
/// deserialize into this and is treated as an unknown error.
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
