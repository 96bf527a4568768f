use crate::error::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use snafu::ResultExt;

/// Where to send the user once the identity provider redirects back.
/// Carried inside the OAuth `state` parameter, scoped to a single login
/// attempt.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub return_path: Option<String>,
}

impl AuthState {
    pub fn new(return_path: Option<String>) -> AuthState {
        AuthState { return_path }
    }

    pub fn encode(&self) -> String {
        json!({ "returnPath": self.return_path }).to_string()
    }

    pub fn decode(s: &str) -> Result<AuthState, ApiError> {
        serde_json::from_str(s).context(DeserializationError {
            body: s.to_string(),
        })
    }
}
