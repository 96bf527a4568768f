use crate::error::*;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const ROLE_PREFIX: &str = "ROLE_";

/// Claims read from the bearer token. The signature is not verified here;
/// the backend rejects tampered tokens, the client only branches dashboard
/// views on the claim set.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub sub: String,
    pub exp: u64,
    #[serde(default)]
    pub realm_access: RealmAccess,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Role {
    Organizer,
    Attendee,
    Staff,
}

impl Role {
    pub fn parse(s: &str) -> Result<Role, &'static str> {
        match s {
            "ROLE_ORGANIZER" => Ok(Role::Organizer),
            "ROLE_ATTENDEE" => Ok(Role::Attendee),
            "ROLE_STAFF" => Ok(Role::Staff),
            _ => Err("Could not parse role. Unexpected value occurred"),
        }
    }
}

impl AccessToken {
    pub fn decode(token: &str) -> Result<AccessToken, ApiError> {
        let data =
            jsonwebtoken::dangerous_insecure_decode::<AccessToken>(token).context(InvalidToken)?;
        Ok(data.claims)
    }

    pub fn is_expired(&self) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        self.exp <= now
    }

    /// The identity provider mixes its own bookkeeping roles into
    /// `realm_access`; only `ROLE_`-prefixed entries belong to us.
    pub fn roles(&self) -> Vec<Role> {
        self.realm_access
            .roles
            .iter()
            .filter(|role| role.starts_with(ROLE_PREFIX))
            .filter_map(|role| Role::parse(role).ok())
            .collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}
