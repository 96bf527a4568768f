mod access_token;
mod state;

pub use self::access_token::{AccessToken, RealmAccess, Role, ROLE_PREFIX};
pub use self::state::AuthState;

use url::form_urlencoded;

/// Builds the identity provider's login redirect. `state` round-trips back
/// to us on the callback so the post-login destination never touches
/// ambient browser storage.
pub fn login_url(authority: &str, client_id: &str, redirect_uri: &str, state: &AuthState) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", "openid")
        .append_pair("state", &state.encode())
        .finish();
    format!(
        "{}/protocol/openid-connect/auth?{}",
        authority.trim_end_matches('/'),
        query
    )
}

pub fn logout_url(authority: &str, redirect_uri: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("post_logout_redirect_uri", redirect_uri)
        .finish();
    format!(
        "{}/protocol/openid-connect/logout?{}",
        authority.trim_end_matches('/'),
        query
    )
}
