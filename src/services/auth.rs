//! Login and logout against the public auth endpoint.

use chrono::TimeDelta;

use crate::TOKEN_TTL_HOURS;
use crate::api::{ApiResult, ApiTransport};
use crate::domain::auth::{LoginCredentials, LoginResponse};
use crate::services::decode;
use crate::session::{SessionStorage, SessionStore};

const LOGIN_PATH: &str = "/auth/login";

/// Authenticates against `/auth/login`.
///
/// On success the returned token is stored with a fixed 24-hour expiry and
/// the user identity is cached. On failure any existing session state is
/// cleared and the original error is re-propagated.
pub async fn login<A, S>(
    api: &A,
    session: &SessionStore<S>,
    credentials: &LoginCredentials,
) -> ApiResult<LoginResponse>
where
    A: ApiTransport,
    S: SessionStorage,
{
    let attempt = async {
        let body = serde_json::to_value(credentials)?;
        let value = api.post_public(LOGIN_PATH, body).await?;
        decode::<LoginResponse>(value)
    };

    match attempt.await {
        Ok(response) => {
            session.set_token(&response.token, Some(TimeDelta::hours(TOKEN_TTL_HOURS)));
            session.set_user(&response.data);
            Ok(response)
        }
        Err(err) => {
            session.clear();
            Err(err)
        }
    }
}

/// Clears the session; never fails outward.
pub fn logout<S: SessionStorage>(session: &SessionStore<S>) {
    session.clear();
}
