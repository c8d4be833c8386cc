//! Cookie-based session resolution.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::domain::{SessionToken, User};

use super::state::AppState;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "id";

/// Header telling htmx to navigate the whole page
const HX_REDIRECT: &str = "HX-Redirect";

/// Session token carried by the request, if any
pub fn session_token(jar: &CookieJar) -> Option<SessionToken> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| SessionToken::new(cookie.value()))
        .filter(|token| !token.as_str().is_empty())
}

/// Cookie persisting a freshly issued session token
pub fn session_cookie(token: &SessionToken) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.as_str().to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Send the browser back to `/`, where a new session is started
pub fn redirect_home() -> Response {
    (StatusCode::OK, [(HX_REDIRECT, "/")]).into_response()
}

/// The live user behind the request's session cookie.
///
/// Resolving it counts as a liveness ping. Requests without a live session
/// are answered with an htmx redirect to `/`.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = session_token(&jar) else {
            return Err(redirect_home());
        };

        match state.resume_session_usecase.execute(&token).await {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                tracing::debug!("Session expired or unknown, redirecting to /");
                Err(redirect_home())
            }
        }
    }
}
