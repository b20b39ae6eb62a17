use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::header;
use axum_extra::extract::cookie::CookieJar;
use quoteboard_app::domain::CallerIdentity;
use quoteboard_app::AppContext;
use quoteboard_errors::AppError;

use crate::routes::SESSION_COOKIE;

/// Extracts the verified caller from the session cookie or a bearer
/// header. Handlers receive an already-resolved [`CallerIdentity`]; the
/// application layer never sees a raw token.
pub struct AuthUser(pub CallerIdentity);

impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| AppError::Unauthorized("Missing session token".to_string()))?;
        let identity = ctx.tokens.verify(&token)?;
        Ok(AuthUser(identity))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header_name: &str, header_value: &str) -> Parts {
        Request::builder()
            .header(header_name, header_value)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let parts = parts_with("authorization", "Bearer abc123");
        assert_eq!(bearer_token(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn session_cookie_is_read_when_no_header_is_present() {
        let parts = parts_with("cookie", "jwt=tok456; other=1");
        assert_eq!(bearer_token(&parts), None);
        assert_eq!(cookie_token(&parts).as_deref(), Some("tok456"));
    }

    #[test]
    fn malformed_authorization_header_yields_nothing() {
        let parts = parts_with("authorization", "Token abc123");
        assert_eq!(bearer_token(&parts), None);
    }
}
