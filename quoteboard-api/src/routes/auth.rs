use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use quoteboard_app::infrastructure::auth::TOKEN_TTL_HOURS;
use quoteboard_app::AppContext;
use quoteboard_errors::AppError;
use serde::Deserialize;
use serde_json::{json, Value};

pub const SESSION_COOKIE: &str = "jwt";

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

async fn register(
    State(ctx): State<AppContext>,
    Json(body): Json<Credentials>,
) -> Result<Json<Value>, AppError> {
    let token = ctx.accounts.register(&body.username, &body.password).await?;
    Ok(Json(json!({ "access_token": token })))
}

async fn login(
    State(ctx): State<AppContext>,
    jar: CookieJar,
    Json(body): Json<Credentials>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    let token = ctx.accounts.login(&body.username, &body.password).await?;
    let jar = jar.add(session_cookie(token));
    Ok((jar, Json(json!({ "message": "Login successful" }))))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(json!({ "message": "Logout successful" })))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(TOKEN_TTL_HOURS))
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_lax_and_day_long() {
        let cookie = session_cookie("tok".to_string());
        assert_eq!(cookie.name(), "jwt");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
        assert_eq!(cookie.path(), Some("/"));
    }
}
