use crate::domain::{CallerIdentity, User};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use quoteboard_errors::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: i64,
}

/// Issues and verifies the HS256 session tokens that prove caller
/// identity at the HTTP boundary.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<CallerIdentity, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;
        Ok(CallerIdentity {
            user_id: data.claims.sub,
            username: data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_user() -> User {
        User::new("marcus".to_string(), "irrelevant".to_string())
    }

    #[test]
    fn issued_token_verifies_back_to_the_same_identity() {
        let issuer = TokenIssuer::new("test-secret");
        let user = some_user();
        let token = issuer.issue(&user).unwrap();

        let identity = issuer.verify(&token).unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "marcus");
    }

    #[test]
    fn tampered_token_is_unauthorized() {
        let issuer = TokenIssuer::new("test-secret");
        let mut token = issuer.issue(&some_user()).unwrap();
        let last = token.pop().unwrap();
        token.push(if last == 'x' { 'y' } else { 'x' });
        assert!(matches!(issuer.verify(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn token_from_a_different_secret_is_rejected() {
        let token = TokenIssuer::new("secret-a").issue(&some_user()).unwrap();
        assert!(TokenIssuer::new("secret-b").verify(&token).is_err());
    }
}
