use crate::domain::User;
use crate::infrastructure::auth::{password, TokenIssuer};
use crate::infrastructure::db::UserRepository;
use quoteboard_errors::AppError;

/// Registration and login. Both issue the same shape of session token on
/// success; the password only ever leaves this module as a bcrypt hash.
pub struct Accounts {
    users: UserRepository,
    tokens: TokenIssuer,
}

impl Accounts {
    pub fn new(users: UserRepository, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<String, AppError> {
        validate_credentials(username, password)?;

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }

        let hashed = password::hash(password)?;
        let user = self
            .users
            .insert(&User::new(username.to_string(), hashed))
            .await?;

        tracing::info!(username = %user.username, "user registered");
        self.tokens.issue(&user)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !password::verify(password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        self.tokens.issue(&user)
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidArgument(
            "Username and password are required".to_string(),
        ));
    }
    Ok(())
}
