use super::entities::{user, User as UserEntity};
use crate::domain::User;
use quoteboard_errors::AppError;
use sea_orm::{entity::*, query::*, DatabaseConnection};

#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let model = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    pub async fn insert(&self, user: &User) -> Result<User, AppError> {
        let active = user::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(Some(chrono::Utc::now())),
        };
        let model = active.insert(&self.db).await?;
        Ok(model.into())
    }
}
