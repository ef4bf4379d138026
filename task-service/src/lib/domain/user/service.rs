use std::sync::Arc;

use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::CreateUserCommand;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(&command.password).map_err(|e| {
            tracing::error!(operation = "create_user", error = %e, "Password hashing failed");
            UserError::from(e)
        })?;

        let username = command.username.as_str().to_string();
        let user = NewUser {
            username: command.username,
            password_hash,
        };

        self.repository.create(user).await.map_err(|e| {
            let err = UserError::from_repository(e, &username);
            if matches!(err, UserError::Database(_)) {
                tracing::error!(operation = "create_user", error = %err, "Failed to store user");
            }
            err
        })
    }

    async fn verify_password(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<bool, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await
            .map_err(|e| {
                let err = UserError::from_repository(e, username.as_str());
                if matches!(err, UserError::Database(_)) {
                    tracing::error!(operation = "verify_password", error = %err, "Failed to load user");
                }
                err
            })?;

        match self.password_hasher.verify(password, &user.password_hash) {
            Ok(matched) => Ok(matched),
            Err(e) => {
                tracing::error!(
                    operation = "verify_password",
                    username = %username,
                    error = %e,
                    "Stored password hash is corrupt, treating as mismatch"
                );
                Ok(false)
            }
        }
    }
}
