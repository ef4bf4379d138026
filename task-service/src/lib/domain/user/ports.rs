use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::user::errors::UserError;
use crate::user::models::CreateUserCommand;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, hashing the password before it is stored.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `Database` - Storage failure
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Check a plaintext password against the stored hash.
    ///
    /// A wrong password is `Ok(false)`, not an error.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `Database` - Storage failure
    async fn verify_password(&self, username: &Username, password: &str)
        -> Result<bool, UserError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - Username is already taken
    /// * `Database` - Storage failure
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `Database` - Storage failure
    async fn find_by_username(&self, username: &Username) -> Result<User, RepositoryError>;
}
