pub mod auth;
pub mod errors;
pub mod task;
pub mod user;
