pub mod auth;
mod mem_user_store;
mod user_manager;
pub mod user_models;
mod user_store;

pub use auth::{CredentialHasher, PasswordCredentials};
pub use mem_user_store::MemUserStore;
pub use user_manager::{AuthError, UserManager, MIN_PASSWORD_LEN};
pub use user_models::{
    NewUser, OnlineDeveloperFilter, PrimaryStack, RegistrationRequest, SkillLevel, User,
};
pub use user_store::UserStore;
