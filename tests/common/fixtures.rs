//! Test fixture creation
#![allow(dead_code)]

use devconnect_core::user::CredentialHasher;
use devconnect_core::{
    AppConfig, DevConnect, PrimaryStack, RegistrationRequest, SkillLevel, User,
};

/// The fast hasher when the feature is on, otherwise real argon2.
pub fn test_hasher() -> CredentialHasher {
    #[cfg(feature = "test-fast-hasher")]
    {
        CredentialHasher::TestFast
    }
    #[cfg(not(feature = "test-fast-hasher"))]
    {
        CredentialHasher::Argon2
    }
}

/// App with the bundled sample data loaded (three users, two projects,
/// two stories, the 1<->2 friendship).
pub fn seeded_app() -> DevConnect {
    DevConnect::new(AppConfig {
        hasher: test_hasher(),
        seed_sample_data: true,
    })
    .expect("failed to build seeded app")
}

/// App with empty collections.
pub fn empty_app() -> DevConnect {
    DevConnect::new(AppConfig {
        hasher: test_hasher(),
        seed_sample_data: false,
    })
    .expect("failed to build empty app")
}

/// Registers a user with default skill/stack and a valid password, and
/// leaves them logged in as the current session.
pub fn register_user(app: &DevConnect, username: &str, email: &str) -> User {
    app.register(RegistrationRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        skill_level: SkillLevel::Beginner,
        primary_stack: PrimaryStack::Other,
    })
    .expect("registration failed")
}
