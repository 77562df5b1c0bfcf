//! User data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A registered developer.
///
/// Friendship edges live in `friends` and are kept symmetric by the
/// social graph operations; presence is flipped only by login/logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: usize,
    pub username: String,
    pub email: String,
    pub skill_level: SkillLevel,
    pub primary_stack: PrimaryStack,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,
    /// Ids of accepted connections. At-most-once membership is enforced
    /// by the operations that mutate it, not by the container.
    pub friends: Vec<usize>,
}

impl User {
    pub fn is_friend_of(&self, user_id: usize) -> bool {
        self.friends.contains(&user_id)
    }
}

/// Candidate data collected by the registration form.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub skill_level: SkillLevel,
    pub primary_stack: PrimaryStack,
}

/// Fields the store needs to persist a freshly validated registration.
/// The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub skill_level: SkillLevel,
    pub primary_stack: PrimaryStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Capitalized form used by the dashboard cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(format!("Unknown skill level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStack {
    Mern,
    Mean,
    Django,
    Rails,
    Php,
    Dotnet,
    Java,
    #[default]
    #[serde(other)]
    Other,
}

impl PrimaryStack {
    pub fn display_name(&self) -> &'static str {
        match self {
            PrimaryStack::Mern => "MERN Stack",
            PrimaryStack::Mean => "MEAN Stack",
            PrimaryStack::Django => "Django/Python",
            PrimaryStack::Rails => "Ruby on Rails",
            PrimaryStack::Php => "PHP/Laravel",
            PrimaryStack::Dotnet => ".NET",
            PrimaryStack::Java => "Java/Spring",
            PrimaryStack::Other => "Other",
        }
    }
}

impl FromStr for PrimaryStack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mern" => Ok(PrimaryStack::Mern),
            "mean" => Ok(PrimaryStack::Mean),
            "django" => Ok(PrimaryStack::Django),
            "rails" => Ok(PrimaryStack::Rails),
            "php" => Ok(PrimaryStack::Php),
            "dotnet" => Ok(PrimaryStack::Dotnet),
            "java" => Ok(PrimaryStack::Java),
            _ => Ok(PrimaryStack::Other),
        }
    }
}

/// Filters applied by the online-developer discovery panel.
/// `None` means "no filter" for that dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlineDeveloperFilter {
    pub skill_level: Option<SkillLevel>,
    pub primary_stack: Option<PrimaryStack>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_display_names() {
        assert_eq!(PrimaryStack::Mern.display_name(), "MERN Stack");
        assert_eq!(PrimaryStack::Dotnet.display_name(), ".NET");
        assert_eq!(PrimaryStack::Other.display_name(), "Other");
    }

    #[test]
    fn unknown_stack_falls_back_to_other() {
        let stack: PrimaryStack = "cobol".parse().unwrap();
        assert_eq!(stack, PrimaryStack::Other);
    }

    #[test]
    fn user_serializes_with_snake_case_enums() {
        let user = User {
            id: 1,
            username: "dev_sarah".to_string(),
            email: "sarah@example.com".to_string(),
            skill_level: SkillLevel::Intermediate,
            primary_stack: PrimaryStack::Mern,
            is_online: true,
            last_seen: Utc::now(),
            friends: vec![2],
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["skill_level"], "intermediate");
        assert_eq!(json["primary_stack"], "mern");
    }
}
