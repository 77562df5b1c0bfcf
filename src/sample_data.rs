//! Bundled demo dataset: three developers (with the dev_sarah/code_ninja
//! friendship already in place), two showcased projects and two stories.

use crate::content::{ContentStore, Project, Story};
use crate::user::{
    CredentialHasher, NewUser, PasswordCredentials, PrimaryStack, SkillLevel, UserStore,
};
use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::info;

struct SeedUser {
    username: &'static str,
    email: &'static str,
    password: &'static str,
    skill_level: SkillLevel,
    primary_stack: PrimaryStack,
    is_online: bool,
    offline_for: Option<Duration>,
}

/// Populates empty stores with the sample dataset. Passwords go through
/// the configured hasher like any registration would.
pub fn seed(
    user_store: &dyn UserStore,
    content_store: &dyn ContentStore,
    hasher: CredentialHasher,
) -> Result<()> {
    let seed_users = [
        SeedUser {
            username: "dev_sarah",
            email: "sarah@example.com",
            password: "password123",
            skill_level: SkillLevel::Intermediate,
            primary_stack: PrimaryStack::Mern,
            is_online: true,
            offline_for: None,
        },
        SeedUser {
            username: "code_ninja",
            email: "ninja@example.com",
            password: "ninja123",
            skill_level: SkillLevel::Advanced,
            primary_stack: PrimaryStack::Django,
            is_online: true,
            offline_for: None,
        },
        SeedUser {
            username: "react_dev",
            email: "react@example.com",
            password: "react123",
            skill_level: SkillLevel::Expert,
            primary_stack: PrimaryStack::Mern,
            is_online: false,
            offline_for: Some(Duration::hours(1)),
        },
    ];

    for seed_user in seed_users {
        let user = user_store.create_user(
            NewUser {
                username: seed_user.username.to_string(),
                email: seed_user.email.to_string(),
                skill_level: seed_user.skill_level,
                primary_stack: seed_user.primary_stack,
            },
            seed_user.is_online,
        )?;
        if let Some(offline_for) = seed_user.offline_for {
            user_store.set_presence(user.id, false, Utc::now() - offline_for)?;
        }
        user_store.set_credentials(PasswordCredentials::create(
            user.id,
            hasher,
            seed_user.password,
        )?)?;
    }

    // dev_sarah and code_ninja start out as friends
    user_store.add_friend(1, 2)?;
    user_store.add_friend(2, 1)?;

    content_store.create_project(Project {
        id: 0,
        title: "E-commerce Platform".to_string(),
        description:
            "Full-stack e-commerce solution with React frontend and Node.js backend".to_string(),
        technologies: ["React", "Node.js", "MongoDB", "Express"]
            .map(str::to_string)
            .to_vec(),
        author: "dev_sarah".to_string(),
        author_id: 1,
        project_link: Some("https://github.com/dev_sarah/ecommerce".to_string()),
        demo_link: Some("https://myecommerce.netlify.app".to_string()),
        created_at: Utc::now() - Duration::days(1),
    })?;
    content_store.create_project(Project {
        id: 0,
        title: "Task Management App".to_string(),
        description: "Django-based task management system with real-time updates".to_string(),
        technologies: ["Django", "Python", "PostgreSQL", "WebSocket"]
            .map(str::to_string)
            .to_vec(),
        author: "code_ninja".to_string(),
        author_id: 2,
        project_link: Some("https://github.com/code_ninja/taskmanager".to_string()),
        demo_link: None,
        created_at: Utc::now() - Duration::days(2),
    })?;

    content_store.create_story(Story {
        id: 0,
        content: "Just deployed my first full-stack application! 🚀 The feeling of seeing \
                  your code live is incredible. Thanks to this amazing community for all \
                  the support!"
            .to_string(),
        author: "dev_sarah".to_string(),
        author_id: 1,
        tags: ["#milestone", "#fullstack", "#grateful"]
            .map(str::to_string)
            .to_vec(),
        likes: 1,
        retweets: 0,
        liked_by: vec![2],
        retweeted_by: vec![],
        created_at: Utc::now() - Duration::hours(1),
    })?;
    content_store.create_story(Story {
        id: 0,
        content: "Working on a Django project and loving the framework's philosophy. \
                  'Don't repeat yourself' has become my coding mantra. What's your \
                  favorite programming principle?"
            .to_string(),
        author: "code_ninja".to_string(),
        author_id: 2,
        tags: ["#django", "#philosophy", "#coding"]
            .map(str::to_string)
            .to_vec(),
        likes: 1,
        retweets: 1,
        liked_by: vec![1],
        retweeted_by: vec![1],
        created_at: Utc::now() - Duration::hours(2),
    })?;

    info!("Seeded sample users, projects and stories");
    Ok(())
}
