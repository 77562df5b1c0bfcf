//! Story toggles, story/project creation and feed ordering.

mod common;

use common::*;
use devconnect_core::content::NewProject;
use devconnect_core::ContentError;

#[test]
fn toggle_like_is_an_involution() {
    let app = empty_app();
    let author = register_user(&app, "alice", "a@x.com");
    let story = app.content().create_story(author.id, "hello", "").unwrap();
    assert_eq!(story.likes, 0);
    assert!(story.liked_by.is_empty());

    let liked = app.content().toggle_like(story.id, 7).unwrap();
    assert_eq!(liked.likes, 1);
    assert_eq!(liked.liked_by, vec![7]);

    let unliked = app.content().toggle_like(story.id, 7).unwrap();
    assert_eq!(unliked.likes, 0);
    assert!(unliked.liked_by.is_empty());
}

#[test]
fn likes_from_different_users_accumulate() {
    let app = empty_app();
    let author = register_user(&app, "alice", "a@x.com");
    let story = app.content().create_story(author.id, "hello", "").unwrap();

    app.content().toggle_like(story.id, 7).unwrap();
    let story = app.content().toggle_like(story.id, 8).unwrap();
    assert_eq!(story.likes, 2);
    assert_eq!(story.liked_by, vec![7, 8]);

    // Removing one like leaves the other untouched
    let story = app.content().toggle_like(story.id, 7).unwrap();
    assert_eq!(story.likes, 1);
    assert_eq!(story.liked_by, vec![8]);
}

#[test]
fn toggle_retweet_has_the_same_contract() {
    let app = seeded_app();
    // Seeded story 2 is already retweeted by dev_sarah
    let story = app.content().get_story(2).unwrap().unwrap();
    assert_eq!(story.retweets, 1);
    assert!(story.is_retweeted_by(SARAH_ID));

    let story = app.content().toggle_retweet(2, SARAH_ID).unwrap();
    assert_eq!(story.retweets, 0);
    assert!(!story.is_retweeted_by(SARAH_ID));

    let story = app.content().toggle_retweet(2, SARAH_ID).unwrap();
    assert_eq!(story.retweets, 1);
}

#[test]
fn toggles_on_missing_stories_fail() {
    let app = empty_app();
    assert!(matches!(
        app.content().toggle_like(99, 1).unwrap_err(),
        ContentError::StoryNotFound(99)
    ));
    assert!(matches!(
        app.content().toggle_retweet(99, 1).unwrap_err(),
        ContentError::StoryNotFound(99)
    ));
}

#[test]
fn story_author_must_exist() {
    let app = empty_app();
    assert!(matches!(
        app.content().create_story(1, "hello", "").unwrap_err(),
        ContentError::UserNotFound(1)
    ));
}

#[test]
fn feed_is_sorted_newest_first() {
    let app = seeded_app();
    app.login(SARAH_USERNAME, SARAH_PASSWORD).unwrap();
    let fresh = app
        .content()
        .create_story(SARAH_ID, "a brand new story", "#new")
        .unwrap();

    let feed = app.content().story_feed().unwrap();
    assert_eq!(feed.len(), SEEDED_STORY_COUNT + 1);
    assert_eq!(feed[0].id, fresh.id);
    // Seeded story 1 (1h old) comes before story 2 (2h old)
    assert_eq!(feed[1].id, 1);
    assert_eq!(feed[2].id, 2);
}

#[test]
fn seeded_content_shape_matches_the_sample_data() {
    let app = seeded_app();

    let stories = app.content().story_feed().unwrap();
    assert_eq!(stories.len(), SEEDED_STORY_COUNT);
    for story in &stories {
        assert_eq!(story.likes, story.liked_by.len());
        assert_eq!(story.retweets, story.retweeted_by.len());
    }

    let projects = app.content().projects().unwrap();
    assert_eq!(projects.len(), SEEDED_PROJECT_COUNT);
    assert_eq!(projects[0].author, SARAH_USERNAME);
    assert_eq!(
        projects[0].technologies,
        vec!["React", "Node.js", "MongoDB", "Express"]
    );
    assert!(projects[1].demo_link.is_none());
}

#[test]
fn created_project_records_author_and_split_technologies() {
    let app = empty_app();
    let author = register_user(&app, "alice", "a@x.com");
    let project = app
        .content()
        .create_project(
            author.id,
            NewProject {
                title: "Side Project".to_string(),
                description: "Weekend hack".to_string(),
                raw_technologies: "Rust, Axum".to_string(),
                project_link: Some("https://github.com/alice/side".to_string()),
                demo_link: None,
            },
        )
        .unwrap();
    assert_eq!(project.id, 1);
    assert_eq!(project.author, "alice");
    assert_eq!(project.author_id, author.id);
    assert_eq!(project.technologies, vec!["Rust", "Axum"]);
}
