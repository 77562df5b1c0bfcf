//! Ids and credentials of the seeded sample data.
#![allow(dead_code)]

pub const SARAH_ID: usize = 1;
pub const SARAH_USERNAME: &str = "dev_sarah";
pub const SARAH_PASSWORD: &str = "password123";

pub const NINJA_ID: usize = 2;
pub const NINJA_USERNAME: &str = "code_ninja";
pub const NINJA_PASSWORD: &str = "ninja123";

pub const REACT_DEV_ID: usize = 3;
pub const REACT_DEV_USERNAME: &str = "react_dev";
pub const REACT_DEV_PASSWORD: &str = "react123";

pub const SEEDED_USER_COUNT: usize = 3;
pub const SEEDED_STORY_COUNT: usize = 2;
pub const SEEDED_PROJECT_COUNT: usize = 2;
