use serde::{Deserialize, Serialize};

/// Which day a listed lesson falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonDay {
    Today,
    Tomorrow,
}

/// One chapter on the upcoming-lessons listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub subject: String,
    pub chapter: String,
    pub chapter_number: u32,
    pub topics: Vec<String>,
    pub day: LessonDay,
}
