use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::seed::default_schema_version;
use super::LessonPlan;

/// The lessons listing captured at the last prefetch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub id: String,
    pub grade: u8,
    pub curriculum_week: i64,
    pub lessons: Vec<LessonPlan>,
    pub captured_at: DateTime<Utc>,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}
