//! Curriculum predictor: which topics will a teacher need help with soon?
//!
//! Every topic of the current chapter is predicted at high confidence, the
//! opening topics of the next chapter at lower confidence. Subjects are
//! concatenated in the order given, then stably sorted by descending
//! confidence, so ties keep subject order and then chapter topic order.

use chrono::{DateTime, Utc};

use sahayak_core::config::PrefetchConfig;
use sahayak_core::constants::LESSON_SUBJECTS;
use sahayak_core::models::{LessonDay, LessonPlan, PredictionReason, TopicPrediction};

use crate::curriculum::{self, Chapter};
use crate::schedule::schedule_window;

/// Ranked predictions for `grade` over `subjects` at instant `now`.
///
/// Unknown grades and subjects contribute nothing. The result is a pure
/// function of the curriculum week containing `now`.
pub fn predict_topics<S: AsRef<str>>(
    grade: u8,
    subjects: &[S],
    now: DateTime<Utc>,
    config: &PrefetchConfig,
) -> Vec<TopicPrediction> {
    let mut predictions = Vec::new();

    for subject in subjects {
        let subject = subject.as_ref();
        let Some(window) = schedule_window(curriculum::chapters(grade, subject), now) else {
            continue;
        };

        predictions.extend(chapter_predictions(
            grade,
            subject,
            window.current,
            window.current.topics.len(),
            config.current_chapter_confidence,
            PredictionReason::CurrentChapter,
        ));
        predictions.extend(chapter_predictions(
            grade,
            subject,
            window.next,
            config.next_chapter_topic_limit,
            config.next_chapter_confidence,
            PredictionReason::NextChapter,
        ));
    }

    // `sort_by` is stable.
    predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    predictions
}

fn chapter_predictions<'a>(
    grade: u8,
    subject: &'a str,
    chapter: &'a Chapter,
    limit: usize,
    confidence: f64,
    reason: PredictionReason,
) -> impl Iterator<Item = TopicPrediction> + 'a {
    chapter.topics.iter().take(limit).map(move |topic| TopicPrediction {
        topic: (*topic).to_string(),
        chapter: chapter.title.to_string(),
        subject: subject.to_string(),
        grade,
        confidence,
        reason,
    })
}

/// Today's and tomorrow's chapters across the four lesson subjects.
pub fn upcoming_lessons(grade: u8, now: DateTime<Utc>) -> Vec<LessonPlan> {
    let mut lessons = Vec::new();
    for subject in LESSON_SUBJECTS {
        let Some(window) = schedule_window(curriculum::chapters(grade, subject), now) else {
            continue;
        };
        lessons.push(lesson(subject, window.current, LessonDay::Today));
        lessons.push(lesson(subject, window.next, LessonDay::Tomorrow));
    }
    lessons
}

fn lesson(subject: &str, chapter: &Chapter, day: LessonDay) -> LessonPlan {
    LessonPlan {
        subject: subject.to_string(),
        chapter: chapter.title.to_string(),
        chapter_number: chapter.number,
        topics: chapter.topics.iter().map(|t| t.to_string()).collect(),
        day,
    }
}
