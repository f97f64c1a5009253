//! # sahayak-prediction
//!
//! Speculative prefetch for the classroom assistant: predict which topics a
//! teacher will ask about next, materialize lightweight playbooks for them
//! while connectivity is available, and serve them back offline.
//!
//! ## Pipeline
//!
//! | Stage | Module |
//! |-------|--------|
//! | Static chapter tables per grade and subject | [`curriculum`] |
//! | Week index and current/next chapter | [`schedule`] |
//! | Ranked topic predictions | [`predictor`] |
//! | Bundled knowledge seeds | [`seeds`] |
//! | Mini-playbook synthesis | [`playbook`] |
//! | Batch prefetch, retention cleanup | [`engine`] |
//! | Fuzzy lookup, seed fallback, introspection | [`lookup`] |

pub mod cache;
pub mod curriculum;
pub mod engine;
pub mod lookup;
pub mod playbook;
pub mod predictor;
pub mod schedule;
pub mod seeds;

pub use cache::PredictionCache;
pub use engine::{CancelToken, PrefetchEngine, PrefetchState};
pub use lookup::CacheLookup;
pub use predictor::{predict_topics, upcoming_lessons};
pub use schedule::{curriculum_week, schedule_window, ScheduleWindow};
