pub mod artifact;
pub mod language;
pub mod lesson;
pub mod prediction;
pub mod prefetch_outcome;
pub mod request_cache;
pub mod schedule_snapshot;
pub mod seed;
pub mod sync_meta;

pub use artifact::{ArtifactHit, CachedArtifact, TeachingStrategy};
pub use language::Language;
pub use lesson::{LessonDay, LessonPlan};
pub use prediction::{PredictionReason, TopicPrediction};
pub use prefetch_outcome::{
    CacheStats, PrefetchOutcome, PrefetchedTopic, PrefetchedTopicInfo, PrefetchedTopics,
};
pub use request_cache::{OfflineQueueEntry, RequestCacheEntry};
pub use schedule_snapshot::ScheduleSnapshot;
pub use seed::{SeedLookup, SeedRecord};
pub use sync_meta::SyncMeta;
