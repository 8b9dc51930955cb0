//! # scoreline-translate
//!
//! The runtime half of the cache: a [`TranslationService`] that serves
//! display strings through a tiered resolver and learns new mappings in the
//! background from what the feeds and the display layer encounter.

pub mod events;
pub mod export;
pub mod learner;
pub mod memo;
pub mod queue;
pub mod resolver;
mod service;

pub use events::{SilentEvents, TracingEvents};
pub use export::{ImportReport, MappingExport};
pub use learner::{BatchLearner, DrainReport, LearnerState};
pub use memo::EphemeralMemo;
pub use queue::{EnqueueOutcome, LearningQueue, QueuedRecord};
pub use resolver::{ResolverStats, TranslationResolver};
pub use service::{ServiceStats, TranslationService};
