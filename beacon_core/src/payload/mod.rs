/**
 * Payload layer — what we send: the job-state record and its wire formats.
 *
 * - `format` — XML/JSON encoding of any serializable record
 * - `types` — the build notification record itself
 */
pub mod format;
pub mod types;

pub use format::Format;
pub use types::{BuildParameter, BuildState, BuildStatus, JobState, Phase};
