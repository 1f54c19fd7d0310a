/**
 * The build notification record.
 *
 * `JobState` is the envelope the CI host assembles per build transition and
 * hands to the formatter; the core never inspects or mutates it. Wire names
 * are snake_case in JSON (`full_url`, `queue_id`) and the same tags appear
 * per-field in XML. Phase and status values go out SCREAMING_SNAKE_CASE,
 * matching what downstream receivers of these notifications expect.
 */
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// JobState — the notification envelope
// ---------------------------------------------------------------------------

/**
 * Snapshot of a job at the moment a notification fires.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobState {
    /// The job's technical name, e.g. `"nightly"`.
    pub name: String,

    /// Human-facing name, when it differs from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Job URL relative to the CI root, e.g. `"job/nightly/"`.
    pub url: String,

    /// The build this notification describes.
    pub build: BuildState,
}

// ---------------------------------------------------------------------------
// BuildState — one build of the job
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildState {
    pub number: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<u64>,

    pub phase: Phase,

    /// Final result — absent until the build completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,

    /// Build URL relative to the CI root, e.g. `"job/nightly/42/"`.
    pub url: String,

    /// Absolute build URL, when the CI root is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// Free-form operator notes attached to the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Build parameters, when parameter reporting is enabled. A list of
    /// name/value pairs rather than a map, so both wire formats can
    /// represent it structurally.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<BuildParameter>,
}

/**
 * One build parameter, as shown to the receiver.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParameter {
    pub name: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Phase / BuildStatus
// ---------------------------------------------------------------------------

/**
 * Where in its lifecycle the build is. Serialized uppercase on the wire
 * (`QUEUED`, `STARTED`, ...).
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Queued,
    Started,
    Completed,
    Finalized,
}

/**
 * Outcome of a completed build.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Unstable,
    Aborted,
}
