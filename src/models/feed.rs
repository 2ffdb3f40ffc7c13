use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snippet ready for display.
///
/// Derived from a [`Snippet`](super::Snippet) at read time; the humanized
/// label depends on when it was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Relative label such as "3 minutes ago".
    pub posted_at: String,
    /// Absolute posting time, for consumers that re-humanize.
    pub posted_at_utc: DateTime<Utc>,
    pub body: String,
    pub author_name: String,
    pub author_uri: String,
}
