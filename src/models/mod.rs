//! Domain models for the snippet board.
//!
//! # Core Concepts
//!
//! - [`Author`]: A known poster. Identity is the `id`; the display name is
//!   not part of it.
//! - [`Snippet`]: An immutable, timestamped, author-attributed text record.
//!   Snippets are only ever appended, never edited or removed.
//! - [`FeedEntry`]: Display-ready projection of a snippet, recomputed on every
//!   read and never stored.

mod author;
mod feed;
mod snippet;

pub use author::*;
pub use feed::*;
pub use snippet::*;
