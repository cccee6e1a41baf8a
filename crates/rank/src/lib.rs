//! # Directory Rank
//!
//! Popularity ranking and non-friend sampling over an indexed directory.
//!
//! ```text
//! ReferenceCount[]
//!     │
//!     └──> Ranker (count desc, name asc) ──> top-N names
//!
//! UserIndex + selected user
//!     │
//!     └──> Sampler (ids \ friends \ self) ──> K suggestions
//! ```

mod popular;
mod suggest;

pub use popular::{rank_top, sort_by_references};
pub use suggest::{sample_non_friends, suggest_strangers};
