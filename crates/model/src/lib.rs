//! # Directory Model
//!
//! Shared data model for the user-directory pipeline: the record shape
//! received from the data source, the id lookup built from it, and the
//! derived friend-reference counts.

mod types;

pub use types::{ReferenceCount, UserId, UserIndex, UserProfile, UserRecord};
