//! # folio-core
//!
//! The portfolio content and contact-form rules for Folio - THE DATA.
//!
//! This crate owns everything the HTTP layer serves:
//! - `types`: the record types and `FolioError`
//! - `dataset`: the immutable `Dataset` with its accessors and id lookups
//! - `contact`: contact-form validation and the `ContactSink` seam
//!
//! ## Architectural Constraints
//!
//! - No async, no network dependencies (pure Rust)
//! - No write path: a `Dataset` is fixed once constructed
//! - Collections are `Vec`s and keep definition order

// =============================================================================
// MODULES
// =============================================================================

pub mod contact;
pub mod dataset;
mod seed;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use contact::{
    ContactError, ContactRequest, ContactSink, ContactSubmission, MemorySink, is_valid_email,
};
pub use dataset::{Dataset, DatasetCounts, parse_id};
pub use types::{
    Experience, FolioError, Profile, Project, RecordId, Skill, SkillCategory, SkillLevel,
    SocialLink,
};
