//! # Core Type Definitions
//!
//! This module contains the record types that make up a portfolio:
//! - Identifiers (`RecordId`)
//! - Profile and skills (`Profile`, `SkillCategory`, `Skill`, `SkillLevel`)
//! - Timeline and work (`Experience`, `Project`)
//! - Outbound links (`SocialLink`)
//! - Error types (`FolioError`)
//!
//! ## Wire Format
//!
//! Every record serializes with camelCase field names (`shortBio`,
//! `longDescription`), which is the shape the frontend consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Integer identifier of an experience or project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Get the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// The portfolio owner. Exactly one per dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub short_bio: String,
    /// Profile picture URL.
    pub image: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Link to the downloadable resume, usually under `/static`.
    pub resume: String,
}

// =============================================================================
// SKILLS
// =============================================================================

/// Self-assessed proficiency. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl SkillLevel {
    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Native => "Native",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single `{name, level}` entry inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    /// Create a new skill entry.
    #[must_use]
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// A labelled group of skills. Item order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

// =============================================================================
// EXPERIENCE
// =============================================================================

/// One position on the work timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: RecordId,
    /// Free-text range such as `"2023 - 2024"` or `"2024 - Present"`.
    pub year: String,
    pub position: String,
    pub company: String,
    pub description: String,
    pub achievements: Vec<String>,
}

// =============================================================================
// PROJECT
// =============================================================================

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    /// Technology tags, in display order.
    pub tech: Vec<String>,
    pub image: String,
    /// Repository URL.
    pub github: String,
    /// Live demo URL.
    pub demo: String,
    pub date: String,
    pub highlights: Vec<String>,
}

// =============================================================================
// SOCIAL LINKS
// =============================================================================

/// An outbound link. `url` may use `mailto:` or `tel:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon identifier understood by the frontend (`github`, `mail`, ...).
    pub icon: String,
    /// Display-style hint, e.g. a CSS hover class.
    pub color: String,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Folio system.
///
/// Lookups that find nothing return `None`; these variants cover
/// construction, configuration and I/O failures only.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Two records in the same collection share an id.
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },

    /// A dataset document could not be decoded.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A contact submission could not be recorded.
    #[error("Contact sink error: {0}")]
    SinkError(String),
}

// =============================================================================
// TESTS
// =============================================================================
