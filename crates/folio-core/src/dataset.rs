//! # Dataset
//!
//! The immutable portfolio content served by the API.
//!
//! A `Dataset` is built once, either from the built-in definition
//! ([`Dataset::builtin`]) or from a JSON document, and then only read.
//! There are no mutation methods. Share it behind an `Arc`.
//!
//! ## Invariants
//!
//! - Experience ids are unique.
//! - Project ids are unique.
//! - Every collection keeps its definition order.

use crate::seed;
use crate::types::{Experience, FolioError, Profile, Project, RecordId, SkillCategory, SocialLink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Maximum dataset file size accepted by [`Dataset::from_json_file`] (8 MB).
const MAX_DATASET_FILE_SIZE: u64 = 8 * 1024 * 1024;

// =============================================================================
// DATASET
// =============================================================================

/// All portfolio content.
///
/// Fields are private so the id invariants checked in [`Dataset::new`]
/// cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    profile: Profile,
    skills: Vec<SkillCategory>,
    experiences: Vec<Experience>,
    projects: Vec<Project>,
    socials: Vec<SocialLink>,
}

/// Unvalidated mirror of [`Dataset`] used for decoding.
#[derive(Deserialize)]
struct RawDataset {
    profile: Profile,
    #[serde(default)]
    skills: Vec<SkillCategory>,
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    socials: Vec<SocialLink>,
}

impl Dataset {
    /// Assemble a dataset, rejecting duplicate experience or project ids.
    pub fn new(
        profile: Profile,
        skills: Vec<SkillCategory>,
        experiences: Vec<Experience>,
        projects: Vec<Project>,
        socials: Vec<SocialLink>,
    ) -> Result<Self, FolioError> {
        ensure_unique_ids("experiences", experiences.iter().map(|e| e.id))?;
        ensure_unique_ids("projects", projects.iter().map(|p| p.id))?;

        Ok(Self {
            profile,
            skills,
            experiences,
            projects,
            socials,
        })
    }

    /// The built-in portfolio content.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profile: seed::profile(),
            skills: seed::skills(),
            experiences: seed::experiences(),
            projects: seed::projects(),
            socials: seed::socials(),
        }
    }

    /// Decode and validate a dataset from JSON.
    ///
    /// `profile` is required; missing collections default to empty.
    pub fn from_json_str(json: &str) -> Result<Self, FolioError> {
        let raw: RawDataset = serde_json::from_str(json)
            .map_err(|e| FolioError::DeserializationError(e.to_string()))?;
        Self::new(
            raw.profile,
            raw.skills,
            raw.experiences,
            raw.projects,
            raw.socials,
        )
    }

    /// Read, decode and validate a dataset file.
    pub fn from_json_file(path: &Path) -> Result<Self, FolioError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            FolioError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_DATASET_FILE_SIZE {
            return Err(FolioError::IoError(format!(
                "Dataset file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_DATASET_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FolioError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    #[must_use]
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Find a project by id. Linear scan; `None` when absent.
    #[must_use]
    pub fn find_project(&self, id: RecordId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find an experience by id. Linear scan; `None` when absent.
    #[must_use]
    pub fn find_experience(&self, id: RecordId) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    /// Per-collection record counts.
    #[must_use]
    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            skill_categories: self.skills.len(),
            skills: self.skills.iter().map(|c| c.items.len()).sum(),
            experiences: self.experiences.len(),
            projects: self.projects.len(),
            socials: self.socials.len(),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Record counts reported by `folio check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub skill_categories: usize,
    pub skills: usize,
    pub experiences: usize,
    pub projects: usize,
    pub socials: usize,
}

fn ensure_unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = RecordId>,
) -> Result<(), FolioError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FolioError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

// =============================================================================
// PATH PARAMETERS
// =============================================================================

/// Parse a record id taken from a URL path segment.
///
/// Reads the leading integer and ignores whatever follows it, so `"2abc"`
/// is 2 and `"1.5"` is 1. Leading whitespace and a sign are allowed, and a
/// `0x` prefix switches to hexadecimal. No leading digits, or a value
/// outside `i64`, yields `None`, which callers treat the same as an
/// unknown id.
#[must_use]
pub fn parse_id(raw: &str) -> Option<RecordId> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    // Accumulate toward the sign so i64::MIN stays representable.
    digits
        .chars()
        .try_fold(0_i64, |acc, c| {
            let digit = i64::from(c.to_digit(radix)?);
            let shifted = acc.checked_mul(i64::from(radix))?;
            if negative {
                shifted.checked_sub(digit)
            } else {
                shifted.checked_add(digit)
            }
        })
        .map(RecordId)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64) -> Project {
        Project {
            id: RecordId(id),
            title: format!("Project {}", id),
            description: String::new(),
            long_description: String::new(),
            tech: vec![],
            image: String::new(),
            github: String::new(),
            demo: String::new(),
            date: "2024".to_string(),
            highlights: vec![],
        }
    }

    #[test]
    fn builtin_satisfies_invariants() {
        let builtin = Dataset::builtin();
        let rebuilt = Dataset::new(
            builtin.profile().clone(),
            builtin.skills().to_vec(),
            builtin.experiences().to_vec(),
            builtin.projects().to_vec(),
            builtin.socials().to_vec(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn builtin_counts() {
        let counts = Dataset::builtin().counts();
        assert_eq!(counts.skill_categories, 4);
        assert_eq!(counts.skills, 16);
        assert_eq!(counts.experiences, 3);
        assert_eq!(counts.projects, 3);
        assert_eq!(counts.socials, 5);
    }

    #[test]
    fn duplicate_project_ids_rejected() {
        let builtin = Dataset::builtin();
        let result = Dataset::new(
            builtin.profile().clone(),
            vec![],
            vec![],
            vec![project(1), project(2), project(1)],
            vec![],
        );
        assert!(matches!(
            result,
            Err(FolioError::DuplicateId {
                collection: "projects",
                id: RecordId(1)
            })
        ));
    }

    #[test]
    fn duplicate_experience_ids_rejected() {
        let builtin = Dataset::builtin();
        let mut experiences = builtin.experiences().to_vec();
        experiences.push(experiences[0].clone());
        let result = Dataset::new(builtin.profile().clone(), vec![], experiences, vec![], vec![]);
        assert!(matches!(
            result,
            Err(FolioError::DuplicateId {
                collection: "experiences",
                ..
            })
        ));
    }

    #[test]
    fn find_project_hit_and_miss() {
        let dataset = Dataset::builtin();
        let found = dataset.find_project(RecordId(2)).expect("project 2");
        assert_eq!(found.title, "Shoe Store E-commerce");
        assert!(dataset.find_project(RecordId(99)).is_none());
    }

    #[test]
    fn find_experience_hit_and_miss() {
        let dataset = Dataset::builtin();
        let found = dataset.find_experience(RecordId(3)).expect("experience 3");
        assert_eq!(found.position, "Internship");
        assert!(dataset.find_experience(RecordId(0)).is_none());
    }

    #[test]
    fn parse_id_reads_leading_integer() {
        assert_eq!(parse_id("1"), Some(RecordId(1)));
        assert_eq!(parse_id(" 42 "), Some(RecordId(42)));
        assert_eq!(parse_id("-3"), Some(RecordId(-3)));
        assert_eq!(parse_id("+7"), Some(RecordId(7)));
        assert_eq!(parse_id("2abc"), Some(RecordId(2)));
        assert_eq!(parse_id("1.5"), Some(RecordId(1)));
        assert_eq!(parse_id("1e3"), Some(RecordId(1)));
        assert_eq!(parse_id("0x2"), Some(RecordId(2)));
        assert_eq!(parse_id("0X1f"), Some(RecordId(31)));
        assert_eq!(parse_id("-0x2"), Some(RecordId(-2)));
    }

    #[test]
    fn parse_id_without_leading_digits_is_none() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("x1"), None);
        assert_eq!(parse_id(".5"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }

    #[test]
    fn from_json_round_trips_builtin() {
        let json = serde_json::to_string(&Dataset::builtin()).expect("serialize");
        let decoded = Dataset::from_json_str(&json).expect("decode");
        assert_eq!(decoded, Dataset::builtin());
    }

    #[test]
    fn from_json_requires_profile() {
        let result = Dataset::from_json_str(r#"{"projects": []}"#);
        assert!(matches!(result, Err(FolioError::DeserializationError(_))));
    }

    #[test]
    fn from_json_file_reports_missing_file() {
        let result = Dataset::from_json_file(Path::new("definitely/not/here.json"));
        assert!(matches!(result, Err(FolioError::IoError(_))));
    }
}
