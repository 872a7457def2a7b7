//! # Property-Based Tests
//!
//! Lookup and validation invariants checked with proptest.

use chrono::{DateTime, Utc};
use folio_core::{ContactError, ContactRequest, Dataset, Project, RecordId, parse_id};
use proptest::collection::btree_set;
use proptest::prelude::*;

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
        date: String::new(),
        highlights: vec![],
    }
}

fn dataset_with_projects(ids: &[i64]) -> Dataset {
    let builtin = Dataset::builtin();
    Dataset::new(
        builtin.profile().clone(),
        vec![],
        vec![],
        ids.iter().copied().map(project).collect(),
        vec![],
    )
    .expect("ids are unique")
}

fn received_at() -> DateTime<Utc> {
    DateTime::from_timestamp(0, 0).unwrap_or_default()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every stored project is found by its own id, and only by it.
    #[test]
    fn find_project_returns_matching_record(ids in btree_set(-1000i64..1000, 1..30)) {
        let ids: Vec<i64> = ids.into_iter().collect();
        let dataset = dataset_with_projects(&ids);

        for id in &ids {
            let found = dataset.find_project(RecordId(*id));
            prop_assert_eq!(found.map(|p| p.id), Some(RecordId(*id)));
        }
    }

    /// Ids outside the stored set are never found.
    #[test]
    fn absent_ids_are_not_found(ids in btree_set(0i64..100, 0..20), probe in 100i64..10_000) {
        let ids: Vec<i64> = ids.into_iter().collect();
        let dataset = dataset_with_projects(&ids);
        prop_assert!(dataset.find_project(RecordId(probe)).is_none());
    }

    /// Construction keeps the given project order.
    #[test]
    fn projects_keep_definition_order(ids in btree_set(0i64..10_000, 0..30)) {
        let mut ids: Vec<i64> = ids.into_iter().collect();
        ids.reverse();
        let dataset = dataset_with_projects(&ids);
        let stored: Vec<i64> = dataset.projects().iter().map(|p| p.id.value()).collect();
        prop_assert_eq!(stored, ids);
    }

    /// Any integer rendered as text parses back to itself.
    #[test]
    fn parse_id_accepts_rendered_integers(id in any::<i64>()) {
        prop_assert_eq!(parse_id(&id.to_string()), Some(RecordId(id)));
    }

    /// Trailing non-digit text after an integer is ignored.
    #[test]
    fn parse_id_ignores_trailing_text(id in 0_i64..1_000_000, suffix in "[g-wyz.][a-z0-9.]{0,8}") {
        prop_assert_eq!(parse_id(&format!("{}{}", id, suffix)), Some(RecordId(id)));
    }

    /// Alphabetic path segments never parse.
    #[test]
    fn parse_id_rejects_words(word in "[a-zA-Z]{1,12}") {
        prop_assert_eq!(parse_id(&word), None);
    }

    /// Addresses without an `@` are always rejected as malformed.
    #[test]
    fn email_without_at_sign_is_invalid(local in "[a-z0-9.]{1,20}") {
        let request = ContactRequest::new("Ann", local, "Hello");
        prop_assert_eq!(request.validate(received_at()), Err(ContactError::InvalidEmail));
    }

    /// Simple well-formed addresses are accepted with fields unchanged.
    #[test]
    fn well_formed_email_is_accepted(
        local in "[a-z0-9]{1,12}",
        domain in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,6}",
        message in "[ -~]{1,64}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        let request = ContactRequest::new("Ann", email.clone(), message.clone());
        let submission = request.validate(received_at());
        prop_assert!(submission.is_ok());
        if let Ok(submission) = submission {
            prop_assert_eq!(submission.email, email);
            prop_assert_eq!(submission.message, message);
        }
    }
}
