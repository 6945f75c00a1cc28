//! Editing session tests
//!
//! The full add/edit lifecycle: draft fields, selection chain, address
//! lines, submission into the store.

use async_trait::async_trait;
use chrono::NaiveDate;
use contact_registry_sdk::editor::{EditorSession, SubmitError};
use contact_registry_sdk::geo::{GeoDirectory, GeoDirectoryError};
use contact_registry_sdk::models::{CallingCodeOption, Gender};
use contact_registry_sdk::selection::SelectionStage;
use contact_registry_sdk::store::RecordStore;
use contact_registry_sdk::validation::ValidationError;

struct FixtureDirectory;

#[async_trait(?Send)]
impl GeoDirectory for FixtureDirectory {
    async fn calling_codes(&self) -> Result<Vec<CallingCodeOption>, GeoDirectoryError> {
        Ok(vec![
            CallingCodeOption::new("US", "United States", "+1"),
            CallingCodeOption::new("NO", "Norway", "+47"),
        ])
    }

    async fn states(&self, country: &str) -> Result<Vec<String>, GeoDirectoryError> {
        let states: &[&str] = match country {
            "United States" => &["California", "Texas"],
            "Norway" => &["Oslo"],
            _ => &[],
        };
        Ok(states.iter().map(|s| s.to_string()).collect())
    }

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, GeoDirectoryError> {
        let cities: &[&str] = match (country, state) {
            ("United States", "California") => &["Los Angeles", "San Diego"],
            ("United States", "Texas") => &["Austin"],
            ("Norway", "Oslo") => &["Oslo"],
            _ => &[],
        };
        Ok(cities.iter().map(|s| s.to_string()).collect())
    }
}

async fn filled_session() -> EditorSession<FixtureDirectory> {
    let mut session = EditorSession::new(FixtureDirectory);
    session.begin_add().await;
    session.set_name("Ana");
    session.set_email("ana@x.com");
    session.set_phone("555-0100");
    session.set_date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    session.set_gender(Gender::Female);
    session.selection_mut().choose_calling_code("+1").await;
    session.selection_mut().choose_state("California").await;
    session.selection_mut().choose_city("Los Angeles");
    session.address_mut().set_line(0, "1 Main St");
    session
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_creates_record_from_draft_and_selection() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;

        let record = session.submit(&mut store).unwrap();

        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@x.com");
        assert_eq!(record.calling_code, "+1");
        assert_eq!(record.country, "United States");
        assert_eq!(record.state, "California");
        assert_eq!(record.city, "Los Angeles");
        assert_eq!(record.address_lines, vec!["1 Main St".to_string()]);
        assert_eq!(store.list().len(), 1);

        // Session is cleared for the next interaction
        assert_eq!(session.selection().stage(), SelectionStage::Empty);
        assert!(!session.is_editing());
    }

    #[tokio::test]
    async fn test_submit_trims_and_drops_blank_address_lines() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;
        session.address_mut().set_line(0, "  1 Main St  ");
        session.address_mut().add_line();
        session.address_mut().add_line();
        session.address_mut().set_line(2, "Apt 4");

        let record = session.submit(&mut store).unwrap();
        assert_eq!(
            record.address_lines,
            vec!["1 Main St".to_string(), "Apt 4".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission_and_store_is_untouched() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;
        session.set_email("not-an-email");

        let result = session.submit(&mut store);

        match result {
            Err(SubmitError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::InvalidEmail(
                    "not-an-email".to_string()
                )));
            }
            other => panic!("Expected validation failure, got {:?}", other.map(|r| r.id)),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_date_of_birth_blocks_submission() {
        let mut store = RecordStore::new();
        let mut session = EditorSession::new(FixtureDirectory);
        session.begin_add().await;
        session.set_name("Ana");
        session.set_email("ana@x.com");

        let result = session.submit(&mut store);

        match result {
            Err(SubmitError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::MissingField("date_of_birth")));
                assert!(errors.contains(&ValidationError::MissingField("gender")));
            }
            other => panic!("Expected validation failure, got {:?}", other.map(|r| r.id)),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_all_blank_address_lines_block_submission() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;
        session.address_mut().set_line(0, "   ");

        let result = session.submit(&mut store);
        match result {
            Err(SubmitError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::NoAddressLines]);
            }
            other => panic!("Expected validation failure, got {:?}", other.map(|r| r.id)),
        }
    }
}

mod edit_tests {
    use super::*;

    #[tokio::test]
    async fn test_begin_edit_seeds_fields_and_redrives_selection() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;
        let record = session.submit(&mut store).unwrap();

        session.begin_edit(&record).await;

        assert!(session.is_editing());
        assert_eq!(session.selection().country(), Some("United States"));
        assert_eq!(session.selection().states(), ["California", "Texas"]);
        assert_eq!(session.selection().chosen_state(), Some("California"));
        assert_eq!(
            session.selection().cities(),
            ["Los Angeles", "San Diego"]
        );
        assert_eq!(session.selection().chosen_city(), Some("Los Angeles"));
        assert_eq!(session.address().lines(), ["1 Main St"]);
    }

    #[tokio::test]
    async fn test_edit_submit_patches_existing_record() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;
        let record = session.submit(&mut store).unwrap();

        session.begin_edit(&record).await;
        session.selection_mut().choose_city("San Diego");
        let updated = session.submit(&mut store).unwrap();

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.city, "San Diego");
        assert_eq!(updated.name, "Ana");
        assert_eq!(store.list().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_draft_without_touching_store() {
        let mut store = RecordStore::new();
        let mut session = filled_session().await;

        session.cancel();
        assert_eq!(session.selection().stage(), SelectionStage::Empty);

        // Submitting the cancelled (now empty) draft is a validation error
        assert!(matches!(
            session.submit(&mut store),
            Err(SubmitError::Validation(_))
        ));
        assert!(store.is_empty());
    }
}
