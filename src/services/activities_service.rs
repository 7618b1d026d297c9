use axum::http::StatusCode;
use thiserror::Error;
use tracing::info;

use crate::database::activities_repo::{self, ParticipantWrite};
use crate::database::ActivityStore;
use crate::models::ActivityMap;

/// Why a signup or unregister request was turned down. Nothing is written
/// to the registry when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl ActivityError {
    pub fn status(self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

pub fn list_activities(store: &ActivityStore) -> ActivityMap {
    activities_repo::list_activities(store)
}

/// Adds `email` to the roster. `max_participants` is not checked.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match activities_repo::insert_participant(store, activity_name, email) {
        ParticipantWrite::Applied => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        ParticipantWrite::Unchanged => Err(ActivityError::AlreadySignedUp),
        ParticipantWrite::ActivityMissing => Err(ActivityError::NotFound),
    }
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match activities_repo::remove_participant(store, activity_name, email) {
        ParticipantWrite::Applied => {
            info!(activity = %activity_name, email = %email, "participant unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        ParticipantWrite::Unchanged => Err(ActivityError::NotRegistered),
        ParticipantWrite::ActivityMissing => Err(ActivityError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    fn seeded_store() -> ActivityStore {
        ActivityStore::new(seed::default_activities().unwrap())
    }

    fn participants(store: &ActivityStore, activity: &str) -> Vec<String> {
        list_activities(store)[activity].participants.clone()
    }

    #[test]
    fn signup_adds_email_once() {
        let store = seeded_store();
        let message = signup(&store, "Basketball Team", "test@mergington.edu").unwrap();
        assert!(message.contains("test@mergington.edu"));
        assert!(message.contains("Basketball Team"));

        let roster = participants(&store, "Basketball Team");
        assert_eq!(
            roster.iter().filter(|p| *p == "test@mergington.edu").count(),
            1
        );
    }

    #[test]
    fn duplicate_signup_is_conflict_and_leaves_roster_alone() {
        let store = seeded_store();
        signup(&store, "Soccer Club", "duplicate@mergington.edu").unwrap();
        let count = participants(&store, "Soccer Club").len();

        let err = signup(&store, "Soccer Club", "duplicate@mergington.edu").unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().to_lowercase().contains("already signed up"));
        assert_eq!(participants(&store, "Soccer Club").len(), count);
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let store = seeded_store();
        let before = list_activities(&store);

        let err = signup(&store, "Nonexistent Activity", "test@mergington.edu").unwrap_err();
        assert_eq!(err, ActivityError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().to_lowercase().contains("not found"));

        let err = unregister(&store, "Nonexistent Activity", "test@mergington.edu").unwrap_err();
        assert_eq!(err, ActivityError::NotFound);
        assert_eq!(list_activities(&store), before);
    }

    #[test]
    fn unregister_removes_email() {
        let store = seeded_store();
        signup(&store, "Drama Club", "unregister@mergington.edu").unwrap();
        let message = unregister(&store, "Drama Club", "unregister@mergington.edu").unwrap();
        assert!(message.contains("unregister@mergington.edu"));
        assert!(!participants(&store, "Drama Club")
            .iter()
            .any(|p| p == "unregister@mergington.edu"));
    }

    #[test]
    fn unregister_seeded_participant() {
        let store = seeded_store();
        unregister(&store, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(participants(&store, "Chess Club"), vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn unregister_non_member_is_conflict() {
        let store = seeded_store();
        let err = unregister(&store, "Math Club", "notregistered@mergington.edu").unwrap_err();
        assert_eq!(err, ActivityError::NotRegistered);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().to_lowercase().contains("not registered"));
    }

    #[test]
    fn signup_then_unregister_restores_count() {
        let store = seeded_store();
        let initial = participants(&store, "Debate Team").len();

        signup(&store, "Debate Team", "flow@mergington.edu").unwrap();
        assert_eq!(participants(&store, "Debate Team").len(), initial + 1);

        unregister(&store, "Debate Team", "flow@mergington.edu").unwrap();
        assert_eq!(participants(&store, "Debate Team").len(), initial);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let store = seeded_store();
        let max = list_activities(&store)["Math Club"].max_participants as usize;
        for i in 0..=max {
            signup(&store, "Math Club", &format!("extra{}@mergington.edu", i)).unwrap();
        }
        assert!(participants(&store, "Math Club").len() > max);
    }

    #[test]
    fn email_is_not_validated() {
        let store = seeded_store();
        assert!(signup(&store, "Art Club", "not an email").is_ok());
        assert!(signup(&store, "Art Club", "").is_ok());
    }
}
