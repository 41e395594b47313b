use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::ActivityError;
use crate::models::{ActivityListing, MessageResponse};

pub fn list_activities(directory: &ActivityDirectory) -> ActivityListing {
    directory.snapshot()
}

/// Signs `email` up for `activity_name`.
pub fn signup_for_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match directory.join(activity_name, email) {
        Ok(enrolled) => {
            let spots_left = directory
                .get(activity_name)
                .map_or(0, |record| record.spots_left());
            info!(activity = %activity_name, email = %email, enrolled, spots_left, "participant signed up");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Unregisters `email` from `activity_name`.
pub fn remove_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match directory.leave(activity_name, email) {
        Ok(enrolled) => {
            info!(activity = %activity_name, email = %email, enrolled, "participant removed");
            Ok(MessageResponse {
                message: format!("Removed {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "removal rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::default_activities;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::from_seed(default_activities()).unwrap()
    }

    fn chess_participants(dir: &ActivityDirectory) -> Vec<String> {
        list_activities(dir).get("Chess Club").unwrap().participants.clone()
    }

    #[test]
    fn chess_club_walkthrough() {
        let dir = directory();

        let joined = signup_for_activity(&dir, "Chess Club", "x@y.edu").unwrap();
        assert_eq!(joined.message, "Signed up x@y.edu for Chess Club");
        let after_join = chess_participants(&dir);
        assert_eq!(after_join.len(), 3);
        assert_eq!(after_join.iter().filter(|p| *p == "x@y.edu").count(), 1);

        assert_eq!(
            signup_for_activity(&dir, "Chess Club", "x@y.edu").unwrap_err(),
            ActivityError::AlreadySignedUp
        );
        assert_eq!(chess_participants(&dir).len(), 3);

        let left = remove_participant(&dir, "Chess Club", "x@y.edu").unwrap();
        assert_eq!(left.message, "Removed x@y.edu from Chess Club");
        assert_eq!(
            chess_participants(&dir),
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );

        assert_eq!(
            remove_participant(&dir, "Chess Club", "x@y.edu").unwrap_err(),
            ActivityError::ParticipantNotFound
        );
    }

    #[test]
    fn filling_an_activity_to_capacity() {
        let dir = directory();
        for i in 0..10 {
            signup_for_activity(&dir, "Chess Club", &format!("student{i}@mergington.edu")).unwrap();
        }
        assert_eq!(
            signup_for_activity(&dir, "Chess Club", "late@mergington.edu").unwrap_err(),
            ActivityError::ActivityFull
        );
        for (_, record) in list_activities(&dir) {
            assert!(record.participants.len() <= record.max_participants);
        }
    }

    #[test]
    fn separate_directories_do_not_share_state() {
        let first = directory();
        let second = directory();
        signup_for_activity(&first, "Drama Club", "solo@mergington.edu").unwrap();
        assert!(!second.get("Drama Club").unwrap().has_participant("solo@mergington.edu"));
    }
}
