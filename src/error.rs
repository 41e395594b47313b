use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

/// Rejections produced by join and leave.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found in activity")]
    ParticipantNotFound,
    #[error("Student already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound => {
                ErrorKind::NotFound
            }
            ActivityError::AlreadySignedUp | ActivityError::ActivityFull => ErrorKind::Conflict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed contains no activities")]
    Empty,
    #[error("activity {0:?} is listed more than once")]
    DuplicateActivity(String),
    #[error("activity {0:?} has a capacity of zero")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
    #[error("activity {activity:?} has {enrolled} participants but room for {capacity}")]
    OverCapacity {
        activity: String,
        enrolled: usize,
        capacity: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("cannot read activities seed {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse activities seed {}: {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid activities seed: {0}")]
    Seed(#[from] SeedError),
}
