use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{ActivityError, SeedError};
use crate::models::{ActivityListing, ActivityRecord};

struct ActivityEntry {
    name: String,
    record: Mutex<ActivityRecord>,
}

impl ActivityEntry {
    // A poisoned record is still consistent: every mutation is a single push or remove.
    fn lock(&self) -> MutexGuard<'_, ActivityRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory set of activities and their enrolment.
///
/// The activity names are fixed at construction. Each record sits behind its
/// own lock, held across the whole check-then-mutate sequence of a join or
/// leave, so concurrent joins can never push an activity past its capacity.
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
    index: HashMap<String, usize>,
}

impl ActivityDirectory {
    /// Builds a directory, rejecting records that already break an invariant.
    pub fn from_seed<I, S>(seed: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = (S, ActivityRecord)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (name, record) in seed {
            let name = name.into();
            validate_record(&name, &record)?;
            if index.contains_key(&name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            index.insert(name.clone(), entries.len());
            entries.push(ActivityEntry {
                name,
                record: Mutex::new(record),
            });
        }

        if entries.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn entry(&self, name: &str) -> Result<&ActivityEntry, ActivityError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or(ActivityError::ActivityNotFound)
    }

    /// Copy of one record.
    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.entry(name).ok().map(|e| e.lock().clone())
    }

    /// Copy of every record in seed order.
    pub fn snapshot(&self) -> ActivityListing {
        ActivityListing(
            self.entries
                .iter()
                .map(|e| (e.name.clone(), e.lock().clone()))
                .collect(),
        )
    }

    /// Appends `email` to the activity. Returns the new participant count.
    ///
    /// Checks run in a fixed order: unknown activity, already enrolled, full.
    pub fn join(&self, name: &str, email: &str) -> Result<usize, ActivityError> {
        let entry = self.entry(name)?;
        let mut record = entry.lock();
        if record.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if record.is_full() {
            return Err(ActivityError::ActivityFull);
        }
        record.participants.push(email.to_string());
        Ok(record.participants.len())
    }

    /// Removes `email` from the activity. Returns the new participant count.
    pub fn leave(&self, name: &str, email: &str) -> Result<usize, ActivityError> {
        let entry = self.entry(name)?;
        let mut record = entry.lock();
        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::ParticipantNotFound);
        };
        record.participants.remove(pos);
        Ok(record.participants.len())
    }
}

fn validate_record(name: &str, record: &ActivityRecord) -> Result<(), SeedError> {
    if record.max_participants == 0 {
        return Err(SeedError::ZeroCapacity(name.to_string()));
    }
    let mut seen = HashSet::new();
    for email in &record.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.to_string(),
                email: email.clone(),
            });
        }
    }
    if record.participants.len() > record.max_participants {
        return Err(SeedError::OverCapacity {
            activity: name.to_string(),
            enrolled: record.participants.len(),
            capacity: record.max_participants,
        });
    }
    Ok(())
}
