use crate::models::{ActivityListing, ActivityRecord};

const SEED: &[(&str, &str, &str, usize, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Volleyball Team",
        "Competitive volleyball team with regular practices and matches",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        16,
        &["harper@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Track and Field",
        "Sprint, distance and field events training and competitions",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        25,
        &["liam@mergington.edu", "emma@mergington.edu"],
    ),
    (
        "Photography Club",
        "Explore photography techniques, editing, and exhibitions",
        "Wednesdays, 3:30 PM - 5:00 PM",
        20,
        &["mia@mergington.edu"],
    ),
    (
        "Ceramics Studio",
        "Hands-on pottery and ceramics, glazing and kiln work",
        "Fridays, 3:30 PM - 5:30 PM",
        12,
        &["olivia@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Math Club",
        "Problem-solving, competitions, and math enrichment",
        "Thursdays, 3:30 PM - 4:30 PM",
        18,
        &["noah@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Prepare for regional science competitions and hands-on labs",
        "Mondays, 3:30 PM - 5:00 PM",
        20,
        &["ethan@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball team and training",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Soccer League",
        "Join our competitive soccer league",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        22,
        &["james@mergington.edu", "lucy@mergington.edu"],
    ),
    (
        "Drama Club",
        "Perform in school plays and theatrical productions",
        "Wednesdays, 4:00 PM - 5:30 PM",
        25,
        &["sarah@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and sculpture",
        "Fridays, 3:30 PM - 5:00 PM",
        18,
        &["mia@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Robotics Club",
        "Design and build robots for competitions",
        "Mondays and Fridays, 3:30 PM - 5:00 PM",
        16,
        &["ethan@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Thursdays, 3:30 PM - 5:00 PM",
        20,
        &["noah@mergington.edu", "ava@mergington.edu"],
    ),
];

/// The built-in school activities, used when no seed file is configured.
pub fn default_activities() -> ActivityListing {
    ActivityListing(
        SEED.iter()
            .map(|(name, description, schedule, max, participants)| {
                (
                    (*name).to_string(),
                    ActivityRecord::new(*description, *schedule, *max, participants),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chess_club_matches_published_schedule() {
        let seed = default_activities();
        assert_eq!(seed.len(), 15);
        let chess = seed.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn first_entry_is_chess_club() {
        assert_eq!(default_activities().names().next(), Some("Chess Club"));
    }
}
